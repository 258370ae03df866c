use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::email::InviteRateLimit;
use crate::infrastructure::invitation::InvitationSettings;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub service: ServiceConfig,
    pub team: TeamConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Public base URL used in invitation links
    pub site_url: String,
    pub enable_email_invitations: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TeamConfig {
    /// Global invitation domain restriction, e.g. `"corp.com, partner.org"`
    pub restrict_creation_to_domains: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Without a limiter every invitation dispatch fails
    pub enable_invite_rate_limit: bool,
    pub invite_max_per_window: u32,
    pub invite_window_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:8080".to_string(),
            enable_email_invitations: true,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enable_invite_rate_limit: true,
            invite_max_per_window: 20,
            invite_window_secs: 3600,
        }
    }
}

impl EmailConfig {
    /// Limiter settings, or `None` when rate limiting is switched off
    pub fn invite_rate_limit(&self) -> Option<InviteRateLimit> {
        self.enable_invite_rate_limit.then(|| {
            InviteRateLimit::new(
                self.invite_max_per_window,
                Duration::from_secs(self.invite_window_secs),
            )
        })
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn invitation_settings(&self) -> InvitationSettings {
        InvitationSettings {
            enable_email_invitations: self.service.enable_email_invitations,
            site_url: self.service.site_url.clone(),
            restrict_creation_to_domains: self.team.restrict_creation_to_domains.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert!(config.service.enable_email_invitations);
        assert!(config.team.restrict_creation_to_domains.is_empty());
        assert_eq!(
            config.email.invite_rate_limit(),
            Some(InviteRateLimit::hourly(20))
        );
    }

    #[test]
    fn test_rate_limit_disabled() {
        let email = EmailConfig {
            enable_invite_rate_limit: false,
            ..Default::default()
        };
        assert_eq!(email.invite_rate_limit(), None);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("team.restrict_creation_to_domains", "corp.com")
            .unwrap()
            .set_override("service.enable_email_invitations", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.team.restrict_creation_to_domains, "corp.com");
        assert!(!config.service.enable_email_invitations);
        assert_eq!(config.service.site_url, "http://localhost:8080");
        assert_eq!(config.server.port, 8080);

        let settings = config.invitation_settings();
        assert_eq!(settings.restrict_creation_to_domains, "corp.com");
        assert!(!settings.enable_email_invitations);
    }
}
