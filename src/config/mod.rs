mod app_config;

pub use app_config::{
    AppConfig, EmailConfig, LogFormat, LoggingConfig, ServerConfig, ServiceConfig, TeamConfig,
};
