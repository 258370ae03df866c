//! Invite rate limiter
//!
//! Sliding window over the number of addresses invited per team.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Limiter settings: at most `max_per_window` addresses per `window`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InviteRateLimit {
    pub max_per_window: u32,
    pub window: Duration,
}

impl InviteRateLimit {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
        }
    }

    /// Budget over a one hour window
    pub fn hourly(max_per_window: u32) -> Self {
        Self::new(max_per_window, Duration::from_secs(3600))
    }
}

impl Default for InviteRateLimit {
    fn default() -> Self {
        Self::hourly(20)
    }
}

/// Result of a rate limit check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    /// Addresses still allowed in the current window
    pub remaining: u32,
    pub limit: u32,
    /// Seconds until the oldest entry in the window expires
    pub reset_in_seconds: u64,
}

#[derive(Debug, Clone)]
struct InviteRecord {
    timestamp: Instant,
    count: u32,
}

/// Per-key invite limiter
#[derive(Debug)]
pub struct InviteRateLimiter {
    limit: InviteRateLimit,
    records: Arc<RwLock<HashMap<String, Vec<InviteRecord>>>>,
}

impl InviteRateLimiter {
    /// Create a limiter; a zero budget or an empty window is rejected
    pub fn new(limit: InviteRateLimit) -> Result<Self, String> {
        if limit.max_per_window == 0 {
            return Err("max_per_window must be greater than zero".to_string());
        }

        if limit.window.is_zero() {
            return Err("window must be longer than zero seconds".to_string());
        }

        Ok(Self {
            limit,
            records: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Check whether `count` more addresses fit and record them if so
    pub async fn check_and_record(&self, key: &str, count: u32) -> RateLimitResult {
        let now = Instant::now();
        let window = self.limit.window;

        let mut records = self.records.write().await;
        let key_records = records.entry(key.to_string()).or_default();
        key_records.retain(|r| now.duration_since(r.timestamp) < window);

        let used: u32 = key_records.iter().map(|r| r.count).sum();
        let available = self.limit.max_per_window.saturating_sub(used);

        if count > available {
            let reset_in = key_records
                .iter()
                .map(|r| r.timestamp)
                .min()
                .map(|oldest| {
                    self.limit
                        .window
                        .saturating_sub(now.duration_since(oldest))
                        .as_secs()
                })
                .unwrap_or(self.limit.window.as_secs());

            return RateLimitResult {
                allowed: false,
                remaining: available,
                limit: self.limit.max_per_window,
                reset_in_seconds: reset_in,
            };
        }

        key_records.push(InviteRecord {
            timestamp: now,
            count,
        });

        RateLimitResult {
            allowed: true,
            remaining: available - count,
            limit: self.limit.max_per_window,
            reset_in_seconds: self.limit.window.as_secs(),
        }
    }

    /// Forget everything recorded for a key
    pub async fn reset(&self, key: &str) {
        self.records.write().await.remove(key);
    }
}
