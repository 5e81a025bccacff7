//! Per-IP rate limiting for the public booking submission.
//!
//! A windowed counter: the first request from an IP opens a window, later
//! requests increment its count, and the window resets once it has aged
//! out. The limiter is an owned component on `AppState` with an explicit
//! purge method, so its lifetime and cleanup are visible and testable.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::http::HeaderMap;
use tokio::time::interval;
use tracing::debug;

/// How often stale windows are swept out.
const PURGE_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    window_start: Instant,
    count: u32,
}

pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    entries: Mutex<HashMap<String, WindowEntry>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request from `key` and report whether it is allowed.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("rate limiter lock poisoned");

        let entry = entries
            .entry(key.to_string())
            .and_modify(|entry| {
                if now.duration_since(entry.window_start) > self.window {
                    entry.window_start = now;
                    entry.count = 0;
                }
                entry.count += 1;
            })
            .or_insert(WindowEntry {
                window_start: now,
                count: 1,
            });

        entry.count <= self.max_requests
    }

    /// Drop windows that have aged out.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("rate limiter lock poisoned");
        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.window_start) <= self.window);
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "Rate limiter windows purged");
        }
    }

    /// Number of IPs currently tracked.
    pub fn tracked(&self) -> usize {
        self.entries.lock().expect("rate limiter lock poisoned").len()
    }
}

/// Client IP for rate limiting: first hop of x-forwarded-for, then
/// x-real-ip, then a shared bucket for direct connections.
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Periodically sweep stale limiter windows.
pub async fn start_limiter_purger(limiter: std::sync::Arc<RateLimiter>) {
    let mut interval = interval(PURGE_INTERVAL);
    loop {
        interval.tick().await;
        limiter.purge_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_requests_allowed_up_to_cap() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 3);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn test_keys_counted_independently() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 1);
        assert!(limiter.check("1.2.3.4"));
        assert!(limiter.check("5.6.7.8"));
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let limiter = RateLimiter::new(Duration::from_millis(10), 1);
        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.check("1.2.3.4"));
    }

    #[test]
    fn test_purge_drops_stale_windows_only() {
        let limiter = RateLimiter::new(Duration::from_millis(10), 5);
        limiter.check("stale");
        std::thread::sleep(Duration::from_millis(20));
        limiter.check("fresh");
        limiter.purge_expired();
        assert_eq!(limiter.tracked(), 1);
    }

    #[test]
    fn test_client_ip_header_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_ip(&headers), "203.0.113.9");

        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));
        assert_eq!(client_ip(&headers), "198.51.100.2");

        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }
}
