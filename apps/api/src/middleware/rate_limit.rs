#![allow(dead_code)]

//! Per-IP sliding-window rate limiter for the suggestion routes.
//!
//! In-memory on purpose: the limiter guards a single API process and resets
//! on restart. State is a mutex-guarded map of IP → request timestamps,
//! pruned on every check.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::AppError;
use crate::state::AppState;

pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Mutex<HashMap<IpAddr, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests: max_requests as usize,
            window: Duration::from_secs(window_secs),
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request for `ip` and reports whether it is allowed.
    /// Timestamps outside the window are pruned first.
    pub fn check(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        let mut requests = self.requests.lock().expect("rate limiter poisoned");
        let timestamps = requests.entry(ip).or_default();

        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.max_requests {
            return false;
        }
        timestamps.push(now);
        true
    }

    /// Requests still available for `ip` within the current window.
    pub fn remaining(&self, ip: IpAddr) -> usize {
        let now = Instant::now();
        let mut requests = self.requests.lock().expect("rate limiter poisoned");
        let timestamps = requests.entry(ip).or_default();
        timestamps.retain(|t| now.duration_since(*t) < self.window);
        self.max_requests.saturating_sub(timestamps.len())
    }
}

/// Client IP for limiting: the first `x-forwarded-for` entry when present
/// (the service normally sits behind a proxy), otherwise the socket address.
pub fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> IpAddr {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse::<IpAddr>().ok())
        .unwrap_or_else(|| addr.ip())
}

/// Axum middleware rejecting over-limit clients with 429.
pub async fn limit_by_ip(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ip = client_ip(request.headers(), addr);

    if !state.rate_limiter.check(ip) {
        tracing::warn!("Rate limit exceeded for {ip}");
        return Err(AppError::RateLimited);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([127, 0, 0, last])
    }

    #[test]
    fn test_admits_up_to_max() {
        let limiter = RateLimiter::new(3, 60);
        assert!(limiter.check(ip(1)));
        assert!(limiter.check(ip(1)));
        assert!(limiter.check(ip(1)));
        assert!(!limiter.check(ip(1)));
    }

    #[test]
    fn test_limits_are_per_ip() {
        let limiter = RateLimiter::new(1, 60);
        assert!(limiter.check(ip(1)));
        assert!(!limiter.check(ip(1)));
        assert!(limiter.check(ip(2)));
    }

    #[test]
    fn test_zero_window_prunes_immediately() {
        let limiter = RateLimiter::new(1, 0);
        assert!(limiter.check(ip(1)));
        // The previous timestamp ages out instantly, so the next request is
        // admitted again.
        assert!(limiter.check(ip(1)));
    }

    #[test]
    fn test_remaining_counts_down() {
        let limiter = RateLimiter::new(2, 60);
        assert_eq!(limiter.remaining(ip(1)), 2);
        limiter.check(ip(1));
        assert_eq!(limiter.remaining(ip(1)), 1);
        limiter.check(ip(1));
        assert_eq!(limiter.remaining(ip(1)), 0);
    }

    #[test]
    fn test_client_ip_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "10.1.2.3, 172.16.0.1".parse().unwrap());
        let addr: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        assert_eq!(client_ip(&headers, addr), "10.1.2.3".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_client_ip_falls_back_to_socket() {
        let addr: SocketAddr = "192.168.1.5:1234".parse().unwrap();
        assert_eq!(
            client_ip(&HeaderMap::new(), addr),
            "192.168.1.5".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_client_ip_ignores_garbage_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "not-an-ip".parse().unwrap());
        let addr: SocketAddr = "127.0.0.1:80".parse().unwrap();
        assert_eq!(client_ip(&headers, addr), "127.0.0.1".parse::<IpAddr>().unwrap());
    }
}
