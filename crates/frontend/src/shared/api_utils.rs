//! API utilities for frontend-backend communication

/// Порт backend-сервера
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port, e.g.
/// `http://localhost:3000`. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    api_base_from(&protocol, &hostname)
}

pub fn api_base_from(protocol: &str, hostname: &str) -> String {
    let hostname = if hostname.is_empty() { "127.0.0.1" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_from_location() {
        assert_eq!(api_base_from("http:", "localhost"), "http://localhost:3000");
        assert_eq!(api_base_from("https:", "example.com"), "https://example.com:3000");
        assert_eq!(api_base_from("http:", ""), "http://127.0.0.1:3000");
    }
}
