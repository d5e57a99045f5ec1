//! Runtime application configuration loaded from the environment.

use super::defaults;
use super::validation::validate_setting;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server_port: u16,
    pub bind_address: String,
    pub font_path: String,
    pub capture_scale: u32,
    pub status_duration_secs: u64,
    pub clipboard_command: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            bind_address: "127.0.0.1".into(),
            font_path: String::new(),
            capture_scale: 2,
            status_duration_secs: 3,
            clipboard_command: String::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`.
    ///
    /// Unset keys take their default. Values failing validation are logged
    /// and replaced by the default as well.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let default = defaults::get_default(key).unwrap_or_default();
            let Some(value) = lookup(key) else {
                return default.to_string();
            };
            let value = value.trim().to_string();
            match validate_setting(key, &value) {
                Ok(()) => value,
                Err(reason) => {
                    tracing::warn!(key, value = %value, reason = %reason, "Invalid setting, using default");
                    default.to_string()
                }
            }
        };

        let fallback = Self::default();
        Self {
            server_port: parse_or(&g("SERVER_PORT"), fallback.server_port),
            bind_address: g("BIND_ADDRESS"),
            font_path: g("FONT_PATH"),
            capture_scale: parse_or(&g("CAPTURE_SCALE"), fallback.capture_scale),
            status_duration_secs: parse_or(&g("STATUS_DURATION_SECS"), fallback.status_duration_secs),
            clipboard_command: g("CLIPBOARD_COMMAND"),
        }
    }

    /// `host:port` the server binds to.
    pub fn listen_addr(&self) -> String {
        if self.bind_address.contains(':') {
            format!("[{}]:{}", self.bind_address, self.server_port)
        } else {
            format!("{}:{}", self.bind_address, self.server_port)
        }
    }
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
