use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config/receipt-points";
const ENV_PREFIX: &str = "RECEIPTS";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> config/receipt-points.* (可选) -> RECEIPTS_ 环境变量
    /// 例: RECEIPTS_SERVER__PORT=9000
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("log.level", defaults.log.level)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// 从环境变量加载配置, 失败时使用默认值
    pub fn from_env() -> Self {
        Self::load().unwrap_or_else(|e| {
            eprintln!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 日志级别, 无法识别时为 INFO
    pub fn log_level(&self) -> tracing::Level {
        self.log.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        config.log.level = "debug".to_string();
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        config.log.level = "loud".to_string();
        assert_eq!(config.log_level(), tracing::Level::INFO);
    }
}
