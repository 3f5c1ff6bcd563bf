use std::net::{IpAddr, Ipv4Addr};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one line per event
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite:app.db | SQLite 数据库位置 |
/// | HTTP_HOST | 127.0.0.1 | 监听地址 |
/// | HTTP_PORT | 5555 | HTTP 服务端口 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | RUN_MIGRATIONS | true | 启动时执行迁移 |
/// | LOG_FORMAT | pretty | pretty 或 json |
/// | LOG_DIR | (未设置) | 日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite:zoo.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database location
    pub database_url: String,
    /// Address the HTTP server binds to
    pub http_host: IpAddr,
    /// HTTP server port
    pub http_port: u16,
    /// Upper bound of the connection pool
    pub db_max_connections: u32,
    /// Apply embedded migrations on startup
    pub run_migrations: bool,
    pub log_format: LogFormat,
    /// Directory for rolling log files; stdout when unset
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:app.db".into(),
            http_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            http_port: 5555,
            db_max_connections: 5,
            run_migrations: true,
            log_format: LogFormat::Pretty,
            log_dir: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值，无法解析的值返回错误
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            http_host: parse_or("HTTP_HOST", var("HTTP_HOST"), defaults.http_host)?,
            http_port: parse_or("HTTP_PORT", var("HTTP_PORT"), defaults.http_port)?,
            db_max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                var("DB_MAX_CONNECTIONS"),
                defaults.db_max_connections,
            )?,
            run_migrations: match var("RUN_MIGRATIONS") {
                Some(v) => parse_bool("RUN_MIGRATIONS", &v)?,
                None => defaults.run_migrations,
            },
            log_format: match var("LOG_FORMAT") {
                Some(v) => parse_log_format(&v)?,
                None => defaults.log_format,
            },
            log_dir: var("LOG_DIR"),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: v }),
        None => Ok(default),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        }),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            name: "LOG_FORMAT",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| env.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite:app.db");
        assert_eq!(config.http_host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.http_port, 5555);
        assert_eq!(config.db_max_connections, 5);
        assert!(config.run_migrations);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("DATABASE_URL", "sqlite:/var/lib/zoo/zoo.db"),
            ("HTTP_HOST", "0.0.0.0"),
            ("HTTP_PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("RUN_MIGRATIONS", "no"),
            ("LOG_FORMAT", "JSON"),
            ("LOG_DIR", "/var/log/zoo"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite:/var/lib/zoo/zoo.db");
        assert_eq!(config.http_host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.db_max_connections, 2);
        assert!(!config.run_migrations);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/zoo"));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = from_pairs(&[("HTTP_PORT", ""), ("LOG_DIR", "  ")]).unwrap();
        assert_eq!(config.http_port, 5555);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = from_pairs(&[("HTTP_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "HTTP_PORT", .. }));
    }

    #[test]
    fn test_invalid_bool_and_format() {
        assert!(from_pairs(&[("RUN_MIGRATIONS", "maybe")]).is_err());
        assert!(from_pairs(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
