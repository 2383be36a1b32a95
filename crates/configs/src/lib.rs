use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

/// Log output settings; `format` is `"compact"` or `"json"`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_log_format() -> String { "compact".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first, then environment variables when the file is missing or invalid.
    pub fn load_or_env() -> Result<Self> {
        match Self::load_and_validate() {
            Ok(cfg) => Ok(cfg),
            Err(_) => {
                let mut cfg = Self::from_env();
                cfg.normalize_and_validate()?;
                Ok(cfg)
            }
        }
    }

    /// Build from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `LOG_FORMAT`.
    pub fn from_env() -> Self {
        let server = ServerConfig {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            worker_threads: std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
        };
        let log = LogConfig {
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| default_log_format()),
        };
        Self { server, log }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.log.validate()?;
        Ok(())
    }

    /// `host:port` string suitable for `SocketAddr` parsing.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port 必须在 1..=65535 范围内"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
            Some(_) => {}
        }
        Ok(())
    }
}

impl LogConfig {
    fn validate(&self) -> Result<()> {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("log.format 只支持 compact 或 json，当前为 {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tmp(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("configs_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).expect("write tmp config");
        path
    }

    #[test]
    fn load_full_config_from_file() -> Result<()> {
        let path = write_tmp(
            r#"
[server]
host = "0.0.0.0"
port = 9000
worker_threads = 2

[log]
format = "json"
"#,
        );
        let mut cfg = load_from_file(path.to_str().unwrap())?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.log.format, "json");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        let _ = std::fs::remove_file(path);
        Ok(())
    }

    #[test]
    fn missing_sections_use_defaults() -> Result<()> {
        let path = write_tmp("");
        let mut cfg = load_from_file(path.to_str().unwrap())?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.log.format, "compact");
        let _ = std::fs::remove_file(path);
        Ok(())
    }

    #[test]
    fn normalize_fills_blank_host_and_zero_threads() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "  ".into();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn rejects_zero_port_and_unknown_log_format() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.log.format = "pretty".into();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
