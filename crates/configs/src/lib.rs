use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_BUSINESS_NAME: &str = "Aaron Cool Appliance Services";
pub const DEFAULT_WHATSAPP_PHONE: &str = "26772123456";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            static_dir: default_static_dir(),
        }
    }
}

/// Public-facing business details used when building chat deep links.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessConfig {
    #[serde(default = "default_business_name")]
    pub name: String,
    /// International number without `+` or spaces, as wa.me expects.
    #[serde(default = "default_whatsapp_phone")]
    pub whatsapp_phone: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self { name: default_business_name(), whatsapp_phone: default_whatsapp_phone() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    /// `host:port` for the healthz/metrics listener; disabled when absent.
    #[serde(default)]
    pub addr: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_static_dir() -> String { "frontend".into() }
fn default_business_name() -> String { DEFAULT_BUSINESS_NAME.into() }
fn default_whatsapp_phone() -> String { DEFAULT_WHATSAPP_PHONE.into() }
fn default_log_format() -> String { "compact".into() }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise defaults overlaid with env vars.
    ///
    /// A config file that exists but fails to parse or validate is an error;
    /// only a missing file triggers the env fallback.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        if let Ok(dir) = std::env::var("STATIC_DIR") {
            cfg.server.static_dir = dir;
        }
        if let Ok(phone) = std::env::var("WHATSAPP_PHONE") {
            cfg.business.whatsapp_phone = phone;
        }
        if let Ok(addr) = std::env::var("ADMIN_ADDR") {
            cfg.admin.addr = Some(addr);
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            cfg.logging.format = format;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.business.normalize_and_validate()?;
        self.admin.normalize();
        self.logging.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        if self.static_dir.trim().is_empty() {
            self.static_dir = default_static_dir();
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BusinessConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        if self.name.trim().is_empty() {
            self.name = default_business_name();
        }
        // 允许配置中带 "+" 或空格，统一去掉后再校验
        let phone: String = self
            .whatsapp_phone
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '+')
            .collect();
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(anyhow!("business.whatsapp_phone must contain digits only, got {:?}", self.whatsapp_phone));
        }
        self.whatsapp_phone = phone;
        Ok(())
    }
}

impl AdminConfig {
    fn normalize(&mut self) {
        if matches!(&self.addr, Some(a) if a.trim().is_empty()) {
            self.addr = None;
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be compact or json, got {other:?}")),
        }
    }
}
