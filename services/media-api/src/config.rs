use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use media_vault_quota::DEFAULT_USER_STORAGE_QUOTA_BYTES;

#[derive(Debug, Clone)]
pub struct MediaApiConfig {
    pub server_host: String,
    pub server_port: u16,
    pub data_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_storage_quota_bytes: i64,
    pub enable_jwt: bool,
    pub jwt_secret: Option<String>,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,
    pub log_level: String,
}

impl Default for MediaApiConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8190,
            data_dir: PathBuf::from("data/media"),
            request_timeout_secs: 30,
            user_storage_quota_bytes: DEFAULT_USER_STORAGE_QUOTA_BYTES as i64,
            enable_jwt: true,
            jwt_secret: None,
            jwt_issuer: None,
            jwt_audience: None,
            log_level: "info".to_string(),
        }
    }
}

impl MediaApiConfig {
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(host) = env::var("MEDIA_HOST") {
            cfg.server_host = host;
        }
        if let Ok(port) = env::var("MEDIA_PORT") {
            cfg.server_port = port.parse().context("MEDIA_PORT must be a valid u16")?;
        }
        if let Ok(dir) = env::var("MEDIA_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }
        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout_secs = timeout
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a positive integer")?;
        }
        if let Ok(quota) = env::var("USER_STORAGE_QUOTA_BYTES") {
            cfg.user_storage_quota_bytes = quota
                .parse()
                .context("USER_STORAGE_QUOTA_BYTES must be an integer byte count")?;
        }
        if let Ok(flag) = env::var("ENABLE_JWT") {
            cfg.enable_jwt =
                parse_bool(&flag).with_context(|| format!("ENABLE_JWT is invalid: {flag}"))?;
        }
        cfg.jwt_secret = non_empty_var("JWT_SECRET");
        cfg.jwt_issuer = non_empty_var("JWT_ISSUER");
        cfg.jwt_audience = non_empty_var("JWT_AUDIENCE");
        if let Ok(level) = env::var("LOG_LEVEL") {
            cfg.log_level = level;
        }

        cfg.validate()?;
        ensure_directory(&cfg.data_dir)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.user_storage_quota_bytes <= 0 {
            anyhow::bail!("USER_STORAGE_QUOTA_BYTES must be greater than zero");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if self.enable_jwt
            && self
                .jwt_secret
                .as_deref()
                .map_or(true, |secret| secret.trim().is_empty())
        {
            anyhow::bail!("JWT_SECRET must be set when ENABLE_JWT is true");
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            anyhow::bail!("{} exists but is not a directory", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("unable to create data directory {}", path.display()))?;
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => anyhow::bail!("invalid boolean value {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_five_gib_quota() {
        let cfg = MediaApiConfig::default();
        assert_eq!(cfg.user_storage_quota_bytes, 5 * 1024 * 1024 * 1024);
        assert_eq!(cfg.listen_addr(), "127.0.0.1:8190");
    }

    #[test]
    fn jwt_requires_secret() {
        let mut cfg = MediaApiConfig::default();
        assert!(cfg.validate().is_err());

        cfg.jwt_secret = Some("   ".to_string());
        assert!(cfg.validate().is_err());

        cfg.jwt_secret = Some("secret".to_string());
        assert!(cfg.validate().is_ok());

        cfg.jwt_secret = None;
        cfg.enable_jwt = false;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn quota_must_be_positive() {
        let mut cfg = MediaApiConfig {
            enable_jwt: false,
            ..MediaApiConfig::default()
        };
        cfg.user_storage_quota_bytes = 0;
        assert!(cfg.validate().is_err());
        cfg.user_storage_quota_bytes = -1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parses_boolean_flags() {
        assert!(parse_bool("YES").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
