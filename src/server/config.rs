use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_APP_URL: &str = "http://localhost:3000";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_refresh_secret: String,

    /// Root of the media folders (`images`, `videos`, `pdfs`, `temp`).
    pub public_dir: PathBuf,
    pub bind_address: String,
    /// Front-end origin allowed by CORS.
    pub app_url: String,

    /// Delete media dropped by a draft when it is published.
    pub media_cleanup_on_publish: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_refresh_secret: required("JWT_REFRESH_SECRET")?,
            public_dir: PathBuf::from(optional("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            app_url: optional("APP_URL", DEFAULT_APP_URL),
            media_cleanup_on_publish: flag("MEDIA_CLEANUP_ON_PUBLISH")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn flag(name: &str) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
    }
}
