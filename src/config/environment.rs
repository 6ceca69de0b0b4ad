// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses port, host, environment, log level, and audit capacity from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for deployment

use crate::constants::{defaults, ports};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug detail, including engine stage logs
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind host
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Audit entries kept in memory before the oldest is evicted
    pub audit_capacity: usize,
    /// Comma-separated allowed CORS origins; empty or `*` allows any
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: defaults::DEFAULT_HOST.to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            audit_capacity: defaults::AUDIT_CAPACITY,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` or `AUDIT_CAPACITY` is set but does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or("HTTP_PORT", &ports::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;
        let audit_capacity: usize =
            env_var_or("AUDIT_CAPACITY", &defaults::AUDIT_CAPACITY.to_string())
                .parse()
                .context("Invalid AUDIT_CAPACITY value")?;

        Ok(Self {
            http_port,
            host: env_var_or("HOST", defaults::DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),
            audit_capacity: audit_capacity.max(1),
            cors_allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
        })
    }

    /// `host:port` socket address string
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fuelcast Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Audit Capacity: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.audit_capacity,
            self.cors_allowed_origins
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
