use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Longest accepted token lifetime (one year).
pub const MAX_EXPIRE_MINUTES: i64 = 60 * 24 * 365;

/// Token signing parameters, fixed for the lifetime of the process.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: String,
    pub expire_minutes: i64,
}

impl JwtConfig {
    /// Token lifetime as a duration.
    ///
    /// # Errors
    /// `ConfigError::Message` if `expire_minutes` is not in `1..=MAX_EXPIRE_MINUTES`
    pub fn token_ttl(&self) -> Result<Duration, ConfigError> {
        if (1..=MAX_EXPIRE_MINUTES).contains(&self.expire_minutes) {
            Ok(Duration::minutes(self.expire_minutes))
        } else {
            Err(ConfigError::Message(format!(
                "jwt.expire_minutes must be between 1 and {}, got {}",
                MAX_EXPIRE_MINUTES, self.expire_minutes
            )))
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("expire_minutes", &self.expire_minutes)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub credentials: Vec<SeedCredential>,
}

/// Doctor login identity loaded at startup. The password is hashed before
/// it reaches the credential store and is never kept in plaintext.
#[derive(Deserialize, Clone)]
pub struct SeedCredential {
    pub username: String,
    pub display_name: String,
    pub password: String,
}

impl std::fmt::Debug for SeedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedCredential")
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (HOSPITAL_JWT__SECRET, HOSPITAL_SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults (port 8000, HS256, 30 minute tokens)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", 8000)?
            .set_default("jwt.algorithm", "HS256")?
            .set_default("jwt.expire_minutes", auth::DEFAULT_TOKEN_TTL_MINUTES)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: HOSPITAL_JWT__SECRET=... overrides jwt.secret
            .add_source(
                Environment::with_prefix("HOSPITAL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(expire_minutes: i64) -> JwtConfig {
        JwtConfig {
            secret: "top-secret-signing-key-of-32-bytes!".to_string(),
            algorithm: "HS256".to_string(),
            expire_minutes,
        }
    }

    #[test]
    fn test_token_ttl_bounds() {
        assert_eq!(jwt_config(30).token_ttl().unwrap(), Duration::minutes(30));
        assert_eq!(
            jwt_config(MAX_EXPIRE_MINUTES).token_ttl().unwrap(),
            Duration::minutes(MAX_EXPIRE_MINUTES)
        );

        for minutes in [0, -5, MAX_EXPIRE_MINUTES + 1, 100_000_000_000_000, i64::MAX] {
            assert!(jwt_config(minutes).token_ttl().is_err(), "{} minutes", minutes);
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let jwt = format!("{:?}", jwt_config(30));
        assert!(!jwt.contains("top-secret"));
        assert!(jwt.contains("<redacted>"));

        let seed = format!(
            "{:?}",
            SeedCredential {
                username: "bruno".to_string(),
                display_name: "Dr. Bruno Alves".to_string(),
                password: "senha123".to_string(),
            }
        );
        assert!(seed.contains("bruno"));
        assert!(!seed.contains("senha123"));
    }
}
