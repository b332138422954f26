use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SECRET: &str = "secret";
const DEFAULT_DATABASE_URL: &str = "sqlite://bugtracker.sqlite?mode=rwc";

/// Deployment environment selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

pub struct Config {
    pub environment: Environment,
    pub port: u16,
    /// Secret the session cookie signing key is derived from.
    pub secret: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// `SECRET` and `DATABASE_URL` have development defaults but must be set
    /// explicitly in production.
    ///
    /// # Arguments
    /// - `var` - Returns the value of an environment variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables valid
    /// - `Err(AppError::ConfigErr(_))` - A variable is missing or invalid
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let environment = match var("APP_ENV") {
            None => Environment::default(),
            Some(value) => Environment::parse(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "APP_ENV".to_string(),
                value,
                reason: "must be one of 'development', 'production' or 'test'".to_string(),
            })?,
        };

        let port = match var("PORT") {
            None => DEFAULT_PORT,
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                    reason: "must be an integer between 0 and 65535".to_string(),
                })?,
        };

        let is_production = environment == Environment::Production;
        let with_default = |name: &str, default: &str| -> Result<String, ConfigError> {
            match var(name) {
                Some(value) => Ok(value),
                None if is_production => Err(ConfigError::MissingEnvVar(name.to_string())),
                None => Ok(default.to_string()),
            }
        };

        Ok(Self {
            environment,
            port,
            secret: with_default("SECRET", DEFAULT_SECRET)?,
            database_url: with_default("DATABASE_URL", DEFAULT_DATABASE_URL)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
