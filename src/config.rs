use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime configuration.
///
/// Values come from `Config::default()` and are overridden by `TRIVIA_*`
/// environment variables (e.g. `TRIVIA_DATABASE_URL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Insert the standard categories when the table is empty.
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.sqlite".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
            seed_categories: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("TRIVIA_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TRIVIA_LISTEN_ADDR", "127.0.0.1:9000");
            jail.set_env("TRIVIA_SEED_CATEGORIES", "false");

            let cfg = Config::load()?;
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert!(!cfg.seed_categories);
            assert_eq!(cfg.database_url, "sqlite:trivia.sqlite");
            Ok(())
        });
    }
}
