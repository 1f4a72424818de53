/// Process configuration, resolved once in `main` and passed into the app
/// state. Handlers never read the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    /// Comma-separated allowed CORS origins (`KAIZEN_CORS_ORIGINS`).
    pub cors_origins: Option<String>,
    pub llm: LlmConfig,
}

/// Connection settings for the OpenAI-compatible chat provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let database_url = var("DATABASE_URL").ok_or_else(|| "DATABASE_URL must be set".to_string())?;

        let port = var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000);

        let cors_origins = var("KAIZEN_CORS_ORIGINS");

        let llm = LlmConfig {
            base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            api_key: var("OPENAI_API_KEY"),
            model: var("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
        };

        Ok(Self {
            database_url,
            port,
            cors_origins,
            llm,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::AppConfig;

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn cors_origins_are_part_of_the_config() {
        let config = AppConfig::from_lookup(vars(&[
            ("DATABASE_URL", "postgres://localhost/kaizen"),
            (
                "KAIZEN_CORS_ORIGINS",
                "https://kaizenedge.app,https://staging.kaizenedge.app",
            ),
        ]))
        .unwrap();
        assert_eq!(
            config.cors_origins.as_deref(),
            Some("https://kaizenedge.app,https://staging.kaizenedge.app")
        );
    }

    #[test]
    fn cors_origins_default_to_unset() {
        let config =
            AppConfig::from_lookup(vars(&[("DATABASE_URL", "postgres://localhost/kaizen")]))
                .unwrap();
        assert!(config.cors_origins.is_none());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(vars(&[])).unwrap_err();
        assert!(err.contains("DATABASE_URL"));
    }
}
