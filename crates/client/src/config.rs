/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the portfolio API, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    /// | Env Var         | Default                 |
    /// |-----------------|-------------------------|
    /// | `FOLIO_API_URL` | `http://localhost:5000` |
    pub fn from_env() -> Self {
        let api_url = std::env::var("FOLIO_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".into())
            .trim_end_matches('/')
            .to_string();
        Self { api_url }
    }
}
