use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) auth_url: String,
  pub(crate) client_id: Option<String>,
  pub(crate) client_secret: Option<String>,
  pub(crate) user_agent: String,
}

impl Config {
  const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

  const DEFAULT_AUTH_URL: &str = "https://www.reddit.com";

  const DEFAULT_USER_AGENT: &str = "ucla-news-summarizer/1.0";

  pub(crate) fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let url = |key: &str, default: &str| {
      get(key)
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
    };

    Self {
      api_url: url("REDDIT_API_URL", Self::DEFAULT_API_URL),
      auth_url: url("REDDIT_AUTH_URL", Self::DEFAULT_AUTH_URL),
      client_id: get("REDDIT_CLIENT_ID"),
      client_secret: get("REDDIT_CLIENT_SECRET"),
      user_agent: get("REDDIT_USER_AGENT")
        .unwrap_or_else(|| Self::DEFAULT_USER_AGENT.to_string()),
    }
  }

  /// Reads `.env` when one exists, then the process environment.
  pub(crate) fn load() -> Self {
    dotenvy::dotenv().ok();
    Self::from_env()
  }
}
