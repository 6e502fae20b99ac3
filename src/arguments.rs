use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "ucla-scraper",
  about = "Fetch recent subreddit posts and their top comments as one line of JSON",
  disable_help_flag = true
)]
pub(crate) struct Arguments {
  /// Only include posts created after this Unix timestamp, in seconds
  #[arg(allow_hyphen_values = true)]
  cutoff: Option<String>,
  #[allow(dead_code)]
  #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
  extra: Vec<String>,
  /// Combined post budget for the new, hot and rising views
  #[arg(long, default_value_t = 100)]
  pub(crate) limit: usize,
  /// Community to collect from
  #[arg(long, env = "REDDIT_SUBREDDIT", default_value = "ucla")]
  pub(crate) subreddit: String,
}

impl Arguments {
  /// An unparseable cutoff is treated as no cutoff.
  pub(crate) fn cutoff(&self) -> Option<f64> {
    self
      .cutoff
      .as_deref()?
      .trim()
      .parse::<f64>()
      .ok()
      .filter(|cutoff| cutoff.is_finite())
  }
}
