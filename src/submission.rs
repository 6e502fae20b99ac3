use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Submission {
  pub(crate) author: Option<String>,
  pub(crate) created_utc: f64,
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) is_self: bool,
  pub(crate) link_flair_text: Option<String>,
  #[serde(default)]
  pub(crate) num_comments: u64,
  pub(crate) permalink: String,
  #[serde(default)]
  pub(crate) score: i64,
  #[serde(default)]
  pub(crate) selftext: String,
  pub(crate) title: String,
  #[serde(default)]
  pub(crate) upvote_ratio: f64,
  #[serde(default)]
  pub(crate) url: String,
}
