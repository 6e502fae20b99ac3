use super::*;

#[derive(Debug, Serialize)]
pub(crate) struct Post {
  pub(crate) author: String,
  pub(crate) created_utc: f64,
  pub(crate) flair_text: Option<String>,
  pub(crate) id: String,
  pub(crate) is_self: bool,
  pub(crate) num_comments: u64,
  pub(crate) permalink: String,
  pub(crate) score: i64,
  pub(crate) selftext: String,
  pub(crate) title: String,
  pub(crate) top_comments: Vec<Comment>,
  pub(crate) upvote_ratio: f64,
  pub(crate) url: String,
}

impl Post {
  const DELETED_AUTHOR: &str = "[deleted]";

  const PERMALINK_BASE: &str = "https://reddit.com";

  pub(crate) fn new(submission: Submission, top_comments: Vec<Comment>) -> Self {
    Self {
      author: submission
        .author
        .unwrap_or_else(|| Self::DELETED_AUTHOR.to_string()),
      created_utc: submission.created_utc,
      flair_text: submission
        .link_flair_text
        .as_deref()
        .map(decode_entities),
      id: submission.id,
      is_self: submission.is_self,
      num_comments: submission.num_comments,
      permalink: format!("{}{}", Self::PERMALINK_BASE, submission.permalink),
      score: submission.score,
      selftext: decode_entities(&submission.selftext),
      title: decode_entities(&submission.title),
      top_comments,
      upvote_ratio: submission.upvote_ratio,
      url: submission.url,
    }
  }
}
