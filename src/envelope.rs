use super::*;

/// The single JSON document written to stdout per run.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Envelope {
  Failure {
    count: usize,
    error: String,
    posts: Vec<Post>,
    success: bool,
  },
  Success {
    count: usize,
    posts: Vec<Post>,
    scraped_at: f64,
    success: bool,
  },
}

impl Envelope {
  pub(crate) fn exit_code(&self) -> i32 {
    match self {
      Self::Failure { .. } => 1,
      Self::Success { .. } => 0,
    }
  }

  pub(crate) fn failure(error: &anyhow::Error) -> Self {
    Self::Failure {
      count: 0,
      error: format!("{error:#}"),
      posts: Vec::new(),
      success: false,
    }
  }

  pub(crate) fn success(posts: Vec<Post>, scraped_at: f64) -> Self {
    Self::Success {
      count: posts.len(),
      posts,
      scraped_at,
      success: true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn post(id: &str) -> Post {
    Post {
      author: "bruin".to_string(),
      created_utc: 1_700_000_000.0,
      flair_text: None,
      id: id.to_string(),
      is_self: false,
      num_comments: 0,
      permalink: format!("https://reddit.com/r/ucla/comments/{id}/"),
      score: 1,
      selftext: String::new(),
      title: "title".to_string(),
      top_comments: Vec::new(),
      upvote_ratio: 1.0,
      url: "https://example.com".to_string(),
    }
  }

  #[test]
  fn success_counts_posts() {
    let envelope = Envelope::success(vec![post("a"), post("b")], 1_700_000_500.25);

    assert_eq!(envelope.exit_code(), 0);

    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["count"], 2);
    assert_eq!(value["posts"].as_array().unwrap().len(), 2);
    assert_eq!(value["scraped_at"], 1_700_000_500.25);
    assert!(value.get("error").is_none());
  }

  #[test]
  fn success_with_no_posts_still_exits_zero() {
    let envelope = Envelope::success(Vec::new(), 0.0);

    assert_eq!(envelope.exit_code(), 0);
    assert_eq!(serde_json::to_value(&envelope).unwrap()["count"], 0);
  }

  #[test]
  fn failure_carries_error_chain_and_no_posts() {
    let error = anyhow!("401 Unauthorized").context("failed to authenticate");

    let envelope = Envelope::failure(&error);

    assert_eq!(envelope.exit_code(), 1);

    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["count"], 0);
    assert_eq!(value["posts"], serde_json::json!([]));
    assert_eq!(value["error"], "failed to authenticate: 401 Unauthorized");
    assert!(value.get("scraped_at").is_none());
  }

  #[test]
  fn serializes_on_a_single_line() {
    let line = serde_json::to_string(&Envelope::success(vec![post("a")], 1.0))
      .unwrap();

    assert!(!line.contains('\n'));
  }
}
