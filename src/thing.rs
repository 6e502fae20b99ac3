use super::*;

/// A listing child, tagged by reddit's `kind` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub(crate) enum Thing {
  #[serde(rename = "t1")]
  Comment(CommentData),
  #[serde(rename = "t3")]
  Link(Submission),
  #[serde(rename = "more")]
  More(#[allow(dead_code)] IgnoredAny),
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentData {
  #[serde(default)]
  pub(crate) body: Option<String>,
  pub(crate) created_utc: f64,
  #[serde(default)]
  pub(crate) score: i64,
}
