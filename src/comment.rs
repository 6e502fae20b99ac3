use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Comment {
  pub(crate) body: String,
  pub(crate) created_utc: f64,
  pub(crate) score: i64,
}

impl Comment {
  /// Returns `None` for comments whose body is missing or empty.
  pub(crate) fn from_data(data: CommentData) -> Option<Self> {
    let body = decode_entities(&data.body?);

    if body.is_empty() {
      return None;
    }

    Some(Self {
      body,
      created_utc: data.created_utc,
      score: data.score,
    })
  }
}
