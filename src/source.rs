use super::*;

/// The upstream API the collector reads from.
pub(crate) trait Source {
  /// Top-level comment tree of a post, placeholders included.
  async fn comments(&self, id: &str) -> Result<Vec<Thing>>;

  async fn listing(
    &self,
    subreddit: &str,
    sort: Sort,
    limit: usize,
  ) -> Result<Vec<Submission>>;
}
