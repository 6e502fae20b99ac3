use super::*;

/// Walks the new, hot and rising views of one community, dropping posts
/// already seen in an earlier view and attaching their top comments.
pub(crate) struct Collector<'a, S> {
  source: &'a S,
  subreddit: &'a str,
}

impl<'a, S: Source> Collector<'a, S> {
  const MAX_COMMENTS: usize = 5;

  /// `limit` is shared by the three views, each requesting `limit / 3`.
  ///
  /// A post rejected by `cutoff` is not marked as seen, so the same id
  /// is checked again if a later view returns it.
  pub(crate) async fn collect(
    &self,
    cutoff: Option<f64>,
    limit: usize,
  ) -> Result<Vec<Post>> {
    let per_view = limit / 3;

    let mut posts = Vec::new();

    let mut seen = HashSet::new();

    for &sort in Sort::all() {
      let submissions = self
        .source
        .listing(self.subreddit, sort, per_view)
        .await
        .with_context(|| {
          format!(
            "failed to load {} posts from r/{}",
            sort.endpoint(),
            self.subreddit
          )
        })?;

      debug!(view = sort.endpoint(), count = submissions.len(), "loaded listing");

      for submission in submissions {
        if seen.contains(&submission.id) {
          continue;
        }

        if cutoff.is_some_and(|cutoff| submission.created_utc <= cutoff) {
          continue;
        }

        seen.insert(submission.id.clone());

        let top_comments = self.top_comments(&submission.id).await?;

        posts.push(Post::new(submission, top_comments));
      }
    }

    info!(count = posts.len(), subreddit = self.subreddit, "collected posts");

    Ok(posts)
  }

  pub(crate) fn new(source: &'a S, subreddit: &'a str) -> Self {
    Self { source, subreddit }
  }

  async fn top_comments(&self, id: &str) -> Result<Vec<Comment>> {
    Ok(
      self
        .source
        .comments(id)
        .await
        .with_context(|| format!("failed to load comments for post {id}"))?
        .into_iter()
        .filter_map(|thing| match thing {
          Thing::Comment(data) => Comment::from_data(data),
          Thing::Link(_) | Thing::More(_) => None,
        })
        .take(Self::MAX_COMMENTS)
        .collect(),
    )
  }
}
