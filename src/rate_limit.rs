use super::*;

/// Tracks reddit's `x-ratelimit-*` headers and holds the next request back
/// until the window resets once the budget is spent.
#[derive(Debug, Default)]
pub(crate) struct RateLimit {
  resume_at: Cell<Option<Instant>>,
}

impl RateLimit {
  const REMAINING_HEADER: &str = "x-ratelimit-remaining";

  const RESET_HEADER: &str = "x-ratelimit-reset";

  fn delay(&self) -> Option<Duration> {
    self
      .resume_at
      .take()
      .map(|resume_at| resume_at.saturating_duration_since(Instant::now()))
      .filter(|delay| !delay.is_zero())
  }

  fn header(headers: &HeaderMap, name: &str) -> Option<f64> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
  }

  pub(crate) fn observe(&self, headers: &HeaderMap) {
    let (Some(remaining), Some(reset)) = (
      Self::header(headers, Self::REMAINING_HEADER),
      Self::header(headers, Self::RESET_HEADER),
    ) else {
      return;
    };

    let resume_at = (remaining < 1.0)
      .then(|| Duration::try_from_secs_f64(reset).ok())
      .flatten()
      .map(|reset| Instant::now() + reset);

    self.resume_at.set(resume_at);
  }

  pub(crate) async fn wait(&self) {
    if let Some(delay) = self.delay() {
      warn!(?delay, "reddit rate limit exhausted, waiting for reset");
      tokio::time::sleep(delay).await;
    }
  }
}
