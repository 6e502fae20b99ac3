use super::*;

/// An authenticated reddit API session.
pub(crate) struct Client {
  api_url: String,
  client: reqwest::Client,
  rate_limit: RateLimit,
  token: String,
}

impl Client {
  /// Reddit never returns more than this many children per listing page.
  const PAGE_LIMIT: usize = 100;

  pub(crate) async fn connect(config: &Config) -> Result<Self> {
    let client_id = config
      .client_id
      .as_deref()
      .context("REDDIT_CLIENT_ID is not set")?;

    let client_secret = config
      .client_secret
      .as_deref()
      .context("REDDIT_CLIENT_SECRET is not set")?;

    let client = reqwest::Client::builder()
      .user_agent(&config.user_agent)
      .build()
      .context("failed to build http client")?;

    let rate_limit = RateLimit::default();

    let response = client
      .post(format!("{}/api/v1/access_token", config.auth_url))
      .basic_auth(client_id, Some(client_secret))
      .form(&[("grant_type", "client_credentials")])
      .send()
      .await
      .context("failed to request access token")?;

    rate_limit.observe(response.headers());

    let token = response
      .error_for_status()?
      .json::<AccessToken>()
      .await
      .context("malformed access token response")?
      .into_token()?;

    debug!("authenticated with reddit");

    Ok(Self {
      api_url: config.api_url.clone(),
      client,
      rate_limit,
      token,
    })
  }

  async fn get<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, &str)],
  ) -> Result<T> {
    self.rate_limit.wait().await;

    let url = format!("{}{path}", self.api_url);

    debug!(%url, "requesting");

    let response = self
      .client
      .get(&url)
      .bearer_auth(&self.token)
      .query(query)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?;

    self.rate_limit.observe(response.headers());

    response
      .error_for_status()?
      .json::<T>()
      .await
      .with_context(|| format!("malformed response from {url}"))
  }
}

impl Source for Client {
  async fn comments(&self, id: &str) -> Result<Vec<Thing>> {
    let (_, comments) = self
      .get::<(Listing, Listing)>(
        &format!("/comments/{id}"),
        &[("sort", "confidence"), ("depth", "1")],
      )
      .await?;

    Ok(comments.data.children)
  }

  async fn listing(
    &self,
    subreddit: &str,
    sort: Sort,
    limit: usize,
  ) -> Result<Vec<Submission>> {
    if limit == 0 {
      return Ok(Vec::new());
    }

    if limit > Self::PAGE_LIMIT {
      warn!(limit, "listing limit exceeds one page, clamping to {}", Self::PAGE_LIMIT);
    }

    let limit = limit.min(Self::PAGE_LIMIT);

    let mut submissions = self
      .get::<Listing>(
        &format!("/r/{subreddit}/{}", sort.endpoint()),
        &[("limit", limit.to_string().as_str())],
      )
      .await?
      .into_submissions();

    submissions.truncate(limit);

    Ok(submissions)
  }
}
