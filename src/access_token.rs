use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
  pub(crate) access_token: Option<String>,
  pub(crate) error: Option<Value>,
}

impl AccessToken {
  pub(crate) fn into_token(self) -> Result<String> {
    match (self.access_token, self.error) {
      (_, Some(Value::String(error))) => {
        bail!("authentication failed: {error}")
      }
      (_, Some(error)) => bail!("authentication failed: {error}"),
      (Some(token), None) => Ok(token),
      (None, None) => {
        bail!("authentication response did not include an access token")
      }
    }
  }
}
