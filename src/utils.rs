use super::*;

/// Decodes the HTML entities reddit escapes in text fields.
pub(crate) fn decode_entities(text: &str) -> String {
  html_escape::decode_html_entities(text).into_owned()
}

pub(crate) fn unix_now() -> Result<f64> {
  Ok(
    SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .context("system time before UNIX_EPOCH")?
      .as_secs_f64(),
  )
}
