use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
  #[serde(default)]
  pub(crate) children: Vec<Thing>,
}

impl Listing {
  pub(crate) fn into_submissions(self) -> Vec<Submission> {
    self
      .data
      .children
      .into_iter()
      .filter_map(|thing| match thing {
        Thing::Link(submission) => Some(submission),
        Thing::Comment(_) | Thing::More(_) => None,
      })
      .collect()
  }
}
