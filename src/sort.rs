#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Sort {
  Hot,
  New,
  Rising,
}

impl Sort {
  /// Listing views in the order they are collected.
  pub(crate) fn all() -> &'static [Sort] {
    &[Sort::New, Sort::Hot, Sort::Rising]
  }

  pub(crate) fn endpoint(self) -> &'static str {
    match self {
      Sort::Hot => "hot",
      Sort::New => "new",
      Sort::Rising => "rising",
    }
  }
}
