/// Curated listings exposed by the videos service. `Following` requires an
/// authenticated transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Feed {
  Featured,
  Following,
  Hot,
  Recommended,
  Trending,
}

impl Feed {
  /// Page size the original feed consumers requested.
  pub const DEFAULT_LIMIT: u64 = 20;

  pub(crate) fn path(self) -> &'static str {
    match self {
      Self::Featured => "featured",
      Self::Following => "following",
      Self::Hot => "hot",
      Self::Recommended => "recommended",
      Self::Trending => "trending",
    }
  }
}
