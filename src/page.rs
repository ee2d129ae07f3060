use super::*;

/// Offset-based pagination for list endpoints. Values are forwarded to the
/// server verbatim; nothing is validated client-side.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Page {
  pub limit: u64,
  pub skip: u64,
}

impl Default for Page {
  fn default() -> Self {
    Self { limit: 50, skip: 0 }
  }
}

impl Page {
  /// Server-side default for per-video like listings.
  pub const LIKES: Self = Self { limit: 100, skip: 0 };

  /// Server-side default for video, liked-video and saved-video listings.
  /// Comment and reply listings default to a page of 50 instead, which is
  /// what [`Page::default`] returns.
  pub const LISTING: Self = Self { limit: 20, skip: 0 };

  pub fn new(skip: u64, limit: u64) -> Self {
    Self { limit, skip }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_page_starts_at_zero_with_limit_fifty() {
    let page = Page::default();

    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 50);
  }

  #[test]
  fn listing_defaults_match_the_video_surfaces() {
    assert_eq!(Page::LISTING.skip, 0);
    assert_eq!(Page::LISTING.limit, 20);
    assert_eq!(Page::LIKES.limit, 100);
  }

  #[test]
  fn new_preserves_arguments() {
    let page = Page::new(10, 20);

    assert_eq!(page.skip, 10);
    assert_eq!(page.limit, 20);
  }
}
