use super::*;

/// Filters for the main video listing. Unset filters stay out of the query
/// string entirely; the server applies its own defaults for them.
#[derive(Clone, Debug, Serialize)]
pub struct VideoQuery {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub limit: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub search: Option<String>,
  pub skip: u64,
  pub sort_by: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tags: Option<String>,
}

impl Default for VideoQuery {
  fn default() -> Self {
    Self {
      category: None,
      limit: 20,
      search: None,
      skip: 0,
      sort_by: "created_at".into(),
      tags: None,
    }
  }
}

impl Client {
  pub async fn feed_videos(&self, feed: Feed, limit: u64) -> Result<Value> {
    self
      .execute(
        self
          .get(&format!("/videos/{}", feed.path()))
          .query(&[("limit", limit)]),
      )
      .await
      .inspect_err(|error| {
        error!("error fetching {} videos: {error}", feed.path());
      })
  }

  pub async fn record_view(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.post(&format!("/videos/{video_id}/view")))
      .await
      .inspect_err(|error| {
        error!("error recording view on video {video_id}: {error}");
      })
  }

  pub async fn user_videos(&self, user_id: u64, page: Page) -> Result<Value> {
    self
      .execute(self.get(&format!("/videos/user/{user_id}")).query(&page))
      .await
      .inspect_err(|error| {
        error!("error fetching videos for user {user_id}: {error}");
      })
  }

  pub async fn video(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.get(&format!("/videos/{video_id}")))
      .await
      .inspect_err(|error| error!("error fetching video {video_id}: {error}"))
  }

  pub async fn videos(&self, query: &VideoQuery) -> Result<Value> {
    self
      .execute(self.get("/videos/").query(query))
      .await
      .inspect_err(|error| error!("error fetching videos: {error}"))
  }
}
