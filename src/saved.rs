use super::*;

impl Client {
  pub async fn save_status(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.get(&format!("/saved/{video_id}/status")))
      .await
      .inspect_err(|error| {
        error!("error fetching save status for video {video_id}: {error}");
      })
  }

  pub async fn save_video(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.post(&format!("/saved/{video_id}")))
      .await
      .inspect_err(|error| error!("error saving video {video_id}: {error}"))
  }

  pub async fn saved_videos(&self, page: Page) -> Result<Value> {
    self
      .execute(self.get("/saved/me").query(&page))
      .await
      .inspect_err(|error| error!("error fetching saved videos: {error}"))
  }

  pub async fn unsave_video(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.delete(&format!("/saved/{video_id}")))
      .await
      .inspect_err(|error| error!("error unsaving video {video_id}: {error}"))
  }
}
