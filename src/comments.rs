use super::*;

#[derive(Serialize)]
struct CommentUpdate<'a> {
  text: &'a str,
}

#[derive(Serialize)]
struct NewComment<'a> {
  parent_comment_id: Option<u64>,
  text: &'a str,
  video_id: u64,
}

/// Comment endpoints. Every operation is a single request/response round
/// trip: on failure it logs once and returns the transport error unchanged,
/// with no retry and no translation.
impl Client {
  pub async fn comment(&self, comment_id: u64) -> Result<Value> {
    self
      .execute(self.get(&format!("/comments/{comment_id}")))
      .await
      .inspect_err(|error| error!("error fetching comment {comment_id}: {error}"))
  }

  pub async fn comment_replies(
    &self,
    comment_id: u64,
    page: Page,
  ) -> Result<Value> {
    self
      .execute(self.get(&format!("/comments/{comment_id}/replies")).query(&page))
      .await
      .inspect_err(|error| {
        error!("error fetching replies to comment {comment_id}: {error}");
      })
  }

  pub async fn create_comment(
    &self,
    video_id: u64,
    text: &str,
    parent_comment_id: Option<u64>,
  ) -> Result<Value> {
    self
      .execute(self.post("/comments/").json(&NewComment {
        parent_comment_id,
        text,
        video_id,
      }))
      .await
      .inspect_err(|error| {
        error!("error creating comment on video {video_id}: {error}");
      })
  }

  pub async fn delete_comment(&self, comment_id: u64) -> Result<Value> {
    self
      .execute(self.delete(&format!("/comments/{comment_id}")))
      .await
      .inspect_err(|error| error!("error deleting comment {comment_id}: {error}"))
  }

  pub async fn update_comment(
    &self,
    comment_id: u64,
    text: &str,
  ) -> Result<Value> {
    self
      .execute(
        self
          .put(&format!("/comments/{comment_id}"))
          .json(&CommentUpdate { text }),
      )
      .await
      .inspect_err(|error| error!("error updating comment {comment_id}: {error}"))
  }

  pub async fn video_comments(
    &self,
    video_id: u64,
    page: Page,
  ) -> Result<Value> {
    self
      .execute(self.get(&format!("/comments/video/{video_id}")).query(&page))
      .await
      .inspect_err(|error| {
        error!("error fetching comments for video {video_id}: {error}");
      })
  }
}
