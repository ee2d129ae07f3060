use super::*;

/// A viewer's rating on a video.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeKind {
  Dislike,
  Like,
}

#[derive(Serialize)]
struct NewLike {
  like_type: LikeKind,
  video_id: u64,
}

impl Client {
  pub async fn like_status(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.get(&format!("/likes/video/{video_id}/status")))
      .await
      .inspect_err(|error| {
        error!("error fetching like status for video {video_id}: {error}");
      })
  }

  pub async fn liked_videos(&self, page: Page) -> Result<Value> {
    self
      .execute(self.get("/likes/me").query(&page))
      .await
      .inspect_err(|error| error!("error fetching liked videos: {error}"))
  }

  pub async fn rate_video(
    &self,
    video_id: u64,
    like_type: LikeKind,
  ) -> Result<Value> {
    self
      .execute(self.post("/likes/").json(&NewLike {
        like_type,
        video_id,
      }))
      .await
      .inspect_err(|error| error!("error rating video {video_id}: {error}"))
  }

  pub async fn remove_like(&self, video_id: u64) -> Result<Value> {
    self
      .execute(self.delete(&format!("/likes/{video_id}")))
      .await
      .inspect_err(|error| {
        error!("error removing like from video {video_id}: {error}");
      })
  }

  pub async fn video_likes(&self, video_id: u64, page: Page) -> Result<Value> {
    self
      .execute(self.get(&format!("/likes/video/{video_id}")).query(&page))
      .await
      .inspect_err(|error| {
        error!("error fetching likes for video {video_id}: {error}");
      })
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    mockito::{Matcher, Server},
    serde_json::json,
  };

  #[tokio::test]
  async fn rate_video_sends_kind_as_lowercase_like_type() {
    let mut server = Server::new_async().await;

    let mock = server
      .mock("POST", "/likes/")
      .match_body(Matcher::Json(json!({
        "video_id": 42,
        "like_type": "dislike",
      })))
      .with_header("content-type", "application/json")
      .with_body(r#"{"video_id": 42, "like_type": "dislike"}"#)
      .create_async()
      .await;

    let client = Client::new(server.url());

    client.rate_video(42, LikeKind::Dislike).await.unwrap();

    mock.assert_async().await;
  }

  #[tokio::test]
  async fn liked_videos_paginates() {
    let mut server = Server::new_async().await;

    let mock = server
      .mock("GET", "/likes/me")
      .match_query(Matcher::AllOf(vec![
        Matcher::UrlEncoded("skip".into(), "0".into()),
        Matcher::UrlEncoded("limit".into(), "20".into()),
      ]))
      .with_header("content-type", "application/json")
      .with_body("[]")
      .create_async()
      .await;

    let client = Client::new(server.url());

    client.liked_videos(Page::LISTING).await.unwrap();

    mock.assert_async().await;
  }

  #[tokio::test]
  async fn video_likes_lists_the_video_subresource() {
    let mut server = Server::new_async().await;

    let mock = server
      .mock("GET", "/likes/video/42")
      .match_query(Matcher::AllOf(vec![
        Matcher::UrlEncoded("skip".into(), "0".into()),
        Matcher::UrlEncoded("limit".into(), "100".into()),
      ]))
      .with_header("content-type", "application/json")
      .with_body("[]")
      .create_async()
      .await;

    let client = Client::new(server.url());

    client.video_likes(42, Page::LIKES).await.unwrap();

    mock.assert_async().await;
  }

  #[tokio::test]
  async fn remove_like_propagates_transport_errors() {
    let mut server = Server::new_async().await;

    let mock = server
      .mock("DELETE", "/likes/42")
      .with_status(401)
      .create_async()
      .await;

    let client = Client::new(server.url());

    let error = client.remove_like(42).await.unwrap_err();

    mock.assert_async().await;

    assert_eq!(
      error.downcast_ref::<reqwest::Error>().unwrap().status(),
      Some(reqwest::StatusCode::UNAUTHORIZED)
    );
  }
}
