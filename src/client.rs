use super::*;

/// Shared connection to the API: a reqwest client plus the base URL every
/// request path is joined onto.
///
/// Authentication headers, timeouts and interceptors are the transport's
/// concern. Callers that need them configure a `reqwest::Client` themselves
/// and hand it to [`Client::with_http_client`].
#[derive(Clone, Debug)]
pub struct Client {
  base_url: String,
  http: reqwest::Client,
}

impl Client {
  pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
    self.http.delete(self.url(path))
  }

  pub(crate) async fn execute(
    &self,
    request: reqwest::RequestBuilder,
  ) -> Result<Value> {
    Ok(request.send().await?.error_for_status()?.json().await?)
  }

  pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
    self.http.get(self.url(path))
  }

  pub fn new(base_url: impl Into<String>) -> Self {
    Self::with_http_client(reqwest::Client::new(), base_url)
  }

  pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
    self.http.post(self.url(path))
  }

  pub(crate) fn put(&self, path: &str) -> reqwest::RequestBuilder {
    self.http.put(self.url(path))
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }

  pub fn with_http_client(
    http: reqwest::Client,
    base_url: impl Into<String>,
  ) -> Self {
    let mut base_url = base_url.into();

    while base_url.ends_with('/') {
      base_url.pop();
    }

    Self { base_url, http }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_joins_path_onto_base() {
    let client = Client::new("http://localhost:8000/api/v1");

    assert_eq!(
      client.url("/comments/"),
      "http://localhost:8000/api/v1/comments/"
    );
  }

  #[test]
  fn url_tolerates_trailing_slashes_on_base() {
    let client = Client::new("http://localhost:8000/api/v1//");

    assert_eq!(
      client.url("/videos/7"),
      "http://localhost:8000/api/v1/videos/7"
    );
  }
}
