// Posts API endpoint functions.
// Typed fetches against the REST endpoints, plus the PostSource binding.

use async_trait::async_trait;

use crate::error::Result;

use super::PostSource;
use super::client::PostsClient;
use super::types::Post;

impl PostsClient {
    /// Get the full post collection, in the order the server returns it.
    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let response = self.get("/posts").await?;
        let posts: Vec<Post> = response.json().await?;
        Ok(posts)
    }
}

#[async_trait]
impl PostSource for PostsClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.get_posts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostboardError;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_posts_decodes_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"userId": 1, "id": 1, "title": "A", "body": "B"},
                {"userId": 1, "id": 2, "title": "C", "body": "D"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = PostsClient::new(&server.uri()).unwrap();
        let posts = client.get_posts().await.unwrap();

        assert_eq!(posts, vec![Post::new(1, "A", "B"), Post::new(2, "C", "D")]);
    }

    #[tokio::test]
    async fn test_get_posts_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = PostsClient::new(&server.uri()).unwrap();
        let err = client.fetch_posts().await.unwrap_err();

        assert!(matches!(err, PostboardError::Status(s) if s.as_u16() == 500));
        assert_eq!(err.to_string(), "Network response was not ok");
    }

    #[tokio::test]
    async fn test_get_posts_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = PostsClient::new(&server.uri()).unwrap();
        let err = client.fetch_posts().await.unwrap_err();

        assert!(matches!(err, PostboardError::Http(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_get_posts_connection_refused() {
        // Nothing listens on the discard port.
        let client = PostsClient::new("http://127.0.0.1:9").unwrap();
        let err = client.fetch_posts().await.unwrap_err();

        assert!(matches!(err, PostboardError::Http(_)));
    }
}
