//! # Generic Client
//!
//! This module defines the generic REST client for a [`RestResource`].
//!
//! Every call follows the same sequence: resolve the path against the base URL, encode the
//! body (if any), send exactly one request through the [`HttpTransport`], reject any status
//! outside `200..=299`, then decode. Each step has its own [`NetworkError`] variant, and
//! nothing is retried or cached.

use crate::error::NetworkError;
use crate::resource::{Endpoint, RestResource};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A type-safe client for the CRUD endpoints of one resource type.
///
/// Cheap to clone: the transport is shared behind an `Arc`.
pub struct ResourceClient<R: RestResource, T: HttpTransport> {
    base_url: Url,
    transport: Arc<T>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: RestResource, T: HttpTransport> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            _resource: PhantomData,
        }
    }
}

impl<R: RestResource, T: HttpTransport> ResourceClient<R, T> {
    pub fn new(base_url: Url, transport: T) -> Self {
        Self::with_shared_transport(base_url, Arc::new(transport))
    }

    /// Builds a client over a transport that is also used elsewhere.
    pub fn with_shared_transport(base_url: Url, transport: Arc<T>) -> Self {
        Self {
            base_url,
            transport,
            _resource: PhantomData,
        }
    }

    /// Resolves a logical operation to an absolute URL.
    pub fn resolve(&self, endpoint: Endpoint<R::Id>) -> Result<Url, NetworkError> {
        let path = R::path(endpoint);
        self.base_url
            .join(&path)
            .map_err(|e| NetworkError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    /// `GET` the collection and decode it as a JSON array.
    pub async fn list(&self) -> Result<Vec<R>, NetworkError> {
        let url = self.resolve(Endpoint::List)?;
        let response = self.execute(HttpRequest::new(Method::Get, url)).await?;
        let items: Vec<R> = decode(&response)?;
        info!(count = items.len(), "Listed");
        Ok(items)
    }

    /// `POST` a draft and return the server's canonical copy.
    pub async fn create(&self, draft: &R) -> Result<R, NetworkError> {
        debug!(?draft, "Create");
        let url = self.resolve(Endpoint::Create)?;
        let body = encode(draft)?;
        let response = self
            .execute(HttpRequest::new(Method::Post, url).with_json_body(body))
            .await?;
        let created: R = decode(&response)?;
        info!(id = ?created.id(), "Created");
        Ok(created)
    }

    /// `PUT` the full representation of an existing resource.
    ///
    /// Fails with [`NetworkError::MissingId`] before any call if `item` has no id.
    pub async fn update(&self, item: &R) -> Result<R, NetworkError> {
        let id = item.id().ok_or_else(|| {
            warn!(?item, "Update without id");
            NetworkError::MissingId
        })?;
        debug!(%id, ?item, "Update");
        let url = self.resolve(Endpoint::Update(id))?;
        let body = encode(item)?;
        let response = self
            .execute(HttpRequest::new(Method::Put, url).with_json_body(body))
            .await?;
        let updated: R = decode(&response)?;
        info!(%id, "Updated");
        Ok(updated)
    }

    /// `DELETE` by id. Success is decided by the status code alone.
    pub async fn delete(&self, id: R::Id) -> Result<(), NetworkError> {
        debug!(%id, "Delete");
        let url = self.resolve(Endpoint::Delete(id))?;
        self.execute(HttpRequest::new(Method::Delete, url)).await?;
        info!(%id, "Deleted");
        Ok(())
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!(%method, %url, status = response.status, "Unexpected status");
            return Err(NetworkError::HttpError(response.status));
        }
        Ok(response)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, NetworkError> {
    serde_json::to_vec(body).map_err(|e| NetworkError::EncodingFail(e.to_string()))
}

fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, NetworkError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        warn!(error = %e, "Decoding failed");
        NetworkError::DecodingFail(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde::{Deserialize, Serializer};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u32>,
        text: String,
    }

    impl RestResource for Note {
        type Id = u32;

        fn id(&self) -> Option<u32> {
            self.id
        }

        fn path(endpoint: Endpoint<u32>) -> String {
            match endpoint {
                Endpoint::List | Endpoint::Create => "api/notes/".to_string(),
                Endpoint::Update(id) | Endpoint::Delete(id) => format!("api/notes/{}/", id),
            }
        }
    }

    /// A resource whose serialization always fails.
    #[derive(Clone, Debug, Deserialize)]
    struct Unencodable {
        id: Option<u32>,
    }

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    impl RestResource for Unencodable {
        type Id = u32;

        fn id(&self) -> Option<u32> {
            self.id
        }

        fn path(_endpoint: Endpoint<u32>) -> String {
            "api/broken/".to_string()
        }
    }

    fn base() -> Url {
        Url::parse("http://127.0.0.1:8000/").unwrap()
    }

    #[tokio::test]
    async fn test_list_decodes_array() {
        let mut mock = MockTransport::new();
        mock.expect(Method::Get, "/api/notes/")
            .return_body(200, r#"[{"id":1,"text":"a"},{"id":2,"text":"b"}]"#);

        let client = ResourceClient::<Note, _>::new(base(), mock.clone());
        let notes = client.list().await.unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].text, "b");
        mock.verify();
    }

    #[tokio::test]
    async fn test_status_boundaries() {
        for (status, ok) in [(199, false), (200, true), (204, true), (299, true), (300, false)] {
            let mut mock = MockTransport::new();
            mock.expect(Method::Delete, "/api/notes/3/").return_body(status, "");
            let client = ResourceClient::<Note, _>::new(base(), mock.clone());

            let result = client.delete(3).await;
            assert_eq!(result.is_ok(), ok, "status {}", status);
            if !ok {
                assert_eq!(result, Err(NetworkError::HttpError(status)));
            }
        }
    }

    #[tokio::test]
    async fn test_error_status_ignores_body() {
        let mut mock = MockTransport::new();
        mock.expect(Method::Get, "/api/notes/")
            .return_body(500, r#"[{"id":1,"text":"valid but ignored"}]"#);
        let client = ResourceClient::<Note, _>::new(base(), mock.clone());

        assert_eq!(client.list().await, Err(NetworkError::HttpError(500)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decoding_fail() {
        let mut mock = MockTransport::new();
        mock.expect(Method::Get, "/api/notes/").return_body(200, r#"{"not":"a list"}"#);
        let client = ResourceClient::<Note, _>::new(base(), mock.clone());

        assert!(matches!(
            client.list().await,
            Err(NetworkError::DecodingFail(_))
        ));
    }

    #[tokio::test]
    async fn test_update_without_id_makes_no_call() {
        let mock = MockTransport::new();
        let client = ResourceClient::<Note, _>::new(base(), mock.clone());
        let draft = Note {
            id: None,
            text: "draft".into(),
        };

        assert_eq!(client.update(&draft).await, Err(NetworkError::MissingId));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_encoding_failure_makes_no_call() {
        let mock = MockTransport::new();
        let client = ResourceClient::<Unencodable, _>::new(base(), mock.clone());

        let result = client.create(&Unencodable { id: None }).await;
        assert!(matches!(result, Err(NetworkError::EncodingFail(_))));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unjoinable_base_is_invalid_url() {
        let mock = MockTransport::new();
        let base = Url::parse("mailto:barista@example.com").unwrap();
        let client = ResourceClient::<Note, _>::new(base, mock.clone());

        assert!(matches!(
            client.list().await,
            Err(NetworkError::InvalidUrl(_))
        ));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_json_body() {
        let mut mock = MockTransport::new();
        mock.expect(Method::Post, "/api/notes/")
            .return_body(201, r#"{"id":9,"text":"hello"}"#);
        let client = ResourceClient::<Note, _>::new(base(), mock.clone());

        let created = client
            .create(&Note {
                id: None,
                text: "hello".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, Some(9));

        let requests = mock.requests();
        let sent = &requests[0];
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.body.as_deref(), Some(br#"{"text":"hello"}"#.as_slice()));
    }
}
