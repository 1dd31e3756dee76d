use crate::application::services::{HttpClient, TodoService};
use crate::domain::entities::{Method as DomainMethod, Request, Response};
use crate::domain::value_objects::{JsonBody, Url};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use hyper::{Method, Request as HyperRequest};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

/// Infrastructure implementation of HttpClient using Hyper
/// This is a low-level HTTP transport that the application service uses
pub struct HyperHttpClient {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        let connector = HttpConnector::new();
        let client = Client::builder(TokioExecutor::new())
            .build::<HttpConnector, Full<Bytes>>(connector);
        Self { client }
    }

    /// Creates a todos service talking to `endpoint` through this client
    pub fn create_todo_service(self, endpoint: Url) -> TodoService {
        TodoService::new(Box::new(self), endpoint)
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn send(&self, request: Request) -> Result<Response> {
        let hyper_request = RequestAdapter::to_hyper_request(request)?;
        let hyper_response = self.execute_http_request(hyper_request).await?;
        ResponseAdapter::to_domain_response(hyper_response).await
    }
}

impl HyperHttpClient {
    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<hyper::body::Incoming>> {
        self.client
            .request(request)
            .await
            .map_err(|e| anyhow!("HTTP request execution failed: {}", e))
    }
}

/// Converts domain requests into Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(domain_request: Request) -> Result<HyperRequest<Full<Bytes>>> {
        let builder = HyperRequest::builder()
            .method(Self::method(domain_request.method))
            .uri(&domain_request.url.0);
        let mut builder = Self::add_headers(builder, &domain_request.headers)?;

        let body = match domain_request.body {
            Some(JsonBody(json)) => {
                builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Full::new(Bytes::from(json))
            }
            None => Full::new(Bytes::new()),
        };

        builder
            .body(body)
            .map_err(|e| anyhow!("Failed to build HTTP request: {}", e))
    }

    fn add_headers(
        mut builder: http::request::Builder,
        headers: &[(String, String)],
    ) -> Result<http::request::Builder> {
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| anyhow!("Invalid header name '{}': {}", key, e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| anyhow!("Invalid value for header '{}': {}", key, e))?;
            builder = builder.header(name, value);
        }
        Ok(builder)
    }

    fn method(domain_method: DomainMethod) -> Method {
        match domain_method {
            DomainMethod::Get => Method::GET,
            DomainMethod::Post => Method::POST,
            DomainMethod::Delete => Method::DELETE,
        }
    }
}

/// Converts Hyper responses into domain responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(
        hyper_response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<Response> {
        let status = hyper_response.status();
        let body_bytes = hyper_response
            .into_body()
            .collect()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?
            .to_bytes();

        let body = String::from_utf8(body_bytes.to_vec())
            .map_err(|e| anyhow!("Response body contains invalid UTF-8: {}", e))?;

        Ok(Response { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: DomainMethod, body: Option<&str>) -> Request {
        Request {
            method,
            url: Url::new("http://localhost:8080/todos/1").unwrap(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: body.map(|json| JsonBody::new(json).unwrap()),
        }
    }

    #[test]
    fn delete_maps_to_hyper_delete() {
        let hyper_request =
            RequestAdapter::to_hyper_request(request(DomainMethod::Delete, None)).unwrap();

        assert_eq!(hyper_request.method(), Method::DELETE);
        assert_eq!(hyper_request.uri(), "http://localhost:8080/todos/1");
        assert_eq!(hyper_request.headers()["accept"], "application/json");
        assert!(hyper_request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn json_body_sets_content_type() {
        let hyper_request =
            RequestAdapter::to_hyper_request(request(DomainMethod::Post, Some("{\"a\":1}")))
                .unwrap();

        assert_eq!(hyper_request.method(), Method::POST);
        assert_eq!(hyper_request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut bad = request(DomainMethod::Get, None);
        bad.headers.push(("bad header".to_string(), "x".to_string()));
        assert!(RequestAdapter::to_hyper_request(bad).is_err());
    }
}
