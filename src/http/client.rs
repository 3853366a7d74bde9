use crate::errors::{ApiError, ApiResult};
use log::{debug, error};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Payload of an outgoing request
pub enum RequestBody {
    Empty,
    /// Serialized JSON document
    Json(Vec<u8>),
    Multipart(Form),
}

/// Method, extra headers and body for one call
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json<T: Serialize>(payload: &T) -> ApiResult<Self> {
        let bytes = serde_json::to_vec(payload)?;
        Ok(Self {
            method: Method::POST,
            headers: HeaderMap::new(),
            body: RequestBody::Json(bytes),
        })
    }

    pub fn post_multipart(form: Form) -> Self {
        Self {
            method: Method::POST,
            headers: HeaderMap::new(),
            body: RequestBody::Multipart(form),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// HTTP client bound to one base URL that speaks JSON back
#[derive(Clone)]
pub struct JsonClient {
    client: Client,
    base_url: String,
}

impl JsonClient {
    pub fn new(base_url: &str, user_agent: &str) -> ApiResult<Self> {
        let client = Self::build_client(user_agent)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send a request and parse the JSON response body.
    ///
    /// Failures are logged here and returned unchanged; nothing is retried.
    pub async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.execute(endpoint, options).await.inspect_err(|e| {
            error!("API request failed: {}", e);
        })
    }

    /// Build the outgoing request without sending it.
    ///
    /// JSON and empty bodies get a default `Content-Type: application/json`
    /// that caller headers may override. Multipart bodies get no default so
    /// the transport writes the boundary header itself; a caller
    /// `Content-Type` is dropped there.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Request> {
        let RequestOptions {
            method,
            headers,
            body,
        } = options;

        let url = self.url(endpoint);
        let builder = self.client.request(method, &url);

        let builder = match body {
            RequestBody::Empty => builder.headers(Self::merge_headers(headers)),
            RequestBody::Json(bytes) => builder.headers(Self::merge_headers(headers)).body(bytes),
            RequestBody::Multipart(form) => {
                let mut headers = headers;
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(form)
            }
        };

        Ok(builder.build()?)
    }

    fn build_client(user_agent: &str) -> ApiResult<Client> {
        Ok(Client::builder().user_agent(user_agent).build()?)
    }

    fn merge_headers(caller: HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.extend(caller);
        headers
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let request = self.build_request(endpoint, options)?;
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
