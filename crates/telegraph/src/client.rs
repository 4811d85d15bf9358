// ABOUTME: The Telegraph Client: prepares requests, posts them over HTTP and decodes JSON envelopes.
// ABOUTME: Endpoint methods live in account.rs and page.rs; this file holds the shared plumbing.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::options::{ClientBuilder, Options};
use crate::request::{Request, RequestOption};
use crate::types::ApiResponse;

/// Client for the Telegraph API.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .unwrap_or_else(|e| {
                    warn!(error = %e, "failed to build HTTP client, using defaults");
                    reqwest::Client::new()
                })
        });

        Self { opts, http_client }
    }

    /// Create a client with default options and the given access token.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        Self::builder().access_token(access_token).build()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn access_token(&self) -> &str {
        &self.opts.access_token
    }

    /// Replace the access token, e.g. after `revoke_access_token`.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.opts.access_token = token.into();
    }

    /// Apply request options and attach the access token to secured requests.
    pub(crate) fn prepare(&self, mut req: Request, opts: &[RequestOption]) -> Result<Request> {
        for opt in opts {
            opt(&mut req);
        }

        if req.secured {
            if self.opts.access_token.is_empty() {
                return Err(Error::EmptyAccessToken);
            }
            req.set_form_param("access_token", &self.opts.access_token);
        }

        Ok(req)
    }

    /// Start a POST to `url` carrying the configured and per-request headers.
    pub(crate) fn post(&self, url: &str, req: &Request) -> reqwest::RequestBuilder {
        let mut builder = self.http_client.post(url);
        for (key, value) in &self.opts.headers {
            builder = builder.header(key, value);
        }
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Send a form-encoded request to an API method and decode its result.
    pub(crate) async fn call_api<T: DeserializeOwned>(
        &self,
        req: Request,
        opts: &[RequestOption],
    ) -> Result<T> {
        let req = self.prepare(req, opts)?;
        let url = format!("{}{}", self.opts.api_url, req.endpoint);

        debug!(
            endpoint = %req.endpoint,
            params = ?req.form.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "calling Telegraph API"
        );

        let mut builder = self.post(&url, &req);
        if !req.form.is_empty() {
            builder = builder.form(&req.form);
        }

        let body = self.send(builder).await?;
        decode_envelope(&body)
    }

    /// Send a prepared request and read the whole body.
    pub(crate) async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Bytes> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        trace!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&body),
            "Telegraph API response"
        );
        Ok(body)
    }
}

/// Decode the `{ok, error, result}` envelope.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let response: ApiResponse<T> = serde_json::from_slice(body)?;
    if !response.ok {
        return Err(Error::api(response.error.unwrap_or_default()));
    }
    response
        .result
        .ok_or_else(|| Error::api("response has no result"))
}
