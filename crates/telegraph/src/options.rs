// ABOUTME: Configuration options for the Telegraph client and the ClientBuilder that assembles them.
// ABOUTME: Holds the access token, endpoint URLs, user agent, timeout and extra headers.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;

/// Base URL of the JSON API; method names are appended to it.
pub const DEFAULT_API_URL: &str = "https://api.telegra.ph/";

/// Media upload endpoint.
pub const DEFAULT_UPLOAD_URL: &str = "https://telegra.ph/upload";

/// Configuration options for the Telegraph client.
#[derive(Debug, Clone)]
pub struct Options {
    pub access_token: String,
    pub api_url: String,
    pub upload_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            user_agent: concat!("telegraph-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the access token sent with secured methods.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.opts.access_token = token.into();
        self
    }

    /// Set the API base URL. A trailing slash is added when missing.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.opts.api_url = url;
        self
    }

    /// Set the upload endpoint URL.
    pub fn upload_url(mut self, url: impl Into<String>) -> Self {
        self.opts.upload_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
