//! Freelancer API client.
//!
//! Low-level HTTP session that holds the OAuth token and base URL and
//! issues raw requests. Resource operations are implemented via traits and
//! free functions on the model types.

use std::env;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::envelope::Envelope;
use crate::error::{ApiFailure, FreelancerError, Result};

const DEFAULT_API_URL: &str = "https://www.freelancer.com";
const AUTH_HEADER: &str = "freelancer-oauth-v1";
const USER_AGENT: &str = concat!("freelancerapi/", env!("CARGO_PKG_VERSION"));

/// Authenticated session for the Freelancer API.
///
/// Holds the OAuth token, base URL, and a pre-configured HTTP client. This
/// struct is cheaply cloneable; clones reference the same underlying
/// connection pool. No retry, timeout, or rate-limit policy is applied
/// beyond what the HTTP client does by default.
///
/// # Example
///
/// ```no_run
/// use freelancerapi::FreelancerClient;
///
/// # fn example() -> freelancerapi::Result<()> {
/// // Create from environment variables
/// let client = FreelancerClient::from_env()?;
///
/// // Or configure manually
/// let client = FreelancerClient::new("your-oauth-token", "https://www.freelancer.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FreelancerClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for FreelancerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FreelancerClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl FreelancerClient {
    /// Create a client from environment variables.
    ///
    /// Uses `FREELANCER_OAUTH_TOKEN` for authentication and optionally
    /// `FREELANCER_API_URL` for the base URL (defaults to
    /// `https://www.freelancer.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if `FREELANCER_OAUTH_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("FREELANCER_OAUTH_TOKEN").map_err(|_| {
            FreelancerError::ConfigMissing(
                "FREELANCER_OAUTH_TOKEN environment variable not set".to_string(),
            )
        })?;

        let base_url =
            env::var("FREELANCER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided OAuth token and base URL.
    ///
    /// The token is sent on every request as the `freelancer-oauth-v1`
    /// header. All validation beyond the token being non-empty is deferred
    /// to the remote API.
    ///
    /// # Errors
    ///
    /// Returns [`FreelancerError::ConfigMissing`] if the token is empty or
    /// the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(FreelancerError::ConfigMissing(
                "OAuth token must not be empty".to_string(),
            ));
        }

        // Ensure base URL ends with / so relative paths join below it
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str).map_err(|e| {
            FreelancerError::ConfigMissing(format!("invalid base URL '{base_url}': {e}"))
        })?;

        let mut auth_value = HeaderValue::from_str(token).map_err(|_| {
            FreelancerError::ConfigMissing("OAuth token contains invalid characters".to_string())
        })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| {
                FreelancerError::ConfigMissing(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the OAuth token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.get(url)).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.get(url).query(query)).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.post(url).json(body)).await
    }

    /// Make a POST request with a form-encoded body.
    ///
    /// Array-valued fields are passed as repeated `name[]` pairs, so the
    /// body is given as key/value pairs rather than a struct.
    #[tracing::instrument(skip(self, form))]
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.post(url).form(form)).await
    }

    /// Make a POST request with a multipart body.
    #[tracing::instrument(skip(self, form))]
    pub async fn post_multipart(
        &self,
        path: &str,
        form: Form,
    ) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.post(url).multipart(form)).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.put(url).json(body)).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> core::result::Result<Envelope, ApiFailure> {
        let url = self.join(path)?;
        self.execute(self.http.delete(url)).await
    }

    fn join(&self, path: &str) -> core::result::Result<Url, ApiFailure> {
        self.base_url.join(path).map_err(ApiFailure::bad_url)
    }

    /// Send the request and parse the response envelope.
    ///
    /// The envelope is parsed regardless of HTTP status; the success
    /// contract is applied later by [`Envelope::into_result`]. Transport
    /// and decode failures become [`ApiFailure`] with the cause preserved.
    async fn execute(
        &self,
        request: RequestBuilder,
    ) -> core::result::Result<Envelope, ApiFailure> {
        let response = request.send().await.map_err(ApiFailure::transport)?;
        let http_status = response.status().as_u16();
        let body = response.text().await.map_err(ApiFailure::transport)?;

        let mut envelope: Envelope =
            serde_json::from_str(&body).map_err(ApiFailure::decode)?;
        envelope.http_status = http_status;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug_redacts_token() {
        let client = FreelancerClient::new("secret-token", "https://www.freelancer.com").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("FreelancerClient"));
        assert!(debug.contains("base_url"));
        // Token should not be in debug output
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = FreelancerClient::new("token", "https://www.freelancer.com").unwrap();
        let client2 = FreelancerClient::new("token", "https://www.freelancer.com/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let err = FreelancerClient::new("", "https://www.freelancer.com").unwrap_err();
        assert!(matches!(err, FreelancerError::ConfigMissing(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = FreelancerClient::new("token", "not a url").unwrap_err();
        assert!(matches!(err, FreelancerError::ConfigMissing(_)));
    }

    #[test]
    fn test_token_accessor() {
        let client = FreelancerClient::new("token", "https://www.freelancer.com").unwrap();
        assert_eq!(client.token(), "token");
    }
}
