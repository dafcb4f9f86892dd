//! HTTP client wrapper for the ÖREBlex registry.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Proxy;

use crate::config::{AuthConfig, OereblexConfig, HTTP_TIMEOUT_SECS};
use crate::error::Result;

/// User agent string identifying this tool.
const USER_AGENT: &str = concat!("geolink2oereb/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// Applies the timeout, the user agent and the proxies configured for the
/// registry.
pub fn create_client(config: &OereblexConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT);

    if let Some(proxy) = &config.proxy {
        if let Some(url) = &proxy.http {
            builder = builder.proxy(Proxy::http(url)?);
        }
        if let Some(url) = &proxy.https {
            builder = builder.proxy(Proxy::https(url)?);
        }
    }

    Ok(builder.build()?)
}

/// Download content from a URL.
///
/// Failures are not retried: transport errors and non-success status codes
/// are returned to the caller as they are.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to download from
/// * `auth` - Optional basic authentication
///
/// # Returns
/// Raw bytes of the response body
pub fn download_bytes(client: &Client, url: &str, auth: Option<&AuthConfig>) -> Result<Vec<u8>> {
    tracing::debug!(url, "Requesting");

    let mut request = client.get(url);
    if let Some(auth) = auth {
        request = request.basic_auth(&auth.username, Some(&auth.password));
    }

    let response = request.send()?.error_for_status()?;
    let bytes = response.bytes()?;
    Ok(bytes.to_vec())
}

/// Convert downloaded bytes to a string, replacing invalid UTF-8.
pub fn bytes_to_string(bytes: &[u8], context: &str) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::warn!(context, "Response is not valid UTF-8, replaced invalid bytes");
            text
        }
    }
}
