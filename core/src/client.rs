//! Request dispatcher and response materializer.
//!
//! # Design
//! `RestClient` wraps one reusable async HTTP client and a private
//! current-thread runtime, so callers get a plain blocking `send`. A send is
//! split into three steps so each failure stage maps to its own `ClientError`
//! variant:
//!
//! 1. `build_request` turns an `HttpRequest` into a transport request
//!    (`InvalidRequest`).
//! 2. The transport executes it (`Timeout` / `Transport`).
//! 3. `materialize` buffers the body and flattens headers
//!    (`Timeout` / `BodyRead`).
//!
//! Steps 2 and 3 run under a single deadline: a response whose headers
//! arrive in time but whose body does not is still a `Timeout`.
//!
//! Nothing is retried. Every failure is logged and returned.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request, Response, Url};
use tokio::runtime::{Builder, Runtime};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};

/// Synchronous client that sends one `HttpRequest` per call.
///
/// Safe to reuse across sequential sends; it keeps no per-request state.
/// `send` blocks the calling thread and must not be called from inside an
/// async runtime.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    runtime: Arc<Runtime>,
    config: ClientConfig,
}

impl RestClient {
    /// Create a client with the default 15 second timeout.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let runtime = Builder::new_current_thread().enable_all().build().map_err(|e| {
            let message = describe(&e);
            tracing::error!(error = %message, "failed to start client runtime");
            ClientError::ClientInit(message)
        })?;

        let client = {
            let _guard = runtime.enter();
            Client::builder().timeout(config.timeout).build().map_err(|e| {
                let message = describe(&e);
                tracing::error!(error = %message, "failed to create HTTP client");
                ClientError::ClientInit(message)
            })?
        };

        Ok(Self {
            client,
            runtime: Arc::new(runtime),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the transport request without sending it.
    ///
    /// An empty method means `GET`. User headers replace any default header
    /// of the same name, and the body is attached for every method.
    pub fn build_request(&self, req: &HttpRequest) -> Result<Request, ClientError> {
        let method = parse_method(&req.method)?;
        let url = Url::parse(&req.url)
            .map_err(|e| invalid_request(format!("invalid URL {:?}: {e}", req.url)))?;
        let headers = header_map(&req.headers)?;

        self.client
            .request(method, url)
            .headers(headers)
            .body(req.body.clone())
            .build()
            .map_err(|e| invalid_request(describe(&e)))
    }

    /// Send `req` and wait for the complete response, body included.
    pub fn send(&self, req: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let request = self.build_request(req)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let timeout = self.config.timeout;
        self.runtime.block_on(async {
            match tokio::time::timeout(timeout, self.dispatch(request)).await {
                Ok(result) => result,
                Err(_) => {
                    let message = format!("no complete response within {timeout:?}");
                    tracing::error!(error = %message, "request timed out");
                    Err(ClientError::Timeout(message))
                }
            }
        })
    }

    async fn dispatch(&self, request: Request) -> Result<HttpResponse, ClientError> {
        let response = self.client.execute(request).await.map_err(|e| {
            let message = describe(&e);
            tracing::error!(error = %message, "failed to send request");
            if e.is_timeout() {
                ClientError::Timeout(message)
            } else {
                ClientError::Transport(message)
            }
        })?;

        materialize(response).await
    }
}

/// Read the whole body into memory and copy status and headers.
///
/// The body is decoded as UTF-8; invalid sequences are replaced rather than
/// rejected.
pub async fn materialize(response: Response) -> Result<HttpResponse, ClientError> {
    let status_code = response.status().as_u16();
    let headers = flatten_headers(response.headers());

    let bytes = response.bytes().await.map_err(|e| {
        let message = describe(&e);
        tracing::error!(error = %message, "failed to read response body");
        if e.is_timeout() {
            ClientError::Timeout(message)
        } else {
            ClientError::BodyRead(message)
        }
    })?;
    tracing::debug!(status_code, body_len = bytes.len(), "received response");

    Ok(HttpResponse {
        status_code,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Collapse a multi-valued header map, keeping the first value of each name.
/// Names come back in canonical form (`Set-Cookie`, `Content-Type`).
pub fn flatten_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .keys()
        .filter_map(|name| {
            let value = headers.get(name)?;
            Some((
                canonical_header_name(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            ))
        })
        .collect()
}

/// Uppercase the first letter and every letter after a `-`; lowercase the rest.
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

fn parse_method(method: &str) -> Result<Method, ClientError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|e| invalid_request(format!("invalid method {method:?}: {e}")))
}

fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| invalid_request(format!("invalid header name {name:?}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| invalid_request(format!("invalid value for header {name:?}: {e}")))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

fn invalid_request(message: String) -> ClientError {
    tracing::error!(error = %message, "failed to create request");
    ClientError::InvalidRequest(message)
}

/// Render an error with its source chain, e.g. `error sending request: connection refused`.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
