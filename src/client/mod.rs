//! API Client
//!
//! One entry point for every REST call. Requests go out as JSON; failed calls
//! always come back as an `ApiError`, never as data.

mod reqwest_transport;

use async_trait::async_trait;
use futures::future::{AbortRegistration, Abortable};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ClientConfig;
use crate::error::{ApiError, Error, FieldDetail, HTTP_ERROR};
use crate::messages::Messages;

pub use reqwest_transport::ReqwestTransport;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";
const REQUEST_ID_HEADER: &str = "X-Request-ID";

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved request handed to a `Transport`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// Raw response as received from a `Transport`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.header(CONTENT_TYPE)
            .map(|value| value.to_ascii_lowercase().contains(JSON_MIME))
            .unwrap_or(false)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// No response was received. The cause is only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Sends one HTTP request. Futures are `?Send`: the browser event loop is single-threaded.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// ========================
// Call Options
// ========================

/// Per-call options; `CallOptions::default()` is a plain GET
#[derive(Debug, Default)]
pub struct CallOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Aborting the paired `AbortHandle` fails the call as a network error
    pub signal: Option<AbortRegistration>,
}

impl CallOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn signal(mut self, registration: AbortRegistration) -> Self {
        self.signal = Some(registration);
        self
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base_url: Option<String>,
    api_prefix: String,
    messages: Messages,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            base_url: config
                .base_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            api_prefix: config.api_prefix.trim_end_matches('/').to_string(),
            messages: config.messages(),
        }
    }

    pub fn messages(&self) -> Messages {
        self.messages
    }

    /// Path of a resource under the versioned API, e.g. `/v1/todo/`
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}{}", self.api_prefix, resource)
    }

    /// Absolute URLs pass through; anything else is joined onto `base_url`.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        match &self.base_url {
            Some(base) if path.starts_with('/') => format!("{}{}", base, path),
            Some(base) => format!("{}/{}", base, path),
            None => path.to_string(),
        }
    }

    /// Performs one API call and returns the parsed JSON body.
    ///
    /// Transport failures and cancellation become `ApiError::network`;
    /// non-2xx responses become an `ApiError` built from the server's `error`
    /// object or from the status-keyed fallback table.
    pub async fn call(&self, path: &str, options: CallOptions) -> Result<Value, ApiError> {
        let CallOptions {
            method,
            headers: extra_headers,
            body,
            signal,
        } = options;

        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
        for (name, value) in extra_headers {
            match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(&name)) {
                Some(existing) => existing.1 = value,
                None => headers.push((name, value)),
            }
        }

        let request = HttpRequest {
            method,
            url: self.resolve(path),
            headers,
            body: body.map(|value| value.to_string()),
        };
        debug!("{} {}", request.method, request.url);

        let pending = self.transport.send(request);
        let outcome = match signal {
            Some(registration) => Abortable::new(pending, registration)
                .await
                .unwrap_or_else(|_| Err(TransportError("aborted".to_string()))),
            None => pending.await,
        };

        let response = outcome.map_err(|err| {
            warn!("{} {} failed: {}", method, path, err);
            ApiError::network(self.messages.network_error())
        })?;

        decode_response(&response, &self.messages)
    }

    /// `call` followed by a typed decode of the body.
    pub async fn call_as<R: DeserializeOwned>(&self, path: &str, options: CallOptions) -> crate::Result<R> {
        let value = self.call(path, options).await?;
        serde_json::from_value(value)
            .map_err(|err| Error::Unexpected(format!("unexpected response from {}: {}", path, err)))
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Maps a raw response to data or to an `ApiError`.
pub fn decode_response(response: &HttpResponse, messages: &Messages) -> Result<Value, ApiError> {
    let data = if response.is_json() {
        serde_json::from_slice(&response.body).unwrap_or_else(|_| empty_object())
    } else {
        empty_object()
    };

    if response.is_success() {
        return Ok(data);
    }

    let error = data.get("error").filter(|value| value.is_object());
    let code = non_empty_str(error.and_then(|e| e.get("code"))).unwrap_or(HTTP_ERROR);
    let message = non_empty_str(error.and_then(|e| e.get("message")))
        .unwrap_or_else(|| messages.for_status(response.status));
    let details: Vec<FieldDetail> = error
        .and_then(|e| e.get("details"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| FieldDetail::deserialize(entry).ok())
                .collect()
        })
        .unwrap_or_default();
    let request_id = non_empty_str(data.get("requestId"))
        .or_else(|| response.header(REQUEST_ID_HEADER).filter(|s| !s.is_empty()))
        .map(str::to_string);

    let err = ApiError::http(response.status, code, message, details, request_id);
    warn!("request failed with {} {}: {}", err.status, err.code, err.message);
    Err(err)
}
