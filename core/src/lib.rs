//! Core of a small manual REST client.
//!
//! # Overview
//! A front-end collects method, URL, headers (as JSON text), and body, then
//! asks the core to send one request and waits for the full response.
//!
//! # Design
//! - `RestClient` is blocking: one call, one request, bounded by a fixed
//!   whole-request timeout (15s by default).
//! - `Form` and `submit` hold the front-end contract so any UI only has to
//!   move text in and out.
//! - Failures are returned as `ClientError` and logged with `tracing`;
//!   nothing is retried.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod headers;
pub mod http;

pub use client::RestClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use form::{render, submit, Form};
pub use headers::parse_headers;
pub use http::{HttpRequest, HttpResponse};
