//! Request and response records exchanged with the front-end.
//!
//! # Design
//! Both types are plain owned data. A `HttpRequest` is assembled from form
//! fields for a single send and a `HttpResponse` is materialized from the
//! transport response; neither is mutated after construction.
//!
//! Headers are single-valued maps. On the response side only the first value
//! of a repeated header survives (see `client::flatten_headers`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A request as entered by the user. Method and URL are not validated here;
/// `RestClient::build_request` rejects values the transport cannot use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

/// A fully buffered response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}
