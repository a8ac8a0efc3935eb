//! The four text fields a front-end collects, and the text it shows back.

use crate::client::RestClient;
use crate::error::ClientError;
use crate::headers::parse_headers;
use crate::http::{HttpRequest, HttpResponse};

/// Raw field contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub method: String,
    pub url: String,
    pub headers: String,
    pub body: String,
}

impl Form {
    /// Parse the header field and assemble a request. Method and URL are
    /// passed through untouched.
    pub fn to_request(&self) -> Result<HttpRequest, ClientError> {
        Ok(HttpRequest {
            method: self.method.clone(),
            url: self.url.clone(),
            headers: parse_headers(&self.headers)?,
            body: self.body.clone(),
        })
    }

    /// Parse the form and send it. Header errors return before any I/O.
    pub fn send(&self, client: &RestClient) -> Result<HttpResponse, ClientError> {
        let req = self.to_request()?;
        client.send(&req)
    }
}

/// Send the form and return the text for the response area.
///
/// A header parse failure stops before anything is sent.
pub fn submit(client: &RestClient, form: &Form) -> String {
    render(&form.send(client))
}

pub fn render(result: &Result<HttpResponse, ClientError>) -> String {
    match result {
        Ok(response) => format!("Status: {}\n\n{}", response.status_code, response.body),
        Err(err) => format!("Error: {err}"),
    }
}
