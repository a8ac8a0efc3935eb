use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use gostman_core::{render, Form, RestClient};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: gostman <METHOD> <URL> [HEADERS_JSON] [BODY | -]";

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(form) = form_from_args(&args, std::io::stdin().lock())? else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let client = RestClient::new()?;
    let result = form.send(&client);
    println!("{}", render(&result));

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Map positional arguments onto form fields. A body of `-` is read from `input`.
fn form_from_args(args: &[String], mut input: impl Read) -> anyhow::Result<Option<Form>> {
    let (method, url, headers, body) = match args {
        [method, url] => (method, url, None, None),
        [method, url, headers] => (method, url, Some(headers), None),
        [method, url, headers, body] => (method, url, Some(headers), Some(body)),
        _ => return Ok(None),
    };

    let body = match body.map(String::as_str) {
        Some("-") => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("failed to read body from stdin")?;
            buf
        }
        Some(text) => text.to_string(),
        None => String::new(),
    };

    Ok(Some(Form {
        method: method.clone(),
        url: url.clone(),
        headers: headers.cloned().unwrap_or_default(),
        body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn method_and_url_only() {
        let form = form_from_args(&args(&["GET", "http://localhost:3000"]), std::io::empty()).unwrap().unwrap();
        assert_eq!(form.method, "GET");
        assert_eq!(form.url, "http://localhost:3000");
        assert!(form.headers.is_empty());
        assert!(form.body.is_empty());
    }

    #[test]
    fn all_fields() {
        let form = form_from_args(&args(&["POST", "http://localhost:3000/echo", r#"{"X-Test":"1"}"#, "hello"]), std::io::empty())
            .unwrap()
            .unwrap();
        assert_eq!(form.headers, r#"{"X-Test":"1"}"#);
        assert_eq!(form.body, "hello");
    }

    #[test]
    fn dash_body_is_read_from_input() {
        let form = form_from_args(&args(&["PUT", "http://localhost:3000/echo", "", "-"]), &b"payload\n"[..])
            .unwrap()
            .unwrap();
        assert_eq!(form.method, "PUT");
        assert!(form.headers.is_empty());
        assert_eq!(form.body, "payload\n");
    }

    #[test]
    fn literal_body_ignores_input() {
        let form = form_from_args(&args(&["POST", "http://localhost:3000/echo", "{}", "inline"]), &b"unused"[..])
            .unwrap()
            .unwrap();
        assert_eq!(form.body, "inline");
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        assert!(form_from_args(&args(&["GET"]), std::io::empty()).unwrap().is_none());
        assert!(form_from_args(&args(&["a", "b", "c", "d", "e"]), std::io::empty()).unwrap().is_none());
    }
}
