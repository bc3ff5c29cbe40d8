//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by
//! [`Client::perform`](crate::net::Client::perform). It contains the final URL
//! (after redirects, if the client follows them), status code + reason,
//! response headers, and the body as accumulated in a [`ResponseBuffer`].
//!
//! ## Notes
//! - For text responses use [`Response::text`] (strict UTF-8, like the
//!   scripts this crate demonstrates) or [`Response::decoded_text`] which
//!   looks at the `Content-Type` charset and never fails.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - For `HEAD` requests or header-only sinks, `body` stays empty.
//!
use crate::net::ResponseBuffer;
use encoding_rs::Encoding;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Version};
use log::debug;

/// Simple structure for HTTP responses.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    pub version: Version,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes, in arrival order.
    pub body: ResponseBuffer,
}

impl Response {
    /// Body decoded as strict UTF-8.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        self.body.to_utf8()
    }

    pub fn text_lossy(&self) -> String {
        self.body.to_utf8_lossy()
    }

    /// Body decoded using the `Content-Type` charset when available.
    pub fn decoded_text(&self) -> String {
        decode_response_body(&self.headers, self.body.as_bytes())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status line, e.g. `HTTP/1.1 200 OK`.
    pub fn status_line(&self) -> String {
        status_line(self.version, self.status, &self.status_text)
    }

    /// The status line followed by one `Name: value` line per header.
    ///
    /// Lines are grouped by header name, names in first-seen order and each
    /// name's values in received order. Interleaved repeats (`a, b, a`) come
    /// out as `a, a, b`; the parsed `HeaderMap` does not keep raw order.
    pub fn header_lines(&self) -> Vec<String> {
        std::iter::once(self.status_line())
            .chain(header_lines(&self.headers))
            .collect()
    }
}

pub(crate) fn status_line(version: Version, status: u16, reason: &str) -> String {
    format!("{version:?} {status} {reason}")
}

// Grouped by name: HeaderMap iterates every value of one name before the next.
pub(crate) fn header_lines(headers: &HeaderMap) -> impl Iterator<Item = String> + '_ {
    headers
        .iter()
        .map(|(k, v)| format!("{}: {}", k, String::from_utf8_lossy(v.as_bytes())))
}

/// Best-effort response body decoder:
/// - decodes with the `Content-Type: ...; charset=...` encoding when the label is known
/// - falls back to lossy UTF-8 without a charset or with an unknown label
pub(crate) fn decode_response_body(headers: &HeaderMap, body: &[u8]) -> String {
    let encoding = headers
        .get(CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .and_then(charset_of)
        .and_then(|cs| Encoding::for_label(cs.as_bytes()));

    match encoding {
        Some(enc) => {
            let (text, _, had_errors) = enc.decode(body);
            if had_errors {
                debug!("body is not valid {}, replacement characters inserted", enc.name());
            }
            text.into_owned()
        }
        None => String::from_utf8_lossy(body).into_owned(),
    }
}

fn charset_of(content_type: &str) -> Option<String> {
    let idx = content_type.to_ascii_lowercase().find("charset=")?;
    let after = &content_type[idx + "charset=".len()..];
    // value may be quoted or end at ; or end of string
    let end = after.find([';', ' ', '\t']).unwrap_or(after.len());
    Some(after[..end].trim_matches('"').to_string())
}
