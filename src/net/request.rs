//! Request descriptor.
//!
//! A [`Request`] holds everything needed for one request/response cycle: the
//! target URL, the method, an optional body and a list of literal header
//! strings (`"Name: value"`). Header strings are kept as given and only
//! parsed when the request is performed, see [`Request::header_map`].
use crate::errors::FetchError;
use crate::net::FormBody;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    /// Headers only, the body is never transferred.
    Head,
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Head => reqwest::Method::HEAD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Form(FormBody),
    Json(serde_json::Value),
    Raw(Vec<u8>),
}

impl Body {
    /// Serialized bytes as they go on the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FetchError> {
        Ok(match self {
            Body::Form(form) => form.encode(),
            Body::Json(value) => serde_json::to_vec(value)?,
            Body::Raw(bytes) => bytes.clone(),
        })
    }

    fn implied_content_type(&self) -> Option<&'static str> {
        match self {
            Body::Form(_) => Some(FORM_CONTENT_TYPE),
            Body::Json(_) => Some(JSON_CONTENT_TYPE),
            Body::Raw(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    url: Url,
    method: Method,
    body: Option<Body>,
    headers: Vec<String>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            url: Url::parse(url)?,
            method,
            body: None,
            headers: Vec::new(),
        })
    }

    pub fn get(url: &str) -> Result<Self, FetchError> {
        Self::new(Method::Get, url)
    }

    pub fn post(url: &str) -> Result<Self, FetchError> {
        Self::new(Method::Post, url)
    }

    pub fn head(url: &str) -> Result<Self, FetchError> {
        Self::new(Method::Head, url)
    }

    /// Adds one literal header string, e.g. `"Accept: application/json"`.
    pub fn header<S: Into<String>>(mut self, line: S) -> Self {
        self.headers.push(line.into());
        self
    }

    pub fn headers<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn form(mut self, form: FormBody) -> Self {
        self.body = Some(Body::Form(form));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.body = Some(Body::Json(serde_json::to_value(value)?));
        Ok(self)
    }

    pub fn body<B: Into<Vec<u8>>>(mut self, bytes: B) -> Self {
        self.body = Some(Body::Raw(bytes.into()));
        self
    }

    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body_ref(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn header_lines(&self) -> &[String] {
        &self.headers
    }

    /// Parses the literal header strings into a [`HeaderMap`].
    ///
    /// Name and value are split on the first `:` and trimmed. Repeated names
    /// are appended. When the body implies a content type (form or JSON) and
    /// no `Content-Type` line was given, one is added.
    pub fn header_map(&self) -> Result<HeaderMap, FetchError> {
        let mut map = HeaderMap::with_capacity(self.headers.len() + 1);

        for line in &self.headers {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| FetchError::InvalidHeader(format!("missing ':' in {line:?}")))?;

            let name = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|e| FetchError::InvalidHeader(format!("{line:?}: {e}")))?;
            let value = HeaderValue::from_str(value.trim())
                .map_err(|e| FetchError::InvalidHeader(format!("{line:?}: {e}")))?;

            map.append(name, value);
        }

        if let Some(ct) = self.body.as_ref().and_then(Body::implied_content_type) {
            if !map.contains_key(CONTENT_TYPE) {
                map.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
            }
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{ACCEPT, USER_AGENT};

    #[test]
    fn rejects_unparsable_url() {
        assert!(matches!(Request::get("not a url"), Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn literal_headers_are_parsed_and_trimmed() {
        let req = Request::get("https://example.com/headers")
            .unwrap()
            .headers(["User-Agent: Rust-Reqwest", "Accept:application/json  "]);

        let map = req.header_map().unwrap();
        assert_eq!(map.get(USER_AGENT).unwrap(), "Rust-Reqwest");
        assert_eq!(map.get(ACCEPT).unwrap(), "application/json");
        assert!(map.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn header_without_separator_is_an_error() {
        let req = Request::get("https://example.com/").unwrap().header("Broken header");
        match req.header_map() {
            Err(FetchError::InvalidHeader(msg)) => assert!(msg.contains("Broken header")),
            other => panic!("expected InvalidHeader, got {:?}", other),
        }
    }

    #[test]
    fn value_may_contain_colons() {
        let req = Request::get("https://example.com/").unwrap().header("Referer: https://a.b/c");
        let map = req.header_map().unwrap();
        assert_eq!(map.get("referer").unwrap(), "https://a.b/c");
    }

    #[test]
    fn repeated_headers_are_appended() {
        let req = Request::get("https://example.com/")
            .unwrap()
            .header("X-Tag: one")
            .header("X-Tag: two");
        let map = req.header_map().unwrap();
        let all: Vec<_> = map.get_all("x-tag").iter().collect();
        assert_eq!(all, vec!["one", "two"]);
    }

    #[test]
    fn json_body_implies_content_type() {
        let req = Request::post("https://example.com/post")
            .unwrap()
            .json(&serde_json::json!({"field1": "value1"}))
            .unwrap();
        let map = req.header_map().unwrap();
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
        assert_eq!(req.body_ref().unwrap().to_bytes().unwrap(), br#"{"field1":"value1"}"#);
    }

    #[test]
    fn explicit_content_type_is_not_overridden() {
        let req = Request::post("https://example.com/post")
            .unwrap()
            .header("Content-Type: text/plain")
            .form(FormBody::new().field("a", "b"));
        let map = req.header_map().unwrap();
        assert_eq!(map.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[test]
    fn form_body_implies_urlencoded() {
        let req = Request::post("https://example.com/post")
            .unwrap()
            .form(FormBody::new().field("a", "b"));
        let map = req.header_map().unwrap();
        assert_eq!(map.get(CONTENT_TYPE).unwrap(), FORM_CONTENT_TYPE);
    }

    #[test]
    fn raw_body_has_no_implied_content_type() {
        let req = Request::post("https://example.com/post").unwrap().body("raw");
        assert!(req.header_map().unwrap().get(CONTENT_TYPE).is_none());
    }
}
