//! One function per demo program.
//!
//! Each takes the target URL so the same sequence can be pointed at a test
//! server; the `DEFAULT_*` constants are the addresses the demos use.
use crate::errors::FetchError;
use crate::net::{Client, FormBody, Request, Sink};
use crate::scrape;
use serde::Serialize;

pub const DEFAULT_GET_URL: &str = "https://httpbin.org/get";
pub const DEFAULT_POST_URL: &str = "https://httpbin.org/post";
pub const DEFAULT_HEADERS_URL: &str = "https://httpbin.org/headers";
pub const DEFAULT_SCRAPE_URL: &str = "https://books.toscrape.com";

/// GET `url`, return the body as UTF-8 text.
pub async fn get(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.perform(Request::get(url)?, Sink::Buffer).await?;
    Ok(resp.text()?)
}

/// POST `form` as `k=v&k=v`, return the body as UTF-8 text.
pub async fn post_form(client: &Client, url: &str, form: FormBody) -> Result<String, FetchError> {
    let resp = client.perform(Request::post(url)?.form(form), Sink::Buffer).await?;
    Ok(resp.text()?)
}

/// POST `value` serialized as JSON, return the body as UTF-8 text.
pub async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    value: &T,
) -> Result<String, FetchError> {
    let req = Request::post(url)?
        .header("Content-Type: application/json")
        .json(value)?;
    let resp = client.perform(req, Sink::Buffer).await?;
    Ok(resp.text()?)
}

/// GET `url` with literal `"Name: value"` header strings attached.
pub async fn get_with_headers<I, S>(
    client: &Client,
    url: &str,
    headers: I,
) -> Result<String, FetchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let resp = client.perform(Request::get(url)?.headers(headers), Sink::Buffer).await?;
    Ok(resp.text()?)
}

/// Requests only the headers of `url` and hands every header line, trimmed,
/// to `on_line`. Lines are decoded lossily: a header value with invalid
/// UTF-8 shows replacement characters instead of failing the request.
pub async fn dump_headers<F>(client: &Client, url: &str, mut on_line: F) -> Result<(), FetchError>
where
    F: FnMut(&str) + Send,
{
    let sink = Sink::headers(|raw: &[u8]| on_line(String::from_utf8_lossy(raw).trim()));
    client.perform(Request::head(url)?, sink).await?;
    Ok(())
}

/// GET `url`, parse it as HTML and return the text of its first `<title>`.
pub async fn scrape_title(client: &Client, url: &str) -> Result<String, FetchError> {
    let resp = client.perform(Request::get(url)?, Sink::Buffer).await?;
    let html = resp.text()?;
    scrape::require_title(&html)
}
