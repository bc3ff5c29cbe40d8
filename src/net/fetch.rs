use crate::config::{self, ClientConfig};
use crate::errors::FetchError;
use crate::net::response::{header_lines, status_line};
use crate::net::{Method, Request, Response, ResponseBuffer, Sink};
use log::{debug, warn};
use reqwest::redirect::Policy;

/// Client handle. Each [`perform`](Client::perform) call is one complete
/// request/response cycle.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        config::validate(&config)?;

        let redirects = if config.follow_redirects {
            Policy::limited(config.max_redirects)
        } else {
            Policy::none()
        };

        let mut builder = reqwest::Client::builder()
            .redirect(redirects)
            .cookie_store(config.cookies)
            .gzip(config.decompress)
            .brotli(config.decompress)
            .deflate(config.decompress);

        if let Some(ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }

        Ok(Self { inner: builder.build()? })
    }

    /// Performs `request` and routes its output into `sink`.
    ///
    /// Non-2xx statuses are returned like any other response. The body is
    /// streamed chunk by chunk into the response buffer unless the method is
    /// `HEAD` or the sink only wants headers.
    pub async fn perform(
        &self,
        request: Request,
        mut sink: Sink<'_>,
    ) -> Result<Response, FetchError> {
        let headers = request.header_map()?;
        let mut builder = self
            .inner
            .request(request.method().into(), request.url().clone())
            .headers(headers);

        if let Some(body) = request.body_ref() {
            builder = builder.body(body.to_bytes()?);
        }

        debug!("{:?} {}", request.method(), request.url());
        let mut res = builder.send().await?;

        // Fetch results
        let final_url = res.url().clone();
        let status = res.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
        let version = res.version();
        let headers = res.headers().clone();

        if !status.is_success() {
            warn!("{} answered {} {}", final_url, status.as_u16(), status_text);
        }

        if let Some(cb) = sink.header_callback() {
            cb(status_line(version, status.as_u16(), &status_text).as_bytes());
            for line in header_lines(&headers) {
                cb(line.as_bytes());
            }
            cb(&b""[..]);
        }

        let mut body = ResponseBuffer::new();
        if sink.wants_body() && request.method() != Method::Head {
            let mut chunks = 0usize;
            while let Some(chunk) = res.chunk().await? {
                body.append(&chunk);
                chunks += 1;
            }
            debug!("received {} bytes in {} chunk(s) from {}", body.len(), chunks, final_url);
        }

        Ok(Response {
            url: final_url,
            status: status.as_u16(),
            status_text,
            version,
            headers,
            body,
        })
    }
}
