//! Where a request's output goes: the body buffer, a per-line header
//! callback, or both.

/// Invoked once per received header line, without the trailing CRLF.
///
/// The first call carries the status line (`HTTP/1.1 200 OK`), then one call
/// per `Name: value` header, then a final call with an empty line marking the
/// end of the header block. Headers are grouped by name in first-seen order,
/// see [`Response::header_lines`](crate::net::Response::header_lines).
pub type HeaderCallback<'a> = Box<dyn FnMut(&[u8]) + Send + 'a>;

pub enum Sink<'a> {
    /// Append the body to the response buffer.
    Buffer,
    /// Report header lines only; the body is not read.
    Headers(HeaderCallback<'a>),
    /// Report header lines and buffer the body.
    Both(HeaderCallback<'a>),
}

impl<'a> Sink<'a> {
    pub fn headers<F: FnMut(&[u8]) + Send + 'a>(f: F) -> Self {
        Sink::Headers(Box::new(f))
    }

    pub fn both<F: FnMut(&[u8]) + Send + 'a>(f: F) -> Self {
        Sink::Both(Box::new(f))
    }

    pub(crate) fn wants_body(&self) -> bool {
        !matches!(self, Sink::Headers(_))
    }

    pub(crate) fn header_callback(&mut self) -> Option<&mut HeaderCallback<'a>> {
        match self {
            Sink::Buffer => None,
            Sink::Headers(cb) | Sink::Both(cb) => Some(cb),
        }
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Buffer => write!(f, "Sink::Buffer"),
            Sink::Headers(_) => write!(f, "Sink::Headers(..)"),
            Sink::Both(_) => write!(f, "Sink::Both(..)"),
        }
    }
}
