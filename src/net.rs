//! Network layer: request descriptors, the response buffer and the client
//! handle that performs one request at a time.

mod buffer;
mod fetch;
mod form;
mod request;
mod response;
mod sink;

pub use buffer::ResponseBuffer;
pub use fetch::Client;
pub use form::FormBody;
pub use request::{Body, Method, Request};
pub use response::Response;
pub use sink::{HeaderCallback, Sink};
