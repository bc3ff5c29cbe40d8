pub mod config;
pub mod errors;
pub mod net;
pub mod recipes;
pub mod scrape;

pub use config::ClientConfig;
pub use errors::FetchError;
pub use net::{Client, FormBody, Request, Response, ResponseBuffer, Sink};
