//! Send literal header strings and print what the server saw.
use http_recipes::recipes::{self, DEFAULT_HEADERS_URL};
use http_recipes::{Client, ClientConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let headers = ["User-Agent: Rust-Reqwest", "Accept: application/json"];

    let client = Client::new(ClientConfig::default())?;
    let body = recipes::get_with_headers(&client, DEFAULT_HEADERS_URL, headers).await?;

    println!("{body}");
    Ok(())
}
