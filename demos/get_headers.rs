//! Print every response header line through a callback, without fetching
//! the body.
use http_recipes::recipes::{self, DEFAULT_HEADERS_URL};
use http_recipes::{Client, ClientConfig};

fn process_header(line: &str) {
    println!("{line}");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = Client::new(ClientConfig::default())?;
    recipes::dump_headers(&client, DEFAULT_HEADERS_URL, process_header).await?;

    Ok(())
}
