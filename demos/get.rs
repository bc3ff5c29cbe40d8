//! GET a page and print its body as UTF-8 text.
use http_recipes::recipes::{self, DEFAULT_GET_URL};
use http_recipes::{Client, ClientConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = Client::new(ClientConfig::default())?;
    let body = recipes::get(&client, DEFAULT_GET_URL).await?;

    println!("{body}");
    Ok(())
}
