//! Fetch a page, parse it as HTML and print its `<title>`.
use http_recipes::recipes::{self, DEFAULT_SCRAPE_URL};
use http_recipes::{Client, ClientConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let client = Client::new(ClientConfig::default())?;
    let title = recipes::scrape_title(&client, DEFAULT_SCRAPE_URL).await?;

    println!("{title}");
    Ok(())
}
