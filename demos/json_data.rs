//! POST a JSON document with `Content-Type: application/json`.
use http_recipes::recipes::{self, DEFAULT_POST_URL};
use http_recipes::{Client, ClientConfig};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data = json!({"field1": "value1", "field2": "value2"});

    let client = Client::new(ClientConfig::default())?;
    let body = recipes::post_json(&client, DEFAULT_POST_URL, &data).await?;

    println!("{body}");
    Ok(())
}
