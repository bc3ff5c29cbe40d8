//! POST form fields containing non-ASCII text.
//!
//! The form body is encoded as UTF-8 bytes before it is handed to the client,
//! so `ü` travels as `0xC3 0xBC`.
use http_recipes::recipes::{self, DEFAULT_POST_URL};
use http_recipes::{Client, ClientConfig, FormBody};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let form = FormBody::new()
        .field("field1", "value1")
        .field("field2", "valüe2");

    let client = Client::new(ClientConfig::default())?;
    let body = recipes::post_form(&client, DEFAULT_POST_URL, form).await?;

    println!("{body}");
    Ok(())
}
