//! POST form fields and print the echoed response.
use http_recipes::recipes::{self, DEFAULT_POST_URL};
use http_recipes::{Client, ClientConfig, FormBody};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let form = FormBody::new()
        .field("field1", "value1")
        .field("field2", "value2");

    let client = Client::new(ClientConfig::default())?;
    let body = recipes::post_form(&client, DEFAULT_POST_URL, form).await?;

    println!("{body}");
    Ok(())
}
