use anyhow::Context as _;
use server::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::new().context("Failed to load settings")?;
    server::init_tracing(&settings.log.level);

    server::launch(settings).await
}
