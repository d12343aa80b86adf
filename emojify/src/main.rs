use anyhow::Context;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Starting emoji service...");
    emojify::run().await.context("emoji service stopped")
}
