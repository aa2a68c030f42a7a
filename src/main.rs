//! Serves the hello world API.

use hello_world_tdd::{
    app,
    infra::{config, logging},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let _guard = logging::init_logging();
    let config = config::load_config()?;

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    app::run_app(listener, config).await?;

    Ok(())
}
