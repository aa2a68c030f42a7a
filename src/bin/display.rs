//! Fetches the greeting from a running service and prints it.

use hello_world_tdd::{
    display::{greeting_client::GreetingClient, greeting_display::GreetingDisplay},
    infra::{config, logging},
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let _guard = logging::init_logging();
    let config = config::load_config()?;

    let mut display = GreetingDisplay::new(GreetingClient::new(config.display.base_url));
    println!("{}", display.render());
    display.mount().await?;
    println!("{}", display.render());

    Ok(())
}
