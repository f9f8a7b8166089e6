use movie_db_rust::config::AppConfig;
use movie_db_rust::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Movie Database Server");

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}, movies_file={}",
        config.server_address(),
        config.movies_file()
    );

    run_server(&config).await
}
