use holonet::server::{self, config::Config, error::Error, model::app::AppState, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let router = server::router::routes().with_state(AppState { db });

    startup::serve(&config, router).await
}
