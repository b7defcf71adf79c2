use log::info;
use recipe_import::config::Settings;
use recipe_import::error::ImportError;
use recipe_import::server;

#[tokio::main]
async fn main() -> Result<(), ImportError> {
    env_logger::init();

    let settings = Settings::load()?;
    let app = server::router(&settings)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
