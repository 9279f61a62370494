mod config;
mod wiring;

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use stats::Dataset;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::Config::from_env()?;
    let dataset = Dataset::from_file(Path::new(&config.data_path))?;
    let listener = TcpListener::bind(config.listen_addr).await?;

    axum::serve(listener, wiring::build_app(Arc::new(dataset))).await?;
    Ok(())
}
