pub mod clients;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod state;
pub mod status;

pub use clients::movie_api_client::MovieApiClient;
pub use config::ClientConfig;
pub use controller::{ActionOutcome, MovieController};
pub use error::{ActionError, FetchError, ValidationError};
pub use model::movie::MovieRecord;

/// Builds a controller talking to the API described by `config`.
pub fn connect(config: &ClientConfig) -> Result<MovieController, error::ConfigError> {
    let api = MovieApiClient::new(config)?;
    log::info!("Using movie API at {}", api.base_url());
    Ok(MovieController::new(api))
}
