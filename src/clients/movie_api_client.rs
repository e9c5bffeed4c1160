use reqwest::{header, Client, Response};

use crate::{
    config::ClientConfig,
    error::{ConfigError, FetchCause, FetchError, Operation},
    model::movie::MovieRecord,
};

/// Thin wrapper over the movie REST API. Each method is exactly one request;
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct MovieApiClient {
    client: Client,
    base_url: String,
}

impl MovieApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let user_agent = header::HeaderValue::from_static(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        Ok(Self {
            client: Client::builder().user_agent(user_agent).build()?,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_all(&self) -> Result<Vec<MovieRecord>, FetchError> {
        let url = format!("{}/movie", self.base_url);
        self.get_movies(Operation::ListAll, &url).await
    }

    /// Looks up movies by exact title. `title` is percent-encoded into the
    /// path as a single segment.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<MovieRecord>, FetchError> {
        let url = format!(
            "{}/movie/title/{}",
            self.base_url,
            urlencoding::encode(title)
        );
        self.get_movies(Operation::SearchByTitle, &url).await
    }

    pub async fn create(&self, movie: &MovieRecord) -> Result<(), FetchError> {
        let url = format!("{}/movie", self.base_url);
        log::debug!("POST {} (id {})", url, movie.id);
        let request = self.client.post(&url).json(movie);
        Self::expect_success(Operation::Create, request.send().await).map(|_| ())
    }

    /// The server finds the movie to replace through `movie.id`.
    pub async fn update(&self, movie: &MovieRecord) -> Result<(), FetchError> {
        let url = format!("{}/movie", self.base_url);
        log::debug!("PUT {} (id {})", url, movie.id);
        let request = self.client.put(&url).json(movie);
        Self::expect_success(Operation::Update, request.send().await).map(|_| ())
    }

    pub async fn delete(&self, id: &str) -> Result<(), FetchError> {
        let url = format!("{}/movie/{}", self.base_url, id);
        log::debug!("DELETE {}", url);
        let request = self.client.delete(&url);
        Self::expect_success(Operation::Delete, request.send().await).map(|_| ())
    }

    async fn get_movies(
        &self,
        operation: Operation,
        url: &str,
    ) -> Result<Vec<MovieRecord>, FetchError> {
        log::debug!("GET {}", url);
        let response = Self::expect_success(operation, self.client.get(url).send().await)?;
        response
            .json::<Vec<MovieRecord>>()
            .await
            .map_err(|e| FetchError::new(operation, e))
    }

    fn expect_success(
        operation: Operation,
        sent: reqwest::Result<Response>,
    ) -> Result<Response, FetchError> {
        let response = sent.map_err(|e| FetchError::new(operation, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(operation, FetchCause::Status(status)));
        }
        Ok(response)
    }
}
