use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use movieclient::{ClientConfig, MovieController, MovieRecord};

/// In-memory stand-in for the movie REST API.
#[derive(Default)]
pub struct FakeApi {
    pub movies: Vec<MovieRecord>,
    pub requests: Vec<String>,
    pub fail_with: Option<StatusCode>,
    /// Fails only `GET /movie`, leaving writes working.
    pub fail_list: bool,
}

pub type SharedApi = Arc<Mutex<FakeApi>>;

impl FakeApi {
    fn record(&mut self, request: String) -> Result<(), StatusCode> {
        self.requests.push(request);
        match self.fail_with {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

async fn list(State(api): State<SharedApi>) -> Result<Json<Vec<MovieRecord>>, StatusCode> {
    let mut api = api.lock().unwrap();
    api.record("GET /movie".to_string())?;
    if api.fail_list {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(api.movies.clone()))
}

async fn by_title(
    State(api): State<SharedApi>,
    Path(title): Path<String>,
) -> Result<Json<Vec<MovieRecord>>, StatusCode> {
    let mut api = api.lock().unwrap();
    api.record(format!("GET /movie/title/{}", title))?;
    let found: Vec<MovieRecord> = api
        .movies
        .iter()
        .filter(|m| m.title == title)
        .cloned()
        .collect();
    if found.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(found))
}

async fn create(State(api): State<SharedApi>, Json(movie): Json<MovieRecord>) -> StatusCode {
    let mut api = api.lock().unwrap();
    if let Err(status) = api.record(format!("POST /movie {}", movie.id)) {
        return status;
    }
    api.movies.push(movie);
    StatusCode::CREATED
}

async fn update(State(api): State<SharedApi>, Json(movie): Json<MovieRecord>) -> StatusCode {
    let mut api = api.lock().unwrap();
    if let Err(status) = api.record(format!("PUT /movie {}", movie.id)) {
        return status;
    }
    match api.movies.iter_mut().find(|m| m.id == movie.id) {
        Some(existing) => {
            *existing = movie;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn remove(State(api): State<SharedApi>, Path(id): Path<String>) -> StatusCode {
    let mut api = api.lock().unwrap();
    if let Err(status) = api.record(format!("DELETE /movie/{}", id)) {
        return status;
    }
    let before = api.movies.len();
    api.movies.retain(|m| m.id != id);
    if api.movies.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Serves `movies` on an ephemeral local port.
pub async fn spawn_api(movies: Vec<MovieRecord>) -> (SocketAddr, SharedApi) {
    let api: SharedApi = Arc::new(Mutex::new(FakeApi {
        movies,
        ..Default::default()
    }));

    let app = Router::new()
        .route("/movie", get(list).post(create).put(update))
        .route("/movie/title/{title}", get(by_title))
        .route("/movie/{id}", delete(remove))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, api)
}

pub async fn controller_for(movies: Vec<MovieRecord>) -> (MovieController, SharedApi) {
    let (addr, api) = spawn_api(movies).await;
    let config = ClientConfig::new(&format!("http://{}", addr)).unwrap();
    (movieclient::connect(&config).unwrap(), api)
}

pub fn requests(api: &SharedApi) -> Vec<String> {
    api.lock().unwrap().requests.clone()
}

pub fn movie(id: &str, title: &str) -> MovieRecord {
    MovieRecord {
        id: id.to_string(),
        title: title.to_string(),
        actors: vec![],
        budget: None,
        description: String::new(),
    }
}

pub const HEAT_ID: &str = "11111111-1111-4111-8111-111111111111";
pub const PRIMER_ID: &str = "22222222-2222-4222-8222-222222222222";

pub fn catalogue() -> Vec<MovieRecord> {
    vec![
        MovieRecord {
            actors: vec!["Al Pacino".to_string(), "Robert De Niro".to_string()],
            budget: Some(60_000_000.0),
            description: "A group of professional bank robbers".to_string(),
            ..movie(HEAT_ID, "Heat")
        },
        movie(PRIMER_ID, "Primer"),
    ]
}
