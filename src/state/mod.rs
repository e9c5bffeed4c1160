pub mod view;

use crate::model::movie::MovieRecord;

/// The last list the server returned plus a soft pointer into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    movies: Vec<MovieRecord>,
    selected: Option<String>,
}

impl AppState {
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        let id = self.selected.as_deref()?;
        self.find(id)
    }

    pub fn find(&self, id: &str) -> Option<&MovieRecord> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Swaps in a fresh snapshot. A selection whose id is gone from the new
    /// list is dropped.
    pub fn replace_movies(&mut self, movies: Vec<MovieRecord>) {
        self.movies = movies;
        if let Some(id) = self.selected.as_deref() {
            if self.find(id).is_none() {
                log::debug!("selected movie {} no longer listed, dropping selection", id);
                self.selected = None;
            }
        }
    }

    /// Selects the movie with `id` and returns it, or `None` without touching
    /// the state when it is not listed.
    pub fn select(&mut self, id: &str) -> Option<&MovieRecord> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        self.selected = Some(id.to_string());
        self.movies.get(index)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
