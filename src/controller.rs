//! User actions tying the form, the gateway calls and the list state
//! together.
//!
//! Every write that succeeds is followed by exactly one `list_all` reload, so
//! the list always mirrors the server after a mutation. Create and delete
//! then clear the form; update keeps it so the user can keep editing.

use crate::{
    clients::movie_api_client::MovieApiClient,
    error::{ActionError, FetchError, ValidationError},
    form::MovieForm,
    model::{identifier, movie::MovieRecord},
    state::{
        view::{self, MovieRow},
        AppState,
    },
    status::{Severity, StatusSlot},
};

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this movie?";

/// What a user action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Listed { count: usize },
    Created { id: String },
    Updated { id: String },
    Deleted { id: String },
    Selected { id: String },
    Cleared,
    Unchanged,
}

pub type ActionResult = Result<ActionOutcome, ActionError>;

pub struct MovieController {
    api: MovieApiClient,
    pub form: MovieForm,
    state: AppState,
    status: StatusSlot,
}

impl MovieController {
    pub fn new(api: MovieApiClient) -> Self {
        let mut status = StatusSlot::default();
        status.show(
            format!("Ready to connect to API at {}", api.base_url()),
            Severity::Info,
        );
        Self {
            api,
            form: MovieForm::default(),
            state: AppState::default(),
            status,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn status(&self) -> &StatusSlot {
        &self.status
    }

    pub fn rows(&self) -> Vec<MovieRow> {
        view::rows(&self.state)
    }

    pub async fn get_all_movies(&mut self) -> ActionResult {
        match self.reload().await {
            Ok(count) => {
                self.status
                    .show(format!("Loaded {} movies", count), Severity::Success);
                Ok(ActionOutcome::Listed { count })
            }
            Err(e) => Err(self.fetch_failed(e)),
        }
    }

    pub async fn get_by_title(&mut self) -> ActionResult {
        let title = self.form.title.trim().to_string();
        if title.is_empty() {
            return Err(self.invalid(ValidationError::EmptySearchTitle));
        }

        match self.api.search_by_title(&title).await {
            Ok(movies) => {
                let count = movies.len();
                self.state.replace_movies(movies);
                self.status.show(
                    format!("Found {} movie(s) with title \"{}\"", count, title),
                    Severity::Success,
                );
                Ok(ActionOutcome::Listed { count })
            }
            Err(e) => Err(self.fetch_failed(e)),
        }
    }

    pub async fn create_movie(&mut self) -> ActionResult {
        let movie = self.read_form(true)?;

        if let Err(e) = self.api.create(&movie).await {
            return Err(self.fetch_failed(e));
        }

        let reloaded = self.reload().await;
        self.reset_form();
        self.finish_write(
            reloaded,
            "Movie created successfully!",
            ActionOutcome::Created { id: movie.id },
        )
    }

    pub async fn update_movie(&mut self) -> ActionResult {
        if !identifier::is_valid_id(self.form.trimmed_id()) {
            return Err(self.invalid(ValidationError::UpdateNeedsSelection));
        }
        let movie = self.read_form(false)?;

        if let Err(e) = self.api.update(&movie).await {
            return Err(self.fetch_failed(e));
        }

        let reloaded = self.reload().await;
        self.finish_write(
            reloaded,
            "Movie updated successfully!",
            ActionOutcome::Updated { id: movie.id },
        )
    }

    /// Deletes the movie in the id field once `confirm` agrees. Declining is
    /// silent: no request, no status change.
    pub async fn delete_movie<F>(&mut self, confirm: F) -> ActionResult
    where
        F: FnOnce(&str) -> bool,
    {
        let id = self.form.trimmed_id().to_string();
        if !identifier::is_valid_id(&id) {
            return Err(self.invalid(ValidationError::DeleteNeedsSelection));
        }

        if !confirm(CONFIRM_DELETE_PROMPT) {
            log::debug!("delete of {} cancelled", id);
            return Err(ActionError::Cancelled);
        }

        if let Err(e) = self.api.delete(&id).await {
            return Err(self.fetch_failed(e));
        }

        let reloaded = self.reload().await;
        self.reset_form();
        self.finish_write(
            reloaded,
            "Movie deleted successfully!",
            ActionOutcome::Deleted { id },
        )
    }

    /// Row click. Unknown ids are ignored.
    pub fn select_movie(&mut self, id: &str) -> ActionOutcome {
        let Some(movie) = self.state.select(id).cloned() else {
            return ActionOutcome::Unchanged;
        };
        self.form.populate(&movie);
        self.status
            .show(format!("Selected movie: {}", movie.title), Severity::Info);
        ActionOutcome::Selected { id: movie.id }
    }

    pub fn clear_form(&mut self) -> ActionOutcome {
        self.reset_form();
        self.status.show("Form cleared", Severity::Info);
        ActionOutcome::Cleared
    }

    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        self.state.selected_movie()
    }

    async fn reload(&mut self) -> Result<usize, FetchError> {
        let movies = self.api.list_all().await?;
        let count = movies.len();
        self.state.replace_movies(movies);
        Ok(count)
    }

    fn read_form(&mut self, is_create: bool) -> Result<MovieRecord, ActionError> {
        self.form.read(is_create).map_err(|e| self.invalid(e))
    }

    fn reset_form(&mut self) {
        self.form.clear();
        self.state.clear_selection();
    }

    fn finish_write(
        &mut self,
        reloaded: Result<usize, FetchError>,
        success: &str,
        outcome: ActionOutcome,
    ) -> ActionResult {
        match reloaded {
            Ok(_) => {
                self.status.show(success, Severity::Success);
                Ok(outcome)
            }
            Err(e) => Err(self.fetch_failed(e)),
        }
    }

    fn invalid(&mut self, e: ValidationError) -> ActionError {
        self.status.show(e.to_string(), Severity::Error);
        ActionError::Validation(e)
    }

    fn fetch_failed(&mut self, e: FetchError) -> ActionError {
        log::error!("{} Error: {:?}", e.operation, e.cause);
        self.status.show(format!("Error: {}", e), Severity::Error);
        ActionError::Fetch(e)
    }
}
