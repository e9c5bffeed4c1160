//! Editable form fields and their mapping to [`MovieRecord`].

use crate::{
    error::ValidationError,
    model::{identifier, movie::MovieRecord},
};

/// Raw text of the five movie fields, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub id: String,
    pub title: String,
    pub actors: String,
    pub budget: String,
    pub description: String,
}

impl MovieForm {
    /// Builds a record from the fields. Creating ignores the id field and
    /// generates a fresh one.
    pub fn read(&self, is_create: bool) -> Result<MovieRecord, ValidationError> {
        let id = if is_create {
            identifier::generate_id()
        } else {
            self.id.trim().to_string()
        };

        Ok(MovieRecord {
            id,
            title: self.title.trim().to_string(),
            actors: parse_actors(&self.actors),
            budget: parse_budget(&self.budget)?,
            description: self.description.trim().to_string(),
        })
    }

    pub fn populate(&mut self, movie: &MovieRecord) {
        self.id = movie.id.clone();
        self.title = movie.title.clone();
        self.actors = movie.actors_display();
        self.budget = movie.budget.map(|b| b.to_string()).unwrap_or_default();
        self.description = movie.description.clone();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The id field as it would be sent with an update or delete.
    pub fn trimmed_id(&self) -> &str {
        self.id.trim()
    }
}

fn parse_actors(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|actor| !actor.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_budget(field: &str) -> Result<Option<f64>, ValidationError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }

    match field.parse::<f64>() {
        Ok(budget) if budget.is_finite() => Ok(Some(budget)),
        _ => Err(ValidationError::InvalidBudget(field.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inception_form() -> MovieForm {
        MovieForm {
            id: "ignored".to_string(),
            title: "Inception".to_string(),
            actors: "Leonardo DiCaprio, Tom Hardy".to_string(),
            budget: "160000000".to_string(),
            description: "A thief who steals corporate secrets".to_string(),
        }
    }

    #[test]
    fn reads_new_movie_with_generated_id() {
        let movie = inception_form().read(true).unwrap();

        assert!(identifier::is_valid_id(&movie.id));
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.actors, vec!["Leonardo DiCaprio", "Tom Hardy"]);
        assert_eq!(movie.budget, Some(160000000.0));
        assert_eq!(movie.description, "A thief who steals corporate secrets");
    }

    #[test]
    fn empty_actors_and_budget() {
        let form = MovieForm {
            title: "Test Movie".to_string(),
            actors: " , ,,  ".to_string(),
            ..Default::default()
        };

        let movie = form.read(true).unwrap();

        assert!(movie.actors.is_empty());
        assert_eq!(movie.budget, None);
    }

    #[test]
    fn update_keeps_trimmed_id_verbatim() {
        let form = MovieForm {
            id: "  12345678-1234-1234-1234-123456789ABC ".to_string(),
            ..inception_form()
        };

        let movie = form.read(false).unwrap();

        assert_eq!(movie.id, "12345678-1234-1234-1234-123456789ABC");
    }

    #[test]
    fn actors_keep_order_and_duplicates() {
        assert_eq!(
            parse_actors(" b ,a,, b"),
            vec!["b".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn non_numeric_budget_is_rejected() {
        for budget in ["lots", "12abc", "NaN", "inf"] {
            let form = MovieForm {
                budget: budget.to_string(),
                ..inception_form()
            };
            assert_eq!(
                form.read(true),
                Err(ValidationError::InvalidBudget(budget.to_string()))
            );
        }
    }

    #[test]
    fn budget_round_trips_through_populate() {
        for budget in ["160000000", "2.5", "0", "-3"] {
            let form = MovieForm {
                budget: budget.to_string(),
                ..inception_form()
            };
            let movie = form.read(false).unwrap();

            let mut repopulated = MovieForm::default();
            repopulated.populate(&movie);

            assert_eq!(repopulated.budget, budget);
            assert_eq!(repopulated.read(false).unwrap().budget, movie.budget);
        }
    }

    #[test]
    fn populate_renders_missing_values_as_empty() {
        let mut form = inception_form();
        form.populate(&MovieRecord {
            id: "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".to_string(),
            title: String::new(),
            actors: vec!["A".to_string(), "B".to_string()],
            budget: None,
            description: String::new(),
        });

        assert_eq!(form.id, "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee");
        assert_eq!(form.title, "");
        assert_eq!(form.actors, "A, B");
        assert_eq!(form.budget, "");
        assert_eq!(form.description, "");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = inception_form();
        form.clear();
        assert_eq!(form, MovieForm::default());
    }
}
