//! Render-ready rows computed from [`AppState`].

use super::AppState;
use crate::model::movie::MovieRecord;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    pub actors: String,
    pub budget: String,
    pub description: String,
    pub selected: bool,
}

/// One row per listed movie, in list order.
pub fn rows(state: &AppState) -> Vec<MovieRow> {
    state
        .movies()
        .iter()
        .map(|movie| row(movie, state.selected_id() == Some(movie.id.as_str())))
        .collect()
}

fn row(movie: &MovieRecord, selected: bool) -> MovieRow {
    MovieRow {
        id: movie.id.clone(),
        title: movie.title.clone(),
        actors: movie.actors_display(),
        budget: movie
            .budget
            .map(format_currency)
            .unwrap_or_else(|| "N/A".to_string()),
        description: preview(&movie.description),
        selected,
    }
}

fn preview(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// `$` amount with comma thousands separators and at most three decimals.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction.is_empty() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction}")
    }
}
