//! Text search over the collection tables
use crate::shared::list_utils::{contains_ignore_case, Searchable};
use contracts::domain::a001_record::{Panel, RecordRow};
use leptos::prelude::*;

impl Searchable for RecordRow {
    fn matches_filter(&self, filter: &str) -> bool {
        ["artist", "title", "color", "year"].iter().any(|field| {
            self.get_field_value(field)
                .is_some_and(|value| contains_ignore_case(&value, filter))
        })
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "artist" => Some(self.artist.clone()),
            "title" => Some(self.title.clone()),
            "color" => Some(self.color.clone()),
            "year" => self.year.map(|y| y.to_string()),
            "notes" => Some(self.notes.clone()),
            _ => None,
        }
    }
}

/// Whether a row is shown under the current query.
///
/// An empty query shows every row (its region still decides if it is on screen).
/// Otherwise the row must match, sit in a visible region and not be in the mail.
pub fn row_visible(row: &RecordRow, query: &str, visible_regions: &[Panel]) -> bool {
    if query.is_empty() {
        return true;
    }
    !row.incoming
        && row.panel().is_some_and(|panel| visible_regions.contains(&panel))
        && row.matches_filter(query)
}

/// Number of rows a non-empty query leaves on screen
pub fn count_visible(rows: &[RecordRow], query: &str, visible_regions: &[Panel]) -> usize {
    rows.iter()
        .filter(|row| row_visible(row, query, visible_regions))
        .count()
}

/// "1 Record" / "{n} Records"
pub fn results_label(count: usize) -> String {
    let noun = if count == 1 { "Record" } else { "Records" };
    format!("{} {}", count, noun)
}

/// Result counter text; `None` (counter hidden) while the query is empty
pub fn results_counter(rows: &[RecordRow], query: &str, visible_regions: &[Panel]) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Some(results_label(count_visible(rows, query, visible_regions)))
}

/// Current search query shared by the search box and the tables
#[derive(Clone, Copy)]
pub struct TableFilter {
    pub query: RwSignal<String>,
}

impl TableFilter {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(String::new()),
        }
    }

    pub fn set_query(&self, query: String) {
        self.query.set(query);
    }

    /// Drop the query; every row becomes visible again
    pub fn clear(&self) {
        self.query.set(String::new());
    }

    /// Reactive visibility of one row
    pub fn shows(&self, row: &RecordRow, visible_regions: &[Panel]) -> bool {
        self.query.with(|q| row_visible(row, q, visible_regions))
    }
}

impl Default for TableFilter {
    fn default() -> Self {
        Self::new()
    }
}
