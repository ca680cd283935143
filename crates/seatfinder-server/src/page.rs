//! Server-rendered HTML for the seat finder form.
//!
//! Markup lives in `templates/page.hbs`; Handlebars escapes every `{{value}}`.

use handlebars::Handlebars;
use serde::Serialize;

use seatfinder_shared::resolver::normalize;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::lookup::{LookupOutcome, MapStatus};
use crate::venue::Venue;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.hbs");
const PAGE: &str = "page";

#[derive(Serialize)]
struct TermOption<'a> {
    value: &'a str,
    selected: bool,
}

#[derive(Serialize)]
struct AmbiguousView<'a> {
    query: &'a str,
    count: usize,
    options: &'a [String],
}

#[derive(Serialize)]
struct FoundView<'a> {
    placard_name: &'a str,
    table: &'a str,
    group: &'a str,
    closing_message: &'a str,
    /// URL-encoded table id when the map carries a marker.
    marked_table: Option<String>,
    coordinates_missing: bool,
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    data_error: Option<&'a str>,
    terms: Vec<TermOption<'a>>,
    ambiguous: Option<AmbiguousView<'a>>,
    found: Option<FoundView<'a>>,
    not_found: bool,
    show_plan: bool,
}

/// Index of the vocabulary entry to preselect for `query`: an exact match
/// wins, otherwise the first case-insensitive one.
fn selected_term(terms: &[String], query: &str) -> Option<usize> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    terms.iter().position(|t| t == query).or_else(|| {
        let needle = normalize(query);
        terms.iter().position(|t| normalize(t) == needle)
    })
}

/// Page renderer holding the compiled template.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(PAGE, PAGE_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Render the full page for one interaction.
    pub fn render(
        &self,
        config: &ServerConfig,
        venue: &Venue,
        query: Option<&str>,
        outcome: &LookupOutcome,
    ) -> Result<String, ServerError> {
        let terms = venue.directory.search_terms();
        let selected = selected_term(terms, query.unwrap_or(""));

        let ambiguous = match outcome {
            LookupOutcome::Ambiguous { query, options } => Some(AmbiguousView {
                query,
                count: options.len(),
                options,
            }),
            _ => None,
        };

        let found = match outcome {
            LookupOutcome::Found {
                placard_name,
                table,
                group,
                map,
            } => Some(FoundView {
                placard_name,
                table,
                group,
                closing_message: &config.closing_message,
                marked_table: (*map == MapStatus::Marked)
                    .then(|| urlencoding::encode(table).into_owned()),
                coordinates_missing: *map == MapStatus::CoordinatesMissing,
            }),
            _ => None,
        };

        let context = PageContext {
            title: &config.event_title,
            data_error: venue.data_error.as_deref(),
            terms: terms
                .iter()
                .enumerate()
                .map(|(idx, value)| TermOption {
                    value,
                    selected: selected == Some(idx),
                })
                .collect(),
            ambiguous,
            found,
            not_found: matches!(outcome, LookupOutcome::NotFound { .. }),
            show_plan: matches!(outcome, LookupOutcome::Idle) && venue.floor_plan.is_some(),
        };

        self.handlebars
            .render(PAGE, &context)
            .map_err(|e| ServerError::Internal(format!("Template render failed: {e}")))
    }
}
