//! What the widget should draw for a given state.

use super::SuggestionState;

/// Shown instead of the list when a search matches nothing.
pub const NO_RESULTS: &str = "No results found";

/// One line of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub name: String,
    pub flag: Option<String>,
    pub flag_image_url: String,
    pub highlighted: bool,
}

/// The result area of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionView {
    /// The "no results" indicator.
    NoResults,
    /// The suggestion list, possibly empty.
    Items(Vec<SuggestionRow>),
}

impl SuggestionView {
    /// Derive the result area from `state`.
    ///
    /// "No results" only shows while something is typed, nothing matches and
    /// no country has been picked yet.
    pub fn from_state(state: &SuggestionState) -> Self {
        if state.suggestions().is_empty()
            && !state.search().is_empty()
            && state.selected().is_empty()
        {
            return Self::NoResults;
        }

        let highlighted = state.highlighted();
        let rows = state
            .suggestions()
            .iter()
            .enumerate()
            .map(|(i, country)| SuggestionRow {
                name: country.common_name().to_string(),
                flag: country.flag().map(str::to_string),
                flag_image_url: country.flag_image_url().to_string(),
                highlighted: highlighted == Some(i),
            })
            .collect();

        Self::Items(rows)
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults)
    }

    /// Rows to draw; empty for [`SuggestionView::NoResults`].
    pub fn rows(&self) -> &[SuggestionRow] {
        match self {
            Self::NoResults => &[],
            Self::Items(rows) => rows.as_slice(),
        }
    }
}

/// The status line under the list.
pub fn status_line(state: &SuggestionState) -> String {
    format!("Country selected: {}", state.selected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;
    use crate::suggest::{NavKey, SuggestionController};

    fn controller() -> SuggestionController {
        SuggestionController::new(vec![
            Country::new("France", "https://flagcdn.com/fr.svg").with_flag("🇫🇷"),
            Country::new("Germany", "https://flagcdn.com/de.svg"),
            Country::new("Guinea", "https://flagcdn.com/gn.svg"),
        ])
    }

    #[test]
    fn test_empty_search_shows_nothing() {
        let c = controller();
        let view = SuggestionView::from_state(c.state());
        assert_eq!(view, SuggestionView::Items(Vec::new()));
        assert_eq!(status_line(c.state()), "Country selected: ");
    }

    #[test]
    fn test_no_results() {
        let mut c = controller();
        c.on_text_change("zz");
        assert!(SuggestionView::from_state(c.state()).is_no_results());
    }

    #[test]
    fn test_no_results_hidden_after_selection() {
        let mut c = controller();
        c.on_click("France");
        c.on_text_change("zz");
        let view = SuggestionView::from_state(c.state());
        assert!(!view.is_no_results());
        assert!(view.rows().is_empty());
        assert_eq!(status_line(c.state()), "Country selected: France");
    }

    #[test]
    fn test_highlighted_row() {
        let mut c = controller();
        c.on_text_change("g");
        c.on_key(NavKey::Down);
        c.on_key(NavKey::Down);

        let view = SuggestionView::from_state(c.state());
        let highlighted: Vec<bool> = view.rows().iter().map(|r| r.highlighted).collect();
        assert_eq!(highlighted, [false, true]);
        assert_eq!(view.rows()[1].name, "Guinea");
        assert_eq!(view.rows()[1].flag_image_url, "https://flagcdn.com/gn.svg");
    }

    #[test]
    fn test_row_carries_flag() {
        let mut c = controller();
        c.on_text_change("fra");
        let view = SuggestionView::from_state(c.state());
        assert_eq!(view.rows()[0].flag.as_deref(), Some("🇫🇷"));
        assert!(!view.rows()[0].highlighted);
    }
}
