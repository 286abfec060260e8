//! Suggestion state and its transitions.

use log::debug;

use super::filter::filter_countries;
use crate::model::Country;

/// Navigation keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    /// Anything else; text editing reaches the controller as a text change.
    Other,
}

/// A UI event routed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEvent {
    /// The input text changed to the given value.
    TextChanged(String),
    /// A key was pressed while the input had focus.
    Key(NavKey),
    /// A suggestion with the given name was clicked.
    Clicked(String),
}

/// Everything the widget shows, minus the country list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionState {
    search: String,
    suggestions: Vec<Country>,
    /// 1-based highlight; 0 means none. Never exceeds `suggestions.len()`.
    active: usize,
    selected: String,
}

impl SuggestionState {
    /// Current input text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Countries currently suggested, in list order.
    pub fn suggestions(&self) -> &[Country] {
        &self.suggestions
    }

    /// 1-based active index, 0 when nothing is highlighted.
    pub fn active(&self) -> usize {
        self.active
    }

    /// 0-based position of the highlighted suggestion.
    pub fn highlighted(&self) -> Option<usize> {
        self.active.checked_sub(1)
    }

    /// The highlighted suggestion, if any.
    pub fn highlighted_country(&self) -> Option<&Country> {
        self.highlighted().and_then(|i| self.suggestions.get(i))
    }

    /// Name of the last confirmed pick, empty if none.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    fn confirm(&mut self, name: String) {
        debug!("Selected country: {}", name);
        self.selected = name;
        self.search.clear();
        self.suggestions.clear();
        self.active = 0;
    }
}

/// Owns the country list and the [`SuggestionState`] derived from it.
#[derive(Debug, Clone, Default)]
pub struct SuggestionController {
    countries: Vec<Country>,
    state: SuggestionState,
}

impl SuggestionController {
    /// Create a controller over `countries`.
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            state: SuggestionState::default(),
        }
    }

    /// The full country list.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Current state.
    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// Install the fetched country list.
    ///
    /// The suggestions are recomputed against the current search so text typed
    /// while the fetch was pending starts matching immediately.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        debug!("Country list set ({} entries)", countries.len());
        self.countries = countries;
        self.refilter();
    }

    /// Route an event to its transition.
    pub fn apply(&mut self, event: SuggestionEvent) {
        match event {
            SuggestionEvent::TextChanged(text) => self.on_text_change(text),
            SuggestionEvent::Key(key) => self.on_key(key),
            SuggestionEvent::Clicked(name) => self.on_click(name),
        }
    }

    /// The input text changed.
    ///
    /// Clearing the text also clears the previous selection.
    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.state.search = text.into();
        if self.state.search.is_empty() {
            self.state.selected.clear();
        }
        self.refilter();
    }

    /// A key was pressed in the input.
    pub fn on_key(&mut self, key: NavKey) {
        let state = &mut self.state;
        match key {
            NavKey::Down => {
                state.active = (state.active + 1).min(state.suggestions.len());
            }
            NavKey::Up => {
                state.active = state.active.saturating_sub(1);
            }
            NavKey::Enter => {
                if let Some(name) = state
                    .highlighted_country()
                    .map(|country| country.common_name().to_string())
                {
                    state.confirm(name);
                }
            }
            NavKey::Other => {}
        }
    }

    /// A suggestion was clicked. Confirms `name` whatever is highlighted.
    pub fn on_click(&mut self, name: impl Into<String>) {
        self.state.confirm(name.into());
    }

    fn refilter(&mut self) {
        self.state.suggestions = filter_countries(&self.countries, &self.state.search);
        self.state.active = 0;
        debug!(
            "Refiltered: search={:?} matches={}",
            self.state.search,
            self.state.suggestions.len()
        );
    }
}
