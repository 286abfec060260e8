//! Draws the widget.
//!
//! Layout, top to bottom:
//!
//! ```text
//! English-speaking countries:
//!
//! > Gu|
//! ──────────────────────────
//! ▸ 🇬🇳 Guinea
//!   🇬🇺 Guam
//!
//! Country selected: Ireland
//! ```

use std::io::{self, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthChar;

use countries_lib::SuggestionState;
use countries_lib::suggest::{NO_RESULTS, SuggestionView, status_line};

use crate::input::InputBuffer;

/// Heading on the first row.
pub const TITLE: &str = "English-speaking countries:";
/// Dimmed hint shown while the search field is empty.
pub const PLACEHOLDER: &str = "Search your Country";

const PROMPT: &str = "> ";
const INPUT_ROW: u16 = 2;
const LIST_TOP: u16 = 4;
/// Rows not available to the list: everything above it, a gap and the status line.
const CHROME_ROWS: u16 = LIST_TOP + 2;

/// Screen rows of the drawn suggestions, for click dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    rows: Vec<(u16, String)>,
}

impl HitMap {
    /// Country name drawn on `row`, if any.
    pub fn name_at(&self, row: u16) -> Option<&str> {
        self.rows
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, name)| name.as_str())
    }

    /// True when the last frame drew no suggestions.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Draw a full frame of `size` (columns, rows) and return where each
/// suggestion landed.
pub fn draw<W: Write>(
    out: &mut W,
    size: (u16, u16),
    state: &SuggestionState,
    input: &InputBuffer,
) -> io::Result<HitMap> {
    let (width, height) = size;
    let width = width as usize;

    queue!(out, cursor::Hide, Clear(ClearType::All))?;

    queue!(
        out,
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(fit(TITLE, width)),
        SetAttribute(Attribute::Reset)
    )?;

    let field_width = width.saturating_sub(PROMPT.len());
    queue!(out, MoveTo(0, INPUT_ROW), Print(PROMPT))?;
    if input.text().is_empty() {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(fit(PLACEHOLDER, field_width)),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        queue!(out, Print(fit(input.text(), field_width)))?;
    }
    queue!(out, MoveTo(0, INPUT_ROW + 1), Print("─".repeat(width)))?;

    let mut hits = HitMap::default();
    let capacity = height.saturating_sub(CHROME_ROWS).max(1) as usize;

    let used_rows = match SuggestionView::from_state(state) {
        SuggestionView::NoResults => {
            queue!(
                out,
                MoveTo(0, LIST_TOP),
                SetAttribute(Attribute::Italic),
                Print(fit(NO_RESULTS, width)),
                SetAttribute(Attribute::Reset)
            )?;
            1
        }
        SuggestionView::Items(rows) => {
            let offset = scroll_offset(state.highlighted(), capacity);
            let visible: Vec<_> = rows.into_iter().skip(offset).take(capacity).collect();

            for (i, row) in visible.iter().enumerate() {
                let y = LIST_TOP + i as u16;
                let marker = if row.highlighted { "▸" } else { " " };
                let flag = row.flag.as_deref().unwrap_or("  ");
                let line = format!("{} {} {}", marker, flag, row.name);

                queue!(out, MoveTo(0, y))?;
                if row.highlighted {
                    queue!(out, SetAttribute(Attribute::Reverse))?;
                }
                queue!(out, Print(fit(&line, width)), SetAttribute(Attribute::Reset))?;
                hits.rows.push((y, row.name.clone()));
            }

            visible.len()
        }
    };

    let status_row = LIST_TOP + used_rows as u16 + 1;
    queue!(out, MoveTo(0, status_row), Print(fit(&status_line(state), width)))?;

    // Park the cursor in the search field; it keeps focus for the whole session
    let column = (PROMPT.len() + input.cursor_column()).min(width.saturating_sub(1));
    queue!(out, MoveTo(column as u16, INPUT_ROW), cursor::Show)?;

    out.flush()?;
    Ok(hits)
}

/// First list entry to draw so the highlighted one stays on screen.
fn scroll_offset(highlighted: Option<usize>, capacity: usize) -> usize {
    match highlighted {
        Some(i) if i >= capacity => i + 1 - capacity,
        _ => 0,
    }
}

/// Truncate `text` to at most `max_width` display columns.
fn fit(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use countries_lib::{Country, NavKey, SuggestionController};

    use super::*;

    fn controller() -> SuggestionController {
        SuggestionController::new(vec![
            Country::new("France", "").with_flag("🇫🇷"),
            Country::new("Germany", "").with_flag("🇩🇪"),
            Country::new("Guinea", "").with_flag("🇬🇳"),
            Country::new("Guam", "").with_flag("🇬🇺"),
        ])
    }

    fn render(size: (u16, u16), c: &SuggestionController, input: &InputBuffer) -> (String, HitMap) {
        let mut out = Vec::new();
        let hits = draw(&mut out, size, c.state(), input).unwrap();
        (String::from_utf8_lossy(&out).into_owned(), hits)
    }

    #[test]
    fn test_initial_frame() {
        let c = controller();
        let (frame, hits) = render((60, 20), &c, &InputBuffer::new());

        assert!(frame.contains(TITLE));
        assert!(frame.contains(PLACEHOLDER));
        assert!(frame.contains("Country selected: "));
        assert!(!frame.contains(NO_RESULTS));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_suggestion_rows_are_clickable() {
        let mut c = controller();
        let mut input = InputBuffer::new();
        input.set_text("gu");
        c.on_text_change(input.text());

        let (frame, hits) = render((60, 20), &c, &input);
        assert!(frame.contains("Guinea"));
        assert!(frame.contains("Guam"));
        assert!(!frame.contains(PLACEHOLDER));
        assert_eq!(hits.name_at(LIST_TOP), Some("Guinea"));
        assert_eq!(hits.name_at(LIST_TOP + 1), Some("Guam"));
        assert_eq!(hits.name_at(LIST_TOP + 2), None);
        assert_eq!(hits.name_at(0), None);
    }

    #[test]
    fn test_no_results_frame() {
        let mut c = controller();
        let mut input = InputBuffer::new();
        input.set_text("xyz");
        c.on_text_change(input.text());

        let (frame, hits) = render((60, 20), &c, &input);
        assert!(frame.contains(NO_RESULTS));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_short_terminal_scrolls_to_highlight() {
        let mut c = controller();
        let mut input = InputBuffer::new();
        input.set_text("a");
        c.on_text_change(input.text());
        // France, Germany, Guinea, Guam; two rows fit
        for _ in 0..3 {
            c.on_key(NavKey::Down);
        }

        let (_, hits) = render((60, CHROME_ROWS + 2), &c, &input);
        assert_eq!(hits.name_at(LIST_TOP), Some("Germany"));
        assert_eq!(hits.name_at(LIST_TOP + 1), Some("Guinea"));
        assert_eq!(hits.name_at(LIST_TOP + 2), None);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(None, 3), 0);
        assert_eq!(scroll_offset(Some(2), 3), 0);
        assert_eq!(scroll_offset(Some(3), 3), 1);
        assert_eq!(scroll_offset(Some(9), 3), 7);
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Guinea-Bissau", 6), "Guinea");
        assert_eq!(fit("Chad", 10), "Chad");
        assert_eq!(fit("Chad", 0), "");
    }
}
