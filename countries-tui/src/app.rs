//! Widget state and the main event loop.

use std::sync::Arc;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info, trace};

use countries_lib::{
    Country, NavKey, RestCountriesClient, SuggestionController, SuggestionState, spawn_load,
};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::events::{AppEvent, Key, convert_event};
use crate::input::InputBuffer;
use crate::render::HitMap;
use crate::terminal::TerminalGuard;

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running and redraw.
    Continue,
    /// Leave the loop and restore the terminal.
    Quit,
}

/// The search field, the suggestion controller behind it, and where the
/// last frame put each suggestion.
#[derive(Debug, Default)]
pub struct App {
    controller: SuggestionController,
    input: InputBuffer,
    hit_map: HitMap,
}

impl App {
    /// Empty field, no countries yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller state as of the last event.
    pub fn state(&self) -> &SuggestionState {
        self.controller.state()
    }

    /// The search field.
    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    /// Remember where the last frame drew each suggestion.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Install the fetched country list.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        self.controller.set_countries(countries);
    }

    /// Apply one terminal event.
    pub fn handle(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Key { key, ctrl } => return self.handle_key(key, ctrl),
            AppEvent::Click { .. } if self.hit_map.is_empty() => {
                trace!("Click with no suggestions on screen");
            }
            AppEvent::Click { row, .. } => {
                if let Some(name) = self.hit_map.name_at(row).map(str::to_string) {
                    debug!("Clicked suggestion {}", name);
                    self.controller.on_click(name);
                    self.sync_input();
                }
            }
            AppEvent::Paste(text) => {
                if self.input.insert_str(&text) {
                    self.text_changed();
                }
            }
            AppEvent::Resize => {}
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key: Key, ctrl: bool) -> Flow {
        if ctrl {
            return match key {
                Key::Char('c') | Key::Char('q') => Flow::Quit,
                _ => Flow::Continue,
            };
        }

        match key {
            Key::Escape => return Flow::Quit,
            Key::Char(c) => {
                self.input.insert_char(c);
                self.text_changed();
            }
            Key::Backspace => {
                if self.input.delete_before() {
                    self.text_changed();
                }
            }
            Key::Delete => {
                if self.input.delete_at() {
                    self.text_changed();
                }
            }
            Key::Left => self.input.move_left(),
            Key::Right => self.input.move_right(),
            Key::Home => self.input.move_home(),
            Key::End => self.input.move_end(),
            Key::Up | Key::Down | Key::Enter => {
                self.controller.on_key(key.nav_key());
                self.sync_input();
            }
            Key::Unhandled => self.controller.on_key(NavKey::Other),
        }
        Flow::Continue
    }

    fn text_changed(&mut self) {
        self.controller.on_text_change(self.input.text());
    }

    /// Picks clear the search; mirror that into the field.
    fn sync_input(&mut self) {
        if self.controller.state().search() != self.input.text() {
            self.input.set_text(self.controller.state().search());
        }
    }
}

/// The REST client described by `config`.
pub fn build_client(config: &AppConfig) -> Result<RestCountriesClient, AppError> {
    let client = RestCountriesClient::builder()
        .endpoint(&config.endpoint)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Run the widget until the user quits.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let client = build_client(&config)?;

    info!("Fetching countries from {}", client.endpoint());
    let mut load = spawn_load(Arc::new(client));
    let mut loaded = false;

    let mut app = App::new();
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();

    terminal.draw(&mut app)?;

    loop {
        tokio::select! {
            countries = &mut load, if !loaded => {
                loaded = true;
                app.set_countries(countries);
            }

            event = events.next() => {
                match event {
                    Some(Ok(event)) => {
                        trace!("Crossterm event: {:?}", event);
                        if let Some(event) = convert_event(event)
                            && app.handle(event) == Flow::Quit
                        {
                            info!("Quit requested");
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        error!("Event stream error: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        info!("Event stream closed");
                        break;
                    }
                }
            }
        }

        terminal.draw(&mut app)?;
    }

    Ok(())
}
