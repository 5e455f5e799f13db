//! Browser bindings
//!
//! The page owns drawing and animation. It forwards clicks here, calls
//! `update` every animation frame, and redraws from `view_json`.

use wasm_bindgen::prelude::*;

use crate::session::Session;
use crate::settings::Settings;
use crate::sim::LevelCatalog;

/// Install panic and logging hooks (called once from the page)
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// Current time from `performance.now()`, falling back to `Date.now()`
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Game handle exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game. Both arguments are optional JSON strings.
    #[wasm_bindgen(constructor)]
    pub fn new(
        settings_json: Option<String>,
        levels_json: Option<String>,
    ) -> Result<WebGame, JsValue> {
        let settings = match settings_json {
            Some(json) => Settings::from_json(&json).map_err(to_js)?,
            None => Settings::default(),
        };
        let catalog = match levels_json {
            Some(json) => LevelCatalog::from_json(&json).map_err(to_js)?,
            None => LevelCatalog::builtin(),
        };
        log::info!("Frog Hop ready ({} levels)", catalog.len());
        Ok(WebGame {
            session: Session::new(catalog, settings),
        })
    }

    /// Pad clicked. Returns whether a hop started.
    pub fn click_pad(&mut self, pad: u32) -> bool {
        self.session.click_pad(pad, now_ms())
    }

    /// Land the hop in flight if its animation is over. Returns whether
    /// anything changed.
    pub fn update(&mut self) -> bool {
        self.session.update(now_ms()).is_some()
    }

    pub fn retry(&mut self) {
        self.session.retry();
    }

    pub fn advance(&mut self) -> bool {
        self.session.advance()
    }

    pub fn is_hopping(&self) -> bool {
        self.session.is_hopping()
    }

    /// Hop animation length the page should play (ms)
    pub fn hop_delay_ms(&self) -> u32 {
        self.session.settings().effective_hop_delay_ms()
    }

    /// Next pad on the best winning route, if the level can still be won
    pub fn hint(&self) -> Option<u32> {
        self.session
            .hint()
            .and_then(|s| s.route.first().copied())
    }

    pub fn view_json(&self) -> Result<String, JsValue> {
        self.session.view().to_json().map_err(to_js)
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
