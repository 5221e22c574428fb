//! WASM bridge: mounts the Glade backdrop on a `<canvas>` element.
//!
//! ```ignore
//! import init, { backdrop_mount, backdrop_unmount } from "glade-web";
//!
//! await init();
//! backdrop_mount("backdrop", null);   // on component mount
//! backdrop_unmount();                 // on component unmount
//! ```

pub mod canvas;
pub mod host;

use std::cell::RefCell;

use glade_engine::{BackdropConfig, BackdropMount};
use wasm_bindgen::prelude::*;

pub use canvas::{css_color, CanvasPainter};
pub use host::WebHost;

thread_local! {
    static MOUNT: RefCell<Option<BackdropMount<WebHost>>> = RefCell::new(None);
}

/// Run `f` against the mounted backdrop. No-op when nothing is mounted.
pub(crate) fn with_mount(f: impl FnOnce(&mut BackdropMount<WebHost>)) {
    MOUNT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(mount) => f(mount),
        None => log::debug!("backdrop: callback after unmount ignored"),
    });
}

/// Parse an optional JSON config, falling back to defaults on error.
pub fn parse_config(json: Option<&str>) -> BackdropConfig {
    match json.map(BackdropConfig::from_json) {
        None => BackdropConfig::default(),
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("backdrop: invalid config ({}), using defaults", e);
            BackdropConfig::default()
        }
    }
}

/// Mount the backdrop on the canvas with id `canvas_id`.
///
/// Replaces any backdrop already mounted. Returns `false` (and draws nothing)
/// when the canvas or its 2D context is unavailable.
#[wasm_bindgen]
pub fn backdrop_mount(canvas_id: &str, config_json: Option<String>) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    backdrop_unmount();

    let config = parse_config(config_json.as_deref());
    let Some(host) = WebHost::new(canvas_id) else {
        log::debug!("backdrop: canvas #{} not found", canvas_id);
        return false;
    };
    let Some(mount) = BackdropMount::mount(host, config) else {
        return false;
    };

    MOUNT.with(|cell| *cell.borrow_mut() = Some(mount));
    true
}

/// Cancel the pending frame and remove the resize listener.
#[wasm_bindgen]
pub fn backdrop_unmount() {
    // Take first, drop outside the borrow: Drop talks to the browser.
    let previous = MOUNT.with(|cell| cell.borrow_mut().take());
    drop(previous);
}

#[wasm_bindgen]
pub fn backdrop_is_mounted() -> bool {
    MOUNT.with(|cell| cell.borrow().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glade_engine::StarSizing;

    #[test]
    fn missing_config_is_default() {
        assert_eq!(parse_config(None), BackdropConfig::default());
    }

    #[test]
    fn valid_config_is_parsed() {
        let config = parse_config(Some(r#"{ "star_sizing": "stable", "tree_count": 12 }"#));
        assert_eq!(config.star_sizing, StarSizing::Stable);
        assert_eq!(config.tree_count, 12);
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(parse_config(Some("{ not json")), BackdropConfig::default());
    }

    #[test]
    fn nothing_mounted_initially() {
        assert!(!backdrop_is_mounted());
        backdrop_unmount();
        assert!(!backdrop_is_mounted());
    }
}
