//! Prefix Drop core crate.
//!
//! Words fall down the play area and the player steers each one into the
//! bucket for its negative prefix (`un-`, `in-`, `dis-`, `im-`, `ir-`, `il-`).
//! Gameplay lives in plain Rust modules (`game`, `session`, `spawner`,
//! `collision`, `input`) that run natively under `cargo test`; `web` binds them
//! to the page through wasm-bindgen.

use wasm_bindgen::prelude::*;

pub mod collision;
pub mod config;
pub mod dictionary;
pub mod event;
pub mod game;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod log;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod spawner;
mod web;

pub use config::{ConfigError, GameConfig};
pub use dictionary::{Prefix, WORDS, WordEntry};
pub use event::GameEvent;
pub use game::{GameController, Phase};
pub use layout::{Bucket, Layout};
pub use session::{FallingWord, GameSession, Mistake, Outcome};
pub use web::{handle_key, init_page, reset_game, restart_game, start_game};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Pages without the game markup just load the module.
    if let Err(err) = init_page() {
        log::log_line(&format!("[prefix-drop] not bound: {err:?}"));
    }
}
