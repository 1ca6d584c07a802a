// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Logger bootstrap: browser console on wasm, `env_logger` natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Install the console logger and panic hook. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("batlife-core {} ready", env!("CARGO_PKG_VERSION"));
}

/// Install `env_logger` (`RUST_LOG`, default `info`). Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
}
