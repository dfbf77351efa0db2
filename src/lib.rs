//! Keyboard layout remapping and wrong-layout detection.
//!
//! Given a token typed under one keyboard layout, the engine can compute what
//! the same physical keystrokes would have produced under another layout
//! ([`Engine::remap`]) and decide whether the token was most likely typed
//! under the wrong active layout ([`Engine::evaluate_switch`]).
//!
//! Layout tables are registered once at construction and are immutable
//! afterwards, so every entry point is a pure read and safe to call from
//! multiple threads. Tables for US QWERTY and Russian ЙЦУКЕН ship built in
//! ([`Engine::builtin`]); hosts can register their own.

pub mod config;
mod engine;
mod error;
mod layout;
pub mod layouts;
mod registry;
mod remap;
pub mod score;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use layout::{KeyPos, LayoutId, Script};
pub use registry::{LayoutRegistry, LayoutTable};
pub use remap::RemapResult;
pub use score::{BuiltinScorer, SwitchVerdict, WordScorer};

#[cfg(test)]
mod tests;
