mod engine_tests;
mod registry_tests;

use crate::{Engine, EngineConfig};

pub(crate) fn builtin_engine() -> Engine {
    Engine::builtin(EngineConfig::default()).expect("built-in tables are well formed")
}
