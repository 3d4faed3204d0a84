//! Per-language engine table.
//!
//! The set of languages is closed and small, so every engine is built up
//! front into a fixed array indexed by [`Language`]. The table never changes
//! after initialization and needs no locking; concurrent first use is handled
//! by `once_cell::sync::Lazy`.

use super::Engine;
use crate::Language;
use once_cell::sync::Lazy;
use tracing::debug;

static REGISTRY: Lazy<EngineRegistry> = Lazy::new(EngineRegistry::build);

/// Shared, immutable lookup of one [`Engine`] per [`Language`].
#[derive(Debug)]
pub struct EngineRegistry {
    engines: [Engine; 3],
}

impl EngineRegistry {
    fn build() -> Self {
        debug!(languages = Language::ALL.len(), "building engine registry");
        EngineRegistry { engines: Language::ALL.map(Engine::new) }
    }

    /// The engine bound to `language`. Every call for the same language
    /// returns the same instance.
    pub fn get(language: Language) -> &'static Engine {
        &REGISTRY.engines[language.index()]
    }
}
