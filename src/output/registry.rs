//! Name -> factory registry for output formats.
//!
//! The registry is an explicit object built once at the composition root.
//! Registration is first-wins: re-registering an existing name is a silent
//! no-op, so callers can register their own variant of a built-in name
//! before calling [`OutputRegistry::register_builtins`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::format::BuiltinFormat;
use super::session::Outputter;
use crate::error::{OutputError, Result};

/// Format used by [`OutputRegistry::default_outputter`].
pub const DEFAULT_OUTPUTTER: BuiltinFormat = BuiltinFormat::Tabular;

pub type OutputterFactory = Arc<dyn Fn() -> Box<dyn Outputter> + Send + Sync>;

#[derive(Default)]
pub struct OutputRegistry {
    factories: RwLock<BTreeMap<String, OutputterFactory>>,
}

impl std::fmt::Debug for OutputRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputRegistry")
            .field("formats", &self.outputters())
            .finish()
    }
}

impl OutputRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the five built-in formats.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register every [`BuiltinFormat`] whose name is still free.
    pub fn register_builtins(&self) {
        let mut factories = self.factories.write();
        for format in BuiltinFormat::ALL {
            factories.entry(format.name().to_string()).or_insert_with(|| {
                let factory: OutputterFactory = Arc::new(move || format.outputter());
                factory
            });
        }
    }

    /// Add a format under `name` unless one is already registered.
    ///
    /// Returns `Ok(true)` when inserted and `Ok(false)` when the name was
    /// taken (the existing factory is kept).
    ///
    /// # Errors
    ///
    /// [`OutputError::InvalidOutputter`] if `name` is empty or contains
    /// whitespace.
    pub fn register_output<F>(&self, name: impl Into<String>, factory: F) -> Result<bool>
    where
        F: Fn() -> Box<dyn Outputter> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(OutputError::InvalidOutputter(name));
        }

        let mut factories = self.factories.write();
        if factories.contains_key(&name) {
            trace!(target: "outputter", name = %name, "format already registered");
            return Ok(false);
        }
        debug!(target: "outputter", name = %name, "registered format");
        factories.insert(name, Arc::new(factory));
        Ok(true)
    }

    /// Names of all registered formats.
    #[must_use]
    pub fn outputters(&self) -> BTreeSet<String> {
        self.factories.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    /// Fresh instance of the format registered as `name`.
    ///
    /// # Errors
    ///
    /// [`OutputError::UnknownOutputter`] if nothing is registered under
    /// `name`.
    pub fn new_outputter(&self, name: &str) -> Result<Box<dyn Outputter>> {
        let factory = self
            .factories
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| OutputError::UnknownOutputter(name.to_string()))?;
        Ok(factory())
    }

    /// Fresh instance of the default (`tabular`) format.
    #[must_use]
    pub fn default_outputter(&self) -> Box<dyn Outputter> {
        self.new_outputter(DEFAULT_OUTPUTTER.name())
            .unwrap_or_else(|_| DEFAULT_OUTPUTTER.outputter())
    }
}
