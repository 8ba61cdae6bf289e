use crate::{
    adapters::{self, VideoAdapter},
    error::{Error, Result},
    renderer::{EmbedRenderer, IframeRenderer},
};
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// Factory bound to one service, producing that service's adapter variant
/// from the raw input, the pattern that matched it and the registry's
/// shared renderer.
pub type AdapterFactory =
    fn(&str, &Regex, Arc<dyn EmbedRenderer>) -> Result<Arc<dyn VideoAdapter>>;

#[derive(Debug, Clone)]
struct ServiceEntry {
    name: String,
    patterns: Vec<Regex>,
    factory: AdapterFactory,
}

/// Ordered table of recognizable services.
///
/// Each entry pairs a service name with its match patterns and its adapter
/// factory. Registration order is load-bearing: [`crate::AdapterBuilder`]
/// resolves against the table front to back and the first matching pattern
/// wins.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    services: Vec<ServiceEntry>,
    renderer: Arc<dyn EmbedRenderer>,
}

impl ServiceRegistry {
    /// Empty registry sharing `renderer` with every factory it will call.
    #[must_use]
    pub fn new(renderer: Arc<dyn EmbedRenderer>) -> Self {
        Self {
            services: Vec::new(),
            renderer,
        }
    }

    /// Registry with every feature-enabled built-in service registered, in
    /// fixed order, over an [`IframeRenderer`].
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new(Arc::new(IframeRenderer::new()));

        #[cfg(feature = "youtube")]
        registry.register_builtin(
            adapters::youtube::NAME,
            adapters::youtube::PATTERNS,
            adapters::youtube::build,
        );
        #[cfg(feature = "vimeo")]
        registry.register_builtin(
            adapters::vimeo::NAME,
            adapters::vimeo::PATTERNS,
            adapters::vimeo::build,
        );
        #[cfg(feature = "dailymotion")]
        registry.register_builtin(
            adapters::dailymotion::NAME,
            adapters::dailymotion::PATTERNS,
            adapters::dailymotion::build,
        );
        #[cfg(feature = "facebook")]
        registry.register_builtin(
            adapters::facebook::NAME,
            adapters::facebook::PATTERNS,
            adapters::facebook::build,
        );

        registry
    }

    fn register_builtin(&mut self, name: &str, patterns: &[&str], factory: AdapterFactory) {
        self.register(name, patterns, factory)
            .expect("failed to compile built-in pattern");
    }

    /// Register a service at the end of the table.
    ///
    /// Patterns are compiled here, once; they are matched with search
    /// semantics, so a pattern hits anywhere inside the input string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if any of `patterns` is not a valid regex.
    /// Nothing is registered in that case.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        patterns: &[&str],
        factory: AdapterFactory,
    ) -> Result<()> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let name = name.into();

        debug!(service = %name, patterns = patterns.len(), "registering service");

        self.services.push(ServiceEntry {
            name,
            patterns,
            factory,
        });
        Ok(())
    }

    /// Services and their patterns, in registration order.
    pub fn services(&self) -> impl Iterator<Item = (&str, &[Regex])> {
        self.services
            .iter()
            .map(|s| (s.name.as_str(), s.patterns.as_slice()))
    }

    /// Factory registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ServiceNotRegistered` if no service uses that name.
    pub fn factory(&self, name: &str) -> Result<AdapterFactory> {
        self.services
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.factory)
            .ok_or_else(|| Error::ServiceNotRegistered(name.to_owned()))
    }

    /// Shared renderer handed to every factory invocation.
    #[must_use]
    pub fn renderer(&self) -> Arc<dyn EmbedRenderer> {
        Arc::clone(&self.renderer)
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
