use crate::{
    adapters::VideoAdapter,
    error::{Error, Result},
    registry::ServiceRegistry,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Memoizing resolver from a URL-like input to a service adapter.
///
/// Resolution walks the registry in registration order, patterns in
/// declared order, and the first match wins; that service's factory then
/// builds the adapter. Results are cached per exact input string, so a
/// given string is matched and constructed at most once per builder.
///
/// The cache belongs to one builder and dies with it. Build calls take
/// `&mut self`, which also rules out two resolutions for the same input
/// racing each other; callers that share a builder across threads put it
/// behind a `Mutex`.
#[derive(Debug, Default)]
pub struct AdapterBuilder {
    registry: ServiceRegistry,
    parsed: HashMap<String, Arc<dyn VideoAdapter>>,
}

impl AdapterBuilder {
    /// Builder over the default registry with all built-in services.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ServiceRegistry::default())
    }

    /// Builder over a caller-assembled registry.
    #[must_use]
    pub fn with_registry(registry: ServiceRegistry) -> Self {
        Self {
            registry,
            parsed: HashMap::new(),
        }
    }

    /// Resolve `input` to an adapter for the first service whose pattern
    /// matches it.
    ///
    /// Repeated calls with an identical string return the same instance
    /// (`Arc::ptr_eq` holds). Failures are not remembered: the same input
    /// is re-resolved from scratch on the next call, so a registry swapped
    /// in via [`Self::set_registry`] can change the outcome.
    ///
    /// # Errors
    ///
    /// - `Error::ServiceNotAvailable` when no registered pattern matches;
    ///   carries the input.
    /// - Factory errors propagate unchanged.
    pub fn build_from_str(&mut self, input: &str) -> Result<Arc<dyn VideoAdapter>> {
        if let Some(adapter) = self.parsed.get(input) {
            debug!(url = %input, "returning memoized adapter");
            return Ok(Arc::clone(adapter));
        }

        let adapter = self.resolve(input)?;
        self.parsed.insert(input.to_owned(), Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Stringify `url` and delegate to [`Self::build_from_str`]. Only the
    /// string form is cached; two `Url` values with the same serialization
    /// share one entry.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build_from_str`].
    pub fn build_from_url(&mut self, url: &Url) -> Result<Arc<dyn VideoAdapter>> {
        self.build_from_str(url.as_str())
    }

    fn resolve(&self, input: &str) -> Result<Arc<dyn VideoAdapter>> {
        for (service, patterns) in self.registry.services() {
            for pattern in patterns {
                if pattern.is_match(input) {
                    info!(service = %service, url = %input, "matched service");
                    let factory = self.registry.factory(service)?;
                    return factory(input, pattern, self.registry.renderer());
                }
            }
        }

        debug!(url = %input, "no service matched");
        Err(Error::ServiceNotAvailable(input.to_owned()))
    }

    /// The registry resolutions currently run against.
    #[must_use]
    pub const fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Swap the registry. Already-memoized adapters are kept: the cache is
    /// keyed purely by input string, independent of which registry produced
    /// each entry.
    pub fn set_registry(&mut self, registry: ServiceRegistry) {
        self.registry = registry;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{EmbedRenderer, IframeRenderer};
    use regex::Regex;

    #[derive(Debug)]
    struct FakeAdapter {
        service: &'static str,
        url: String,
        renderer: Arc<dyn EmbedRenderer>,
    }

    impl VideoAdapter for FakeAdapter {
        fn service_name(&self) -> &'static str {
            self.service
        }

        fn raw_url(&self) -> &str {
            &self.url
        }

        fn video_id(&self) -> &str {
            ""
        }

        fn embed_url(&self, _autoplay: bool) -> String {
            String::new()
        }

        fn thumbnail_sizes(&self) -> &'static [&'static str] {
            &[]
        }

        fn thumbnail(&self, _size: &str) -> Result<String> {
            Err(Error::ThumbnailUnavailable {
                service: self.service,
            })
        }

        fn renderer(&self) -> &dyn EmbedRenderer {
            self.renderer.as_ref()
        }
    }

    fn broad_factory(
        url: &str,
        _pattern: &Regex,
        renderer: Arc<dyn EmbedRenderer>,
    ) -> Result<Arc<dyn VideoAdapter>> {
        Ok(Arc::new(FakeAdapter {
            service: "broad",
            url: url.to_owned(),
            renderer,
        }))
    }

    fn narrow_factory(
        url: &str,
        _pattern: &Regex,
        renderer: Arc<dyn EmbedRenderer>,
    ) -> Result<Arc<dyn VideoAdapter>> {
        Ok(Arc::new(FakeAdapter {
            service: "narrow",
            url: url.to_owned(),
            renderer,
        }))
    }

    fn empty_registry() -> ServiceRegistry {
        ServiceRegistry::new(Arc::new(IframeRenderer::new()))
    }

    #[test]
    fn first_registered_service_wins_ties() {
        let mut registry = empty_registry();
        registry
            .register("broad", &["video"], broad_factory)
            .expect("valid pattern");
        registry
            .register("narrow", &[r"video/\d+"], narrow_factory)
            .expect("valid pattern");

        let mut builder = AdapterBuilder::with_registry(registry);
        let adapter = builder
            .build_from_str("https://example.com/video/123")
            .expect("both patterns match");
        assert_eq!(adapter.service_name(), "broad");
    }

    #[test]
    fn identical_input_returns_the_same_instance() {
        let mut registry = empty_registry();
        registry
            .register("broad", &["video"], broad_factory)
            .expect("valid pattern");

        let mut builder = AdapterBuilder::with_registry(registry);
        let first = builder
            .build_from_str("https://example.com/video/1")
            .expect("matches");
        let other = builder
            .build_from_str("https://example.com/video/2")
            .expect("matches");
        let second = builder
            .build_from_str("https://example.com/video/1")
            .expect("matches");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn failed_match_is_not_cached() {
        let mut builder = AdapterBuilder::with_registry(empty_registry());
        let input = "https://example.com/video/1";

        let err = builder.build_from_str(input).expect_err("nothing registered");
        assert!(matches!(err, Error::ServiceNotAvailable(url) if url == input));

        // A registry swap rescues the previously failing input.
        let mut registry = empty_registry();
        registry
            .register("broad", &["video"], broad_factory)
            .expect("valid pattern");
        builder.set_registry(registry);

        let adapter = builder.build_from_str(input).expect("matches now");
        assert_eq!(adapter.service_name(), "broad");
    }

    #[test]
    fn registry_swap_keeps_the_cache() {
        let mut registry = empty_registry();
        registry
            .register("broad", &["video"], broad_factory)
            .expect("valid pattern");

        let mut builder = AdapterBuilder::with_registry(registry);
        let input = "https://example.com/video/1";
        let before = builder.build_from_str(input).expect("matches");

        builder.set_registry(empty_registry());
        assert_eq!(builder.registry().services().count(), 0);

        let after = builder.build_from_str(input).expect("still memoized");
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn build_from_url_keys_by_string_form() {
        let mut registry = empty_registry();
        registry
            .register("broad", &["video"], broad_factory)
            .expect("valid pattern");

        let mut builder = AdapterBuilder::with_registry(registry);
        let url = Url::parse("https://example.com/video/1").expect("valid url");

        let from_url = builder.build_from_url(&url).expect("matches");
        let from_str = builder.build_from_str(url.as_str()).expect("matches");
        assert!(Arc::ptr_eq(&from_url, &from_str));
    }
}
