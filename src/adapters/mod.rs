#[cfg(feature = "dailymotion")]
pub(crate) mod dailymotion;
#[cfg(feature = "facebook")]
pub(crate) mod facebook;
#[cfg(feature = "vimeo")]
pub(crate) mod vimeo;
#[cfg(feature = "youtube")]
pub(crate) mod youtube;

use crate::{
    error::{Error, Result},
    renderer::EmbedRenderer,
};
use regex::Regex;
use std::fmt::Debug;

#[cfg(feature = "dailymotion")]
pub use dailymotion::DailymotionAdapter;
#[cfg(feature = "facebook")]
pub use facebook::FacebookAdapter;
#[cfg(feature = "vimeo")]
pub use vimeo::VimeoAdapter;
#[cfg(feature = "youtube")]
pub use youtube::YoutubeAdapter;

/// Uniform handle over a recognized video URL, one implementation per
/// supported service.
///
/// Implementors should:
/// - Keep the exact input string they were built from (`raw_url`).
/// - Build every embed and thumbnail URL by string formatting; adapters
///   never touch the network.
pub trait VideoAdapter: Debug + Send + Sync {
    /// Short name of the originating service, used for logging etc.
    fn service_name(&self) -> &'static str;

    /// The exact string this adapter was built from.
    fn raw_url(&self) -> &str;

    /// Service-side identifier of the video.
    fn video_id(&self) -> &str;

    /// URL of the service's embeddable player for this video.
    fn embed_url(&self, autoplay: bool) -> String;

    fn is_embeddable(&self) -> bool {
        true
    }

    /// Whether a thumbnail URL can be built offline for this service.
    fn has_thumbnail(&self) -> bool {
        !self.thumbnail_sizes().is_empty()
    }

    /// Size keys accepted by [`Self::thumbnail`], largest first.
    fn thumbnail_sizes(&self) -> &'static [&'static str];

    /// Thumbnail URL for one of the sizes in [`Self::thumbnail_sizes`].
    ///
    /// # Errors
    ///
    /// - `Error::ThumbnailUnavailable` when the service offers none.
    /// - `Error::UnknownThumbnailSize` for a size key the service does not
    ///   offer.
    fn thumbnail(&self, size: &str) -> Result<String>;

    /// Thumbnail URL in the largest size the service offers.
    ///
    /// # Errors
    ///
    /// `Error::ThumbnailUnavailable` when the service offers none.
    fn largest_thumbnail(&self) -> Result<String> {
        self.thumbnail_sizes().first().map_or(
            Err(Error::ThumbnailUnavailable {
                service: self.service_name(),
            }),
            |size| self.thumbnail(size),
        )
    }

    /// Thumbnail URL in the smallest size the service offers.
    ///
    /// # Errors
    ///
    /// `Error::ThumbnailUnavailable` when the service offers none.
    fn smallest_thumbnail(&self) -> Result<String> {
        self.thumbnail_sizes().last().map_or(
            Err(Error::ThumbnailUnavailable {
                service: self.service_name(),
            }),
            |size| self.thumbnail(size),
        )
    }

    /// The renderer this adapter was built with.
    fn renderer(&self) -> &dyn EmbedRenderer;

    /// Embeddable markup for this video, produced by [`Self::renderer`].
    fn embed_code(&self, width: u32, height: u32, autoplay: bool) -> String {
        self.renderer()
            .render(&self.embed_url(autoplay), width, height)
    }
}

/// First capture group of `pattern` applied to `url`.
///
/// Every built-in pattern captures the video id in group 1, so a factory
/// handed the pattern that already matched can only fail here if the
/// pattern carries no capture group at all.
pub(crate) fn capture_video_id(pattern: &Regex, url: &str) -> Result<String> {
    pattern
        .captures(url)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_owned()))
        .ok_or_else(|| Error::VideoIdNotFound(url.to_owned()))
}
