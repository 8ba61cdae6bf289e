use crate::{
    adapters::{VideoAdapter, capture_video_id},
    error::{Error, Result},
    renderer::EmbedRenderer,
};
use regex::Regex;
use std::sync::Arc;

pub(crate) const NAME: &str = "youtube";

/// Canonical/embed hosts first, then the short `youtu.be` form. Video ids
/// are always 11 characters from the `[A-Za-z0-9_-]` alphabet, which keeps
/// the bare `youtube.com/` homepage from matching.
pub(crate) const PATTERNS: &[&str] = &[
    r"(?i)youtube(?:-nocookie)?\.com/(?:(?:v|e(?:mbed)?)/|\S*?[?&]v=)([A-Za-z0-9_-]{11})",
    r"(?i)youtu\.be/([A-Za-z0-9_-]{11})",
];

const THUMBNAIL_SIZES: &[&str] = &[
    "maxresdefault",
    "sddefault",
    "hqdefault",
    "mqdefault",
    "default",
];

/// Adapter for YouTube watch, short and embed URLs.
#[derive(Debug, Clone)]
pub struct YoutubeAdapter {
    url: String,
    video_id: String,
    renderer: Arc<dyn EmbedRenderer>,
}

pub(crate) fn build(
    url: &str,
    pattern: &Regex,
    renderer: Arc<dyn EmbedRenderer>,
) -> Result<Arc<dyn VideoAdapter>> {
    let video_id = capture_video_id(pattern, url)?;
    Ok(Arc::new(YoutubeAdapter {
        url: url.to_owned(),
        video_id,
        renderer,
    }))
}

impl VideoAdapter for YoutubeAdapter {
    fn service_name(&self) -> &'static str {
        NAME
    }

    fn raw_url(&self) -> &str {
        &self.url
    }

    fn video_id(&self) -> &str {
        &self.video_id
    }

    fn embed_url(&self, autoplay: bool) -> String {
        let mut url = format!("https://www.youtube.com/embed/{}", self.video_id);
        if autoplay {
            url.push_str("?autoplay=1");
        }
        url
    }

    fn thumbnail_sizes(&self) -> &'static [&'static str] {
        THUMBNAIL_SIZES
    }

    fn thumbnail(&self, size: &str) -> Result<String> {
        if !THUMBNAIL_SIZES.contains(&size) {
            return Err(Error::UnknownThumbnailSize(size.to_owned()));
        }
        Ok(format!(
            "https://img.youtube.com/vi/{}/{size}.jpg",
            self.video_id
        ))
    }

    fn renderer(&self) -> &dyn EmbedRenderer {
        self.renderer.as_ref()
    }
}
