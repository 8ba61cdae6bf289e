use crate::{
    adapters::{VideoAdapter, capture_video_id},
    error::{Error, Result},
    renderer::EmbedRenderer,
};
use regex::Regex;
use std::sync::Arc;

pub(crate) const NAME: &str = "facebook";

pub(crate) const PATTERNS: &[&str] = &[
    r"(?i)facebook\.com/(?:[A-Za-z0-9.]+/)?videos/(?:[^/\s]+/)?(\d+)",
    r"(?i)facebook\.com/video\.php\?(?:\S*?&)?v=(\d+)",
];

const THUMBNAIL_SIZES: &[&str] = &["default"];

/// Adapter for Facebook page video URLs.
///
/// The embed player takes no autoplay flag in its URL, so the flag is
/// accepted and ignored.
#[derive(Debug, Clone)]
pub struct FacebookAdapter {
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
    Ok(Arc::new(FacebookAdapter {
        url: url.to_owned(),
        video_id,
        renderer,
    }))
}

impl VideoAdapter for FacebookAdapter {
    fn service_name(&self) -> &'static str {
        NAME
    }

    fn raw_url(&self) -> &str {
        &self.url
    }

    fn video_id(&self) -> &str {
        &self.video_id
    }

    fn embed_url(&self, _autoplay: bool) -> String {
        format!(
            "https://www.facebook.com/video/embed?video_id={}",
            self.video_id
        )
    }

    fn thumbnail_sizes(&self) -> &'static [&'static str] {
        THUMBNAIL_SIZES
    }

    fn thumbnail(&self, size: &str) -> Result<String> {
        if !THUMBNAIL_SIZES.contains(&size) {
            return Err(Error::UnknownThumbnailSize(size.to_owned()));
        }
        Ok(format!(
            "https://graph.facebook.com/{}/picture",
            self.video_id
        ))
    }

    fn renderer(&self) -> &dyn EmbedRenderer {
        self.renderer.as_ref()
    }
}
