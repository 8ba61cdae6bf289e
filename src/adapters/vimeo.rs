use crate::{
    adapters::{VideoAdapter, capture_video_id},
    error::{Error, Result},
    renderer::EmbedRenderer,
};
use regex::Regex;
use std::sync::Arc;

pub(crate) const NAME: &str = "vimeo";

/// Covers plain video URLs plus the player, channel, group and album
/// variants. The numeric id is always capture group 1.
pub(crate) const PATTERNS: &[&str] = &[
    r"(?i)https?://(?:www\.|player\.)?vimeo\.com/(?:channels/(?:\w+/)?|groups/[^/]+/videos/|album/\d+/video/|video/)?(\d+)",
];

/// Adapter for Vimeo URLs.
///
/// Vimeo only serves thumbnails through its remote API, so this adapter
/// reports no thumbnail support.
#[derive(Debug, Clone)]
pub struct VimeoAdapter {
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
    Ok(Arc::new(VimeoAdapter {
        url: url.to_owned(),
        video_id,
        renderer,
    }))
}

impl VideoAdapter for VimeoAdapter {
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
        let mut url = format!("https://player.vimeo.com/video/{}", self.video_id);
        if autoplay {
            url.push_str("?autoplay=1");
        }
        url
    }

    fn thumbnail_sizes(&self) -> &'static [&'static str] {
        &[]
    }

    fn thumbnail(&self, _size: &str) -> Result<String> {
        Err(Error::ThumbnailUnavailable { service: NAME })
    }

    fn renderer(&self) -> &dyn EmbedRenderer {
        self.renderer.as_ref()
    }
}
