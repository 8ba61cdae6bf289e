use crate::{
    adapters::{VideoAdapter, capture_video_id},
    error::{Error, Result},
    renderer::EmbedRenderer,
};
use regex::Regex;
use std::sync::Arc;

pub(crate) const NAME: &str = "dailymotion";

/// Video ids stop at the first `_`; everything after it is a slug.
pub(crate) const PATTERNS: &[&str] = &[
    r"(?i)dailymotion\.com/(?:video|hub)/([A-Za-z0-9]+)",
    r"(?i)dai\.ly/([A-Za-z0-9]+)",
];

const THUMBNAIL_SIZES: &[&str] = &["default"];

/// Adapter for Dailymotion video and short `dai.ly` URLs.
#[derive(Debug, Clone)]
pub struct DailymotionAdapter {
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
    Ok(Arc::new(DailymotionAdapter {
        url: url.to_owned(),
        video_id,
        renderer,
    }))
}

impl VideoAdapter for DailymotionAdapter {
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
        let mut url = format!("https://www.dailymotion.com/embed/video/{}", self.video_id);
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
            "https://www.dailymotion.com/thumbnail/video/{}",
            self.video_id
        ))
    }

    fn renderer(&self) -> &dyn EmbedRenderer {
        self.renderer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::IframeRenderer;

    fn adapter(url: &str) -> Arc<dyn VideoAdapter> {
        let patterns = PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("valid pattern"))
            .collect::<Vec<_>>();
        let pattern = patterns
            .iter()
            .find(|p| p.is_match(url))
            .expect("a pattern should match");
        build(url, pattern, Arc::new(IframeRenderer::new())).expect("factory should succeed")
    }

    #[test]
    fn id_stops_at_the_slug() {
        let video = adapter(
            "http://www.dailymotion.com/video/x332a71_que-categoria-jogador-lucas-lima-faz-golaco-em-treino-do-santos_sport",
        );
        assert_eq!(video.service_name(), NAME);
        assert_eq!(video.video_id(), "x332a71");
    }

    #[test]
    fn extracts_id_from_short_url() {
        let video = adapter("https://dai.ly/x332a71");
        assert_eq!(video.video_id(), "x332a71");
    }

    #[test]
    fn embed_and_thumbnail_urls() {
        let video = adapter("https://www.dailymotion.com/video/x332a71_some-title_sport");
        assert_eq!(
            video.embed_url(true),
            "https://www.dailymotion.com/embed/video/x332a71?autoplay=1"
        );
        assert_eq!(
            video.thumbnail("default").expect("known size"),
            "https://www.dailymotion.com/thumbnail/video/x332a71"
        );
        assert!(matches!(
            video.thumbnail("large"),
            Err(Error::UnknownThumbnailSize(_))
        ));
    }
}
