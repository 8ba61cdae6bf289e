use std::fmt::Debug;

/// Turns an embed URL into embeddable markup.
///
/// One renderer instance is shared by a whole registry: every adapter
/// factory receives the same handle, so adapters built from the same
/// registry render markup consistently.
pub trait EmbedRenderer: Debug + Send + Sync {
    fn render(&self, embed_url: &str, width: u32, height: u32) -> String;
}

/// Default renderer producing a bare `<iframe>` tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct IframeRenderer;

impl IframeRenderer {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmbedRenderer for IframeRenderer {
    fn render(&self, embed_url: &str, width: u32, height: u32) -> String {
        format!(
            r#"<iframe width="{width}" height="{height}" src="{embed_url}" frameborder="0" allowfullscreen></iframe>"#
        )
    }
}
