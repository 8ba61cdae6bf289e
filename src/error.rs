use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(r#"the url "{0}" could not be parsed by any of the services available"#)]
    ServiceNotAvailable(String),

    #[error(r#"no service is registered under the name "{0}""#)]
    ServiceNotRegistered(String),

    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(r#"could not extract a video id from "{0}""#)]
    VideoIdNotFound(String),

    #[error("{service} does not expose a thumbnail without a remote api call")]
    ThumbnailUnavailable { service: &'static str },

    #[error(r#"unknown thumbnail size "{0}""#)]
    UnknownThumbnailSize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
