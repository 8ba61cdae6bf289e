//! Detect which video-hosting service a URL or embed snippet belongs to
//! and build a service-specific adapter for it.
//!
//! Matching is table-driven: a [`ServiceRegistry`] holds, per service, an
//! ordered list of match patterns and an adapter factory. The
//! [`AdapterBuilder`] walks the table in registration order, the first
//! pattern to match wins, and the winning service's factory builds the
//! adapter. Each builder memoizes results per exact input string, so the
//! same string never resolves twice.
//!
//! ```
//! use video_url_parser::AdapterBuilder;
//!
//! let mut builder = AdapterBuilder::new();
//! let video = builder.build_from_str("https://www.youtube.com/watch?v=mWRsgZuwf_8")?;
//!
//! assert_eq!(video.service_name(), "youtube");
//! assert_eq!(video.video_id(), "mWRsgZuwf_8");
//! assert_eq!(
//!     video.embed_url(false),
//!     "https://www.youtube.com/embed/mWRsgZuwf_8"
//! );
//! # Ok::<(), video_url_parser::Error>(())
//! ```
//!
//! Adapters never touch the network: every embed and thumbnail URL is
//! built from the extracted video id by string formatting. Unsupported
//! inputs come back as [`Error::ServiceNotAvailable`].

pub mod adapters;
pub mod builder;
pub mod error;
pub mod registry;
pub mod renderer;

pub use adapters::VideoAdapter;
pub use builder::AdapterBuilder;
pub use error::{Error, Result};
pub use registry::{AdapterFactory, ServiceRegistry};
pub use renderer::{EmbedRenderer, IframeRenderer};
