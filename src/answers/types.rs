use serde::{Deserialize, Serialize};

use super::error::ResolveError;

/// Spoken when the encyclopedia has nothing usable for a keyword
pub const FALLBACK_MESSAGE: &str = "Hmm, I don't know that yet. Let's ask again later!";

/// Result of resolving one question
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keyword found in the builtin answer table
    LocalHit { explanation: String, keyword: String },
    /// Keyword looked up remotely and the summary had a usable extract
    RemoteHit {
        explanation: String,
        image_url: Option<String>,
    },
    /// Remote lookup worked but carried no usable extract
    RemoteMiss { fallback_message: String },
    /// Network, status, parse or image error, surfaced as its text
    Failure { error_message: String },
}

impl Outcome {
    /// Text to speak for this outcome. Failures speak nothing.
    pub fn spoken_text(&self) -> Option<&str> {
        match self {
            Outcome::LocalHit { explanation, .. } | Outcome::RemoteHit { explanation, .. } => {
                Some(explanation)
            }
            Outcome::RemoteMiss { fallback_message } => Some(fallback_message),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failure { .. })
    }
}

/// Image reference inside a summary response
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ImageRef {
    pub source: String,
}

/// Fields consumed from one page summary response. Everything else is ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RemoteSummary {
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ImageRef>,
    #[serde(default, rename = "originalimage")]
    pub original_image: Option<ImageRef>,
}

/// Encoded formats passed through to the display layer as-is
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    Jpeg,
    Gif,
    WebP,
    Svg,
}

impl ImageFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            ImageFormat::Svg => "svg",
        }
    }
}

/// An image ready for display
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DecodedImage {
    /// PNG decoded to 8-bit RGBA
    Rgba {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
    /// Recognised format left for the display layer to decode
    Encoded { format: ImageFormat, bytes: Vec<u8> },
}

/// What the explanation area shows
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnswerImage {
    Fetched(DecodedImage),
    Placeholder,
}

/// Outcome plus the image that goes with it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub image: AnswerImage,
    /// Best-effort image failure on a local hit. Does not affect the outcome.
    pub image_error: Option<String>,
}

impl Resolution {
    pub fn failure(err: &ResolveError) -> Self {
        Self {
            outcome: Outcome::Failure {
                error_message: err.to_string(),
            },
            image: AnswerImage::Placeholder,
            image_error: None,
        }
    }

    /// Message for the error text area, if any
    pub fn error_text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failure { error_message } => Some(error_message),
            _ => self.image_error.as_deref(),
        }
    }
}

/// Resolver and front-end configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Page summary endpoint; the keyword is appended as the last path segment
    pub summary_endpoint: String,
    /// Fetch an image for builtin answers too
    pub fetch_local_images: bool,
    /// Per-request timeout. `None` leaves the HTTP stack defaults.
    pub request_timeout_secs: Option<u64>,
    /// Pause between autoplay items
    pub autoplay_delay_secs: u64,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            summary_endpoint: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            fetch_local_images: true,
            request_timeout_secs: None,
            autoplay_delay_secs: crate::autoplay::DEFAULT_DELAY.as_secs(),
            user_agent: format!("whatis/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
