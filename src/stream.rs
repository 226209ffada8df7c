//! Live-stream source selection.
//!
//! Users paste either a direct media URL, an HLS manifest URL, or a YouTube
//! link/video id. Validation failures here are the only user-visible errors
//! in the widget; everything else degrades silently to demo data.

use regex::Regex;
use std::sync::LazyLock;

/// YouTube video ids are 11 characters from this alphabet, found after `v=`
/// or a path separator in share URLs.
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("Failed to compile YouTube id pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("Please paste a stream URL")]
    EmptyUrl,

    #[error("'{0}' is not a valid YouTube URL or video id")]
    InvalidYouTubeId(String),

    #[error("HLS stream detected but the player does not support HLS")]
    HlsUnsupported,
}

/// A classified live-stream source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSource {
    /// Direct media URL playable by the video surface itself.
    Direct(String),
    /// HLS manifest, playable only with streaming support.
    Hls(String),
}

impl StreamSource {
    /// Classify a user-supplied stream URL.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::EmptyUrl` for empty or whitespace-only input.
    pub fn classify(url: &str) -> Result<Self, StreamError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StreamError::EmptyUrl);
        }
        if url.ends_with(".m3u8") {
            return Ok(Self::Hls(url.to_string()));
        }
        Ok(Self::Direct(url.to_string()))
    }
}

/// Extract an 11-character video id from a YouTube URL, or validate a bare id.
///
/// # Errors
///
/// Returns `StreamError::InvalidYouTubeId` when no plausible id is present.
pub fn extract_youtube_id(input: &str) -> Result<String, StreamError> {
    let input = input.trim();
    let id = if input.contains("youtube.com") || input.contains("youtu.be") {
        YOUTUBE_ID
            .captures(input)
            .and_then(|c| c.get(1))
            .map_or(input, |m| m.as_str())
    } else {
        input
    };

    if is_video_id(id) {
        Ok(id.to_string())
    } else {
        Err(StreamError::InvalidYouTubeId(input.to_string()))
    }
}

fn is_video_id(id: &str) -> bool {
    id.len() == 11
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
