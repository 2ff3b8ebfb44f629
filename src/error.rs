use thiserror::Error;

/// Errors raised while turning a payload into a rendered QR code.
///
/// Batch rendering never propagates these; each one is stored on the
/// [`BatchItem`](crate::batch::BatchItem) for the input that caused it.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The payload does not fit any QR version at the requested level.
    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("Unknown error correction level: {0}")]
    UnknownEcLevel(String),
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
    /// Margin, scale or width ask for an image side (in pixels) above
    /// [`MAX_IMAGE_SIDE`](crate::render::MAX_IMAGE_SIDE).
    #[error("Rendered image too large: {0} pixels per side")]
    TooLarge(u64),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised while loading a [`QrConfig`](crate::config::QrConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid QR config: {0}")]
    Json(#[from] serde_json::Error),
}
