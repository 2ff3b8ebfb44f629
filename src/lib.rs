//! # qirust-utils
//!
//! Helpers that sit around a QR code generator: ready-made payload templates,
//! input validation, scan-quality heuristics and batch rendering.
//!
//! `qirust-utils` does not build QR symbols itself. Encoding goes through the
//! [`render::Encoder`] trait, with [`render::QrEncoder`] (backed by the
//! `qrcode` crate) as the default. Everything else is plain functions over
//! strings and a [`config::QrConfig`].
//!
//! ## Features
//!
//! - Template catalog (menu link, business card, social profile, event, WiFi).
//! - Validate URLs, email addresses and phone numbers.
//! - Detect the payload type and estimate complexity and scan time.
//! - Check dark/light color contrast and suggest optimizations.
//! - Render batches of payloads to PNG data URLs or SVG, one result per input.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qirust-utils = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Analyze a payload before rendering it:
//!
//! ```rust
//! use qirust_utils::analysis::{export_analytics, DataType, QrData};
//! use qirust_utils::config::QrConfig;
//!
//! let report = export_analytics(&QrData {
//!     data: "https://example.com".to_string(),
//!     config: QrConfig::with_level("M"),
//! });
//! assert_eq!(report.data_type, DataType::Url);
//! assert!(report.recommendations.is_empty());
//! ```
//!
//! Render several payloads at once:
//!
//! ```rust
//! use qirust_utils::batch::generate_batch_default;
//! use qirust_utils::config::QrConfig;
//!
//! let items = generate_batch_default(&["Hello", "World"], &QrConfig::default());
//! for item in &items {
//!     assert!(item.success());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`templates`]: Template catalog and applying a template to a generator.
//! - [`validate`]: URL, email and phone validators.
//! - [`analysis`]: Data type, complexity, scan time, suggestions and reports.
//! - [`color`]: Hex colors and contrast ratio.
//! - [`config`]: Render and analysis settings.
//! - [`render`]: The encoder trait and the default QR renderer.
//! - [`batch`]: Batch rendering with per-item results.

pub mod analysis;
pub mod batch;
pub mod color;
pub mod config;
pub mod error;
pub mod render;
pub mod templates;
pub mod validate;

pub use error::{ConfigError, RenderError};
