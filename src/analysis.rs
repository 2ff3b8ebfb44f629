//! Heuristic estimates about a QR payload and the report that bundles them.
//!
//! Nothing here touches the encoder; every function is total over its input.
//! Lengths are counted in UTF-16 code units, the same as JavaScript's
//! `String.length`, so thresholds agree with web front ends.

use std::fmt;

use serde::Serialize;

use crate::color::{contrast, Rgb};
use crate::config::QrConfig;

/// Minimum contrast ratio below which scanning is considered unreliable.
pub const MIN_CONTRAST: f64 = 4.5;

const LONG_DATA_WARNING: &str =
    "Long data may create complex QR codes. Consider using a URL shortener.";
const HIGH_EC_INFO: &str = "Consider reducing error correction level for shorter data.";
const LOW_CONTRAST_WARNING: &str = "Low color contrast may affect scanning reliability.";

/// What a payload looks like, judged by its prefix.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum DataType {
    #[serde(rename = "URL")]
    Url,
    Email,
    Phone,
    #[serde(rename = "SMS")]
    Sms,
    WiFi,
    Contact,
    Event,
    Location,
    Text,
}

impl DataType {
    pub fn label(self) -> &'static str {
        match self {
            DataType::Url => "URL",
            DataType::Email => "Email",
            DataType::Phone => "Phone",
            DataType::Sms => "SMS",
            DataType::WiFi => "WiFi",
            DataType::Contact => "Contact",
            DataType::Event => "Event",
            DataType::Location => "Location",
            DataType::Text => "Text",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rough size class of a payload.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
    #[serde(rename = "Very Complex")]
    VeryComplex,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
            Complexity::VeryComplex => "Very Complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Warning,
    Info,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
}

impl Suggestion {
    fn warning(message: &str) -> Self {
        Self {
            kind: SuggestionKind::Warning,
            message: message.to_string(),
        }
    }

    fn info(message: &str) -> Self {
        Self {
            kind: SuggestionKind::Info,
            message: message.to_string(),
        }
    }
}

/// A payload together with the config it will be rendered with.
#[derive(Clone, Debug, Default)]
pub struct QrData {
    pub data: String,
    pub config: QrConfig,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub data_type: DataType,
    pub complexity: Complexity,
    /// Seconds, rounded to one decimal place.
    pub estimated_scan_time: f64,
    pub recommendations: Vec<Suggestion>,
}

impl AnalyticsReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn js_len(data: &str) -> usize {
    data.encode_utf16().count()
}

/// Classifies `data` by prefix. Case-sensitive; leading whitespace is not
/// skipped, so `" https://x"` is plain text.
pub fn detect_data_type(data: &str) -> DataType {
    const PREFIXES: [(&str, DataType); 9] = [
        ("http://", DataType::Url),
        ("https://", DataType::Url),
        ("mailto:", DataType::Email),
        ("tel:", DataType::Phone),
        ("sms:", DataType::Sms),
        ("WIFI:", DataType::WiFi),
        ("BEGIN:VCARD", DataType::Contact),
        ("BEGIN:VEVENT", DataType::Event),
        ("geo:", DataType::Location),
    ];
    PREFIXES
        .iter()
        .find(|(prefix, _)| data.starts_with(prefix))
        .map_or(DataType::Text, |&(_, data_type)| data_type)
}

pub fn estimate_complexity(data: &str) -> Complexity {
    match js_len(data) {
        0..=25 => Complexity::Simple,
        26..=100 => Complexity::Moderate,
        101..=300 => Complexity::Complex,
        _ => Complexity::VeryComplex,
    }
}

/// Multiplier applied to scan time for each error correction level.
/// Unrecognized or missing levels count as Medium.
fn ec_factor(level: &str) -> f64 {
    match level {
        "L" => 1.0,
        "M" => 1.1,
        "Q" => 1.2,
        "H" => 1.3,
        _ => 1.1,
    }
}

/// Estimated seconds a phone camera needs to lock onto the code.
///
/// Rounds half up to one decimal place.
pub fn estimate_scan_time(data: &str, config: &QrConfig) -> f64 {
    let base = 0.5 + js_len(data) as f64 / 100.0;
    let scaled = base * ec_factor(&config.error_correction_level) * 10.0;
    (scaled + 0.5).floor() / 10.0
}

/// Hints for making the code easier to scan, in a fixed order: data length,
/// error correction, then color contrast.
///
/// The contrast rule is skipped when either color is not a six-digit hex
/// value.
pub fn suggest_optimizations(data: &str, config: &QrConfig) -> Vec<Suggestion> {
    let len = js_len(data);
    let mut suggestions = Vec::new();

    if len > 500 {
        suggestions.push(Suggestion::warning(LONG_DATA_WARNING));
    }

    if len > 200 && config.error_correction_level == "H" {
        suggestions.push(Suggestion::info(HIGH_EC_INFO));
    }

    if let (Some(dark), Some(light)) = (
        Rgb::from_hex(&config.color.dark),
        Rgb::from_hex(&config.color.light),
    ) {
        if contrast(dark, light) < MIN_CONTRAST {
            suggestions.push(Suggestion::warning(LOW_CONTRAST_WARNING));
        }
    }

    suggestions
}

pub fn export_analytics(qr_data: &QrData) -> AnalyticsReport {
    AnalyticsReport {
        data_type: detect_data_type(&qr_data.data),
        complexity: estimate_complexity(&qr_data.data),
        estimated_scan_time: estimate_scan_time(&qr_data.data, &qr_data.config),
        recommendations: suggest_optimizations(&qr_data.data, &qr_data.config),
    }
}
