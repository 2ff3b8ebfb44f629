use crate::color::parse_rgba;
use crate::config::QrConfig;
use crate::error::RenderError;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

/// Largest side, in pixels, a rendered image may have.
pub const MAX_IMAGE_SIDE: u32 = 1 << 14;

/// Turns a payload into a rendered QR code.
///
/// [`generate_batch`](crate::batch::generate_batch) only depends on this
/// trait, so any encoder (or a test double) can drive a batch.
pub trait Encoder {
    fn encode(&self, data: &str, config: &QrConfig) -> Result<RenderedQr, RenderError>;
}

/// The default encoder, backed by the `qrcode` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrEncoder;

impl Encoder for QrEncoder {
    fn encode(&self, data: &str, config: &QrConfig) -> Result<RenderedQr, RenderError> {
        let level = parse_ec_level(&config.error_correction_level)?;
        let dark = parse_color(&config.color.dark)?;
        let light = parse_color(&config.color.light)?;

        let code = QrCode::with_error_correction_level(data.as_bytes(), level)?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        let qr = RenderedQr {
            modules,
            width,
            margin: config.margin,
            dark,
            light,
            image: RgbaImage::new(0, 0),
        };
        let (scale, side) = qr.image_geometry(config)?;
        Ok(qr.rasterize(scale, side))
    }
}

/// Accepts `L|M|Q|H` or the spelled-out names, case-insensitively.
/// An empty level means Medium.
pub fn parse_ec_level(level: &str) -> Result<EcLevel, RenderError> {
    match level.to_ascii_lowercase().as_str() {
        "l" | "low" => Ok(EcLevel::L),
        "" | "m" | "medium" => Ok(EcLevel::M),
        "q" | "quartile" => Ok(EcLevel::Q),
        "h" | "high" => Ok(EcLevel::H),
        _ => Err(RenderError::UnknownEcLevel(level.to_string())),
    }
}

fn parse_color(hex: &str) -> Result<[u8; 4], RenderError> {
    parse_rgba(hex).ok_or_else(|| RenderError::InvalidColor(hex.to_string()))
}

/// An encoded QR symbol and its raster image.
#[derive(Clone, Debug)]
pub struct RenderedQr {
    modules: Vec<bool>,
    width: usize,
    margin: u32,
    dark: [u8; 4],
    light: [u8; 4],
    image: RgbaImage,
}

impl RenderedQr {
    /// Side length of the symbol in modules, without the quiet zone.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Whether the module at (x, y) is dark. Coordinates outside the symbol
    /// are light.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let size = self.width as i32;
        (0..size).contains(&x) && (0..size).contains(&y) && self.modules[(y * size + x) as usize]
    }

    /// Pixels per module and the image side length for `config`.
    ///
    /// Sides above [`MAX_IMAGE_SIDE`] are rejected before anything is
    /// allocated; margin, scale and width may hold any `u32`.
    fn image_geometry(&self, config: &QrConfig) -> Result<(u32, u32), RenderError> {
        let total = self.width as u64 + 2 * u64::from(config.margin);
        let scale = match config.width {
            Some(width) if u64::from(width) >= total => (u64::from(width) / total) as u32,
            _ => config.scale.max(1),
        };
        let side = total.saturating_mul(u64::from(scale));
        match u32::try_from(side) {
            Ok(side) if side <= MAX_IMAGE_SIDE => Ok((scale, side)),
            _ => Err(RenderError::TooLarge(side)),
        }
    }

    fn rasterize(mut self, scale: u32, side: u32) -> Self {
        let border = self.margin as i32;
        let mut img = RgbaImage::from_pixel(side, side, Rgba(self.light));

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let qr_x = (x / scale) as i32 - border;
            let qr_y = (y / scale) as i32 - border;
            if self.get_module(qr_x, qr_y) {
                *pixel = Rgba(self.dark);
            }
        }

        self.image = img;
        self
    }

    /// Encodes the raster image as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes: Vec<u8> = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// The PNG image as a `data:image/png;base64,...` URL.
    pub fn to_data_url(&self) -> Result<String, RenderError> {
        let encoded = STANDARD.encode(self.to_png()?);
        Ok(format!("data:image/png;base64,{encoded}"))
    }

    /*---- Utilities ----*/

    // Returns a string of SVG code for an image depicting this QR Code,
    // surrounded by the configured quiet zone and drawn in the configured colors.
    // The string always uses Unix newlines (\n), regardless of the platform.
    pub fn to_svg_string(&self) -> String {
        let border = self.margin as i32;
        let dimension = self.width as i32 + border * 2;
        let mut result = String::new();
        result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
        result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
        result += &format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
            dimension
        );
        result += &format!("\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n", svg_fill(self.light));
        result += "\t<path d=\"";
        let mut first = true;
        for y in 0..self.width as i32 {
            for x in 0..self.width as i32 {
                if self.get_module(x, y) {
                    if !first {
                        result += " ";
                    }
                    first = false;
                    result += &format!("M{},{}h1v1h-1z", x + border, y + border);
                }
            }
        }
        result += &format!("\" fill=\"{}\"/>\n", svg_fill(self.dark));
        result += "</svg>\n";
        result
    }
}

fn svg_fill([r, g, b, _]: [u8; 4]) -> String {
    format!("#{}", hex::encode([r, g, b]))
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorConfig;

    #[test]
    fn test_image_dimensions() {
        let qr = QrEncoder.encode("Hello, world!", &QrConfig::with_level("L")).unwrap();

        // "Hello, world!" at level L is a version 1 symbol: 21 modules,
        // plus a 4 module border on each side, at 4 pixels per module.
        assert_eq!(qr.width(), 21);
        assert_eq!(qr.image().dimensions(), (116, 116));
    }

    #[test]
    fn width_overrides_scale() {
        let config = QrConfig {
            width: Some(300),
            margin: 2,
            ..QrConfig::with_level("L")
        };
        let qr = QrEncoder.encode("Hello, world!", &config).unwrap();
        // 300 / (21 + 4) = 12 pixels per module.
        assert_eq!(qr.image().dimensions(), (300, 300));
    }

    #[test]
    fn uses_configured_colors() {
        let config = QrConfig {
            color: ColorConfig {
                dark: "#112233".to_string(),
                light: "#ffeeddff".to_string(),
            },
            ..QrConfig::default()
        };
        let qr = QrEncoder.encode("colors", &config).unwrap();
        // Top-left corner is quiet zone; the finder pattern starts at the border.
        assert_eq!(qr.image().get_pixel(0, 0), &Rgba([0xff, 0xee, 0xdd, 0xff]));
        assert_eq!(qr.image().get_pixel(16, 16), &Rgba([0x11, 0x22, 0x33, 0xff]));

        let svg = qr.to_svg_string();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("fill=\"#ffeedd\""));
        assert!(svg.contains("fill=\"#112233\""));
    }

    #[test]
    fn test_data_url() {
        let qr = QrEncoder.encode("https://example.com", &QrConfig::default()).unwrap();
        let url = qr.to_data_url().unwrap();
        let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
        let png = STANDARD.decode(encoded).unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_parse_ec_level() {
        assert_eq!(parse_ec_level("h").unwrap(), EcLevel::H);
        assert_eq!(parse_ec_level("Quartile").unwrap(), EcLevel::Q);
        assert_eq!(parse_ec_level("").unwrap(), EcLevel::M);
        assert!(matches!(parse_ec_level("Z"), Err(RenderError::UnknownEcLevel(l)) if l == "Z"));
    }

    #[test]
    fn rejects_bad_input() {
        let bad_color = QrConfig {
            color: ColorConfig {
                dark: "black".to_string(),
                ..ColorConfig::default()
            },
            ..QrConfig::default()
        };
        let err = QrEncoder.encode("x", &bad_color).unwrap_err();
        assert_eq!(err.to_string(), "Invalid hex color: black");

        let too_long = "a".repeat(8000);
        let err = QrEncoder.encode(&too_long, &QrConfig::with_level("H")).unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
    }

    #[test]
    fn oversized_geometry_is_an_error() {
        // Would overflow u32 when doubled.
        let config = QrConfig::from_json(r#"{"margin":3000000000}"#).unwrap();
        let err = QrEncoder.encode("a", &config).unwrap_err();
        assert!(matches!(err, RenderError::TooLarge(side) if side > u64::from(MAX_IMAGE_SIDE)));

        // (21 + 8) * 100000 pixels per side.
        let config = QrConfig::from_json(r#"{"scale":100000}"#).unwrap();
        let err = QrEncoder.encode("a", &config).unwrap_err();
        assert!(matches!(err, RenderError::TooLarge(2_900_000)));

        let config = QrConfig::from_json(r#"{"width":100000}"#).unwrap();
        assert!(matches!(
            QrEncoder.encode("a", &config),
            Err(RenderError::TooLarge(_))
        ));

        let config = QrConfig::from_json(r#"{"scale":4294967295,"margin":4294967295}"#).unwrap();
        assert!(matches!(
            QrEncoder.encode("a", &config),
            Err(RenderError::TooLarge(u64::MAX))
        ));
    }

    #[test]
    fn image_side_limit() {
        let qr = QrEncoder.encode("a", &QrConfig::with_level("L")).unwrap();
        assert_eq!(qr.width(), 21);

        // 21 + 2 * 11 = 43 modules per side.
        let at = |scale| QrConfig {
            margin: 11,
            scale,
            ..QrConfig::with_level("L")
        };
        assert_eq!(qr.image_geometry(&at(381)).unwrap(), (381, 16383));
        assert!(matches!(
            qr.image_geometry(&at(382)),
            Err(RenderError::TooLarge(16426))
        ));
    }
}
