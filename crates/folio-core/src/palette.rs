//! HSL palette generation.
//!
//! A base color is converted to HSL, varied in lightness and hue, and each
//! variant is converted back to `#rrggbb`. The palette order is fixed:
//!
//! ```text
//! darker  dark  base  light  lighter  complementary  analogous+30  analogous-30
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Lightness never drops below this when darkening
const MIN_LIGHTNESS: f64 = 0.1;
/// Lightness never rises above this when lightening
const MAX_LIGHTNESS: f64 = 0.9;

fn hex_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex pattern is a valid regex"))
}

/// True if `s` is exactly `#` followed by six hex digits (either case)
pub fn is_hex_color(s: &str) -> bool {
    hex_pattern().is_match(s)
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value (upper byte ignored)
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }

    /// Uppercase `#RRGGBB`, as shown on swatches
    pub fn to_hex_upper(&self) -> String {
        format!("#{}", hex::encode_upper([self.r, self.g, self.b]))
    }

    /// Largest per-channel difference to `other`
    pub fn max_channel_delta(&self, other: &Rgb) -> u8 {
        [
            self.r.abs_diff(other.r),
            self.g.abs_diff(other.g),
            self.b.abs_diff(other.b),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h / 6.0 * 360.0,
            s,
            l,
        }
    }
}

impl FromStr for Rgb {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_hex_color(s) {
            return Err(FolioError::MalformedColor(s.to_string()));
        }
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(&s[1..], &mut bytes)
            .map_err(|_| FolioError::MalformedColor(s.to_string()))?;
        Ok(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Rotate the hue, wrapping into `[0, 360)`
    pub fn rotate(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let h = self.h / 360.0;
        let a = self.s * self.l.min(1.0 - self.l);
        let channel = |n: f64| -> u8 {
            let k = (n + h * 12.0).rem_euclid(12.0);
            let color = self.l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * color).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(channel(0.0), channel(8.0), channel(4.0))
    }
}

/// Parse `#RRGGBB` and convert to HSL
pub fn hex_to_hsl(hex: &str) -> FolioResult<Hsl> {
    Ok(hex.parse::<Rgb>()?.to_hsl())
}

/// Convert HSL to lowercase `#rrggbb`
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}

/// Position of a color within a [`Palette`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteRole {
    Darker,
    Dark,
    Base,
    Light,
    Lighter,
    Complementary,
    AnalogousPlus,
    AnalogousMinus,
}

impl PaletteRole {
    /// Every role, in palette order
    pub const ALL: [PaletteRole; 8] = [
        PaletteRole::Darker,
        PaletteRole::Dark,
        PaletteRole::Base,
        PaletteRole::Light,
        PaletteRole::Lighter,
        PaletteRole::Complementary,
        PaletteRole::AnalogousPlus,
        PaletteRole::AnalogousMinus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaletteRole::Darker => "darker",
            PaletteRole::Dark => "dark",
            PaletteRole::Base => "base",
            PaletteRole::Light => "light",
            PaletteRole::Lighter => "lighter",
            PaletteRole::Complementary => "complementary",
            PaletteRole::AnalogousPlus => "analogous +30",
            PaletteRole::AnalogousMinus => "analogous -30",
        }
    }

    /// Derive this role's color from the base
    pub fn apply(&self, base: Hsl) -> Hsl {
        match self {
            PaletteRole::Darker => base.with_lightness((base.l - 0.30).max(MIN_LIGHTNESS)),
            PaletteRole::Dark => base.with_lightness((base.l - 0.15).max(MIN_LIGHTNESS)),
            PaletteRole::Base => base,
            PaletteRole::Light => base.with_lightness((base.l + 0.15).min(MAX_LIGHTNESS)),
            PaletteRole::Lighter => base.with_lightness((base.l + 0.30).min(MAX_LIGHTNESS)),
            PaletteRole::Complementary => base.rotate(180.0),
            PaletteRole::AnalogousPlus => base.rotate(30.0),
            PaletteRole::AnalogousMinus => base.rotate(-30.0),
        }
    }
}

/// One palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub role: PaletteRole,
    pub color: Rgb,
}

/// Eight colors derived from one base, in [`PaletteRole::ALL`] order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub base: Rgb,
    swatches: [Swatch; 8],
}

impl Palette {
    pub fn from_base(base: Rgb) -> Self {
        let hsl = base.to_hsl();
        let swatches = PaletteRole::ALL.map(|role| Swatch {
            role,
            color: role.apply(hsl).to_rgb(),
        });
        Self { base, swatches }
    }

    pub fn swatches(&self) -> &[Swatch; 8] {
        &self.swatches
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    pub fn get(&self, role: PaletteRole) -> Rgb {
        // Swatches are stored in role order.
        self.swatches[role as usize].color
    }

    /// Lowercase hex strings in palette order
    pub fn hex_colors(&self) -> Vec<String> {
        self.swatches.iter().map(|s| s.color.to_hex()).collect()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Build the palette for `base_hex`.
///
/// Fails with [`FolioError::MalformedColor`] unless the input is `#RRGGBB`.
pub fn generate_palette(base_hex: &str) -> FolioResult<Palette> {
    let base: Rgb = base_hex.parse()?;
    let palette = Palette::from_base(base);
    tracing::debug!(base = %base, "generated palette");
    Ok(palette)
}

/// Uniformly random base color in `#000000..#fffffe`
pub fn random_color() -> Rgb {
    Rgb::from_u32(rand::rng().random_range(0..0xFF_FFFF))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn parses_hex_either_case() {
        assert_eq!("#336699".parse::<Rgb>().unwrap(), Rgb::new(0x33, 0x66, 0x99));
        assert_eq!("#AbCdEf".parse::<Rgb>().unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["336699", "#33669", "#3366999", "#GG6699", "", "# 36699"] {
            assert!(
                matches!(bad.parse::<Rgb>(), Err(FolioError::MalformedColor(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn hex_formatting() {
        let c = Rgb::new(0x0a, 0xbc, 0x01);
        assert_eq!(c.to_hex(), "#0abc01");
        assert_eq!(c.to_hex_upper(), "#0ABC01");
        assert_eq!(c.to_string(), "#0abc01");
    }

    #[test]
    fn known_hsl_values() {
        let hsl = hex_to_hsl("#ff0000").unwrap();
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));

        let hsl = hex_to_hsl("#336699").unwrap();
        assert!((hsl.h - 210.0).abs() < 1e-9);
        assert!((hsl.s - 0.5).abs() < 1e-9);
        assert!((hsl.l - 0.4).abs() < 1e-9);
    }

    #[test]
    fn base_round_trips() {
        for hex in ["#336699", "#000000", "#ffffff", "#10b981", "#ef4444", "#3b82f6"] {
            let back = hsl_to_hex(hex_to_hsl(hex).unwrap());
            let a: Rgb = hex.parse().unwrap();
            let b: Rgb = back.parse().unwrap();
            assert!(a.max_channel_delta(&b) <= 1, "{} -> {}", hex, back);
        }
    }

    #[test]
    fn palette_of_336699() {
        let palette = generate_palette("#336699").unwrap();
        assert_eq!(palette.len(), 8);

        let roles: Vec<_> = palette.iter().map(|s| s.role).collect();
        assert_eq!(roles, PaletteRole::ALL.to_vec());

        assert_eq!(
            palette.hex_colors(),
            vec![
                "#0d1a26", "#204060", "#336699", "#538cc6", "#8cb3d9", "#996633", "#333399",
                "#339999",
            ]
        );
    }

    #[test]
    fn complementary_is_opposite_hue() {
        let palette = generate_palette("#336699").unwrap();
        let base = palette.get(PaletteRole::Base).to_hsl();
        let comp = palette.get(PaletteRole::Complementary).to_hsl();
        assert!((hue_distance(base.h, comp.h) - 180.0).abs() < 1.0);
    }

    #[test]
    fn lightness_is_clamped() {
        let dark = generate_palette("#0a0a0a").unwrap();
        let darker = dark.get(PaletteRole::Darker).to_hsl();
        assert!((darker.l - MIN_LIGHTNESS).abs() < 0.01);

        let light = generate_palette("#f5f5f5").unwrap();
        let lighter = light.get(PaletteRole::Lighter).to_hsl();
        assert!((lighter.l - MAX_LIGHTNESS).abs() < 0.01);
    }

    #[test]
    fn achromatic_base_yields_grays() {
        let palette = generate_palette("#808080").unwrap();
        for swatch in palette.iter() {
            let c = swatch.color;
            assert!(c.r == c.g && c.g == c.b, "{:?} not gray", swatch);
        }
        assert_eq!(palette.get(PaletteRole::Complementary), palette.base);
    }

    #[test]
    fn rotate_wraps() {
        let hsl = Hsl::new(350.0, 0.5, 0.5);
        assert!((hsl.rotate(30.0).h - 20.0).abs() < 1e-9);
        assert!((Hsl::new(10.0, 0.5, 0.5).rotate(-30.0).h - 340.0).abs() < 1e-9);
    }

    #[test]
    fn random_color_is_valid_hex() {
        for _ in 0..100 {
            assert!(is_hex_color(&random_color().to_hex()));
        }
    }
}
