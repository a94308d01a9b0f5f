//! Hex color decoding and plain-text pixel grid rendering
//!
//! Pixel grids use the ASCII `P3` PPM layout, which any image tool can convert
//! to PNG later without this crate needing a real image codec.

use fingerfist_core::{FingerfistError, Result};
use std::fmt;

/// Maximum component value written on the third line of every grid
pub const MAX_COMPONENT: u8 = 255;

/// A decoded 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a 6-digit hex color, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(FingerfistError::validation(format!(
                "invalid color '{}': expected 6 hex digits",
                hex
            )));
        }

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                FingerfistError::validation(format!("invalid color '{}': {}", hex, e))
            })
        };

        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    /// Lowercase hex without `#`
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Render a solid `width` x `height` grid in `P3` format.
///
/// Each row holds `width` space-separated `R G B` triples and ends with `\n`.
pub fn render_pixel_grid(color: Rgb, width: u32, height: u32) -> Result<String> {
    if width == 0 || height == 0 {
        return Err(FingerfistError::validation(format!(
            "invalid pixel grid size {}x{}: both dimensions must be non-zero",
            width, height
        )));
    }

    let triple = color.to_string();
    let mut row = String::with_capacity((triple.len() + 1) * width as usize);
    for x in 0..width {
        if x > 0 {
            row.push(' ');
        }
        row.push_str(&triple);
    }
    row.push('\n');

    let header = format!("P3\n{} {}\n{}\n", width, height, MAX_COMPONENT);
    let mut grid = String::with_capacity(header.len() + row.len() * height as usize);
    grid.push_str(&header);
    for _ in 0..height {
        grid.push_str(&row);
    }
    Ok(grid)
}
