//! Cell styling types

use std::fmt;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Convert to hex string (with # prefix)
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// The style payload a conditional rule applies when it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub background: Color,
    pub foreground: Color,
    pub bold: bool,
    pub italic: bool,
}

impl CellStyle {
    /// Create a style with the given colors and no font effects
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
            bold: false,
            italic: false,
        }
    }

    /// Set the background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the foreground color
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

impl Default for CellStyle {
    /// Yellow background on black text, the classic highlight
    fn default() -> Self {
        Self::new(Color::YELLOW, Color::BLACK)
    }
}

/// The computed style of a cell after conditional rules run
///
/// `None` colors mean no rule touched the cell and the display default
/// applies. Every matching rule overwrites all four fields, so with
/// several matches the last rule in insertion order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputedStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl ComputedStyle {
    /// Overwrite every field from a matched rule's style
    pub fn apply(&mut self, style: &CellStyle) {
        self.background = Some(style.background);
        self.foreground = Some(style.foreground);
        self.bold = style.bold;
        self.italic = style.italic;
    }

    /// True if no rule has touched this cell
    pub fn is_unstyled(&self) -> bool {
        *self == ComputedStyle::default()
    }
}
