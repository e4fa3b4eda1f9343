// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cell/attribute data model (component A's leaf type).
//!
//! Grounded on the teacher's `PixelChar`/`TuiStyle` split
//! (`tui/src/tui/terminal_lib_backends/offscreen_buffer/test_fixtures_ofs_buf.rs`),
//! scaled down to what the spec actually asks for: 8 indexed colours rather
//! than the teacher's full RGB/ANSI-256 `TuiColor`, and a flat bitflag-style
//! [`Attribute`] struct rather than `TuiStyleAttribs`'s richer optional
//! fields, since every attribute here is a plain on/off toggle.

/// One of the eight ANSI indexed colours, or "whatever the default attribute
/// says" (SGR 39/49).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Maps an SGR foreground/background index (`0`..=`7`) to a [`Color`].
    /// Returns `None` for anything outside that range, leaving the caller
    /// free to ignore the unrecognised code per §4.E's "unknown codes are
    /// ignored" rule.
    #[must_use]
    pub fn from_sgr_index(index: u16) -> Option<Self> {
        Some(match index {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            _ => return None,
        })
    }
}

/// The current drawing attribute: foreground/background colour plus the six
/// boolean text attributes SGR can toggle independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attribute {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub invisible: bool,
}

impl Attribute {
    /// The attribute a freshly created or fully reset screen uses: default
    /// colours, no attributes set.
    #[must_use]
    pub fn default_attr() -> Self { Self::default() }

    /// SGR `0`: reset every field to the default attribute.
    pub fn reset(&mut self) { *self = Self::default_attr(); }
}

/// One grid cell: a glyph plus the attribute it was written with.
///
/// A cell is "blank" when its glyph is a space and its attribute equals the
/// screen's default attribute (§3's definition) — [`Cell::is_blank`] takes
/// the default attribute as a parameter rather than assuming
/// `Attribute::default()`, since a host can repaint the default attribute
/// via `set_colors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: char,
    pub attr: Attribute,
}

impl Cell {
    #[must_use]
    pub fn blank(default_attr: Attribute) -> Self {
        Self { glyph: ' ', attr: default_attr }
    }

    #[must_use]
    pub fn is_blank(&self, default_attr: Attribute) -> bool {
        self.glyph == ' ' && self.attr == default_attr
    }
}
