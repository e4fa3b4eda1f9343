// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component F: SCS (`ESC ( x` / `ESC ) x`) — character-set selection, plus
//! the DEC special-graphics translation table §9 "Charset translation"
//! asks for as a pure function rather than a mutable shared table.
//!
//! Grounded on the teacher's G0/G1 handling in `perform.rs`'s `esc_dispatch`
//! (`ESC ( B` / `ESC ( 0`); the translation table itself mirrors the
//! standard VT100 DEC Special Graphics set (line-drawing box characters
//! mapped from the ASCII range `0x60`-`0x7E`).

use crate::protocols::esc_codes;

/// `ESC ( x`: select G0. `0` enables DEC special graphics (sets the
/// alternate-charset flag); `B` (ASCII) clears it. `1`/`2` are accepted per
/// §4.F's final-byte set but have no distinct effect here.
pub fn select_g0(alt_charset: &mut bool, byte: u8) {
    match byte {
        esc_codes::CHARSET_DEC_GRAPHICS => *alt_charset = true,
        esc_codes::CHARSET_ASCII => *alt_charset = false,
        _ => {}
    }
}

/// `ESC ) x`: select G1. Accepted but unused — this engine never renders
/// through G1 (§4.F).
pub fn select_g1(_byte: u8) {}

/// Translates a printable character through the DEC special-graphics set
/// when `alt_charset` is set; otherwise passes it through unchanged
/// (ASCII/Latin-1 semantics, §1 scope).
#[must_use]
pub fn translate(ch: char, alt_charset: bool) -> char {
    if alt_charset
        && ch.is_ascii()
        && let Some(g) = dec_special_graphics(ch as u8)
    {
        return g;
    }
    ch
}

fn dec_special_graphics(byte: u8) -> Option<char> {
    Some(match byte {
        b'`' => '\u{25C6}', // diamond
        b'a' => '\u{2592}', // checkerboard
        b'f' => '\u{00B0}', // degree
        b'g' => '\u{00B1}', // plus/minus
        b'j' => '\u{2518}', // bottom-right corner
        b'k' => '\u{2510}', // top-right corner
        b'l' => '\u{250C}', // top-left corner
        b'm' => '\u{2514}', // bottom-left corner
        b'n' => '\u{253C}', // crossing lines
        b'q' => '\u{2500}', // horizontal line
        b't' => '\u{251C}', // left tee
        b'u' => '\u{2524}', // right tee
        b'v' => '\u{2534}', // bottom tee
        b'w' => '\u{252C}', // top tee
        b'x' => '\u{2502}', // vertical line
        b'~' => '\u{00B7}', // centered dot
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_dec_graphics_then_ascii_round_trips() {
        let mut flag = false;
        select_g0(&mut flag, esc_codes::CHARSET_DEC_GRAPHICS);
        assert!(flag);
        select_g0(&mut flag, esc_codes::CHARSET_ASCII);
        assert!(!flag);
    }

    #[test]
    fn translate_maps_line_drawing_bytes_only_when_active() {
        assert_eq!(translate('q', true), '\u{2500}');
        assert_eq!(translate('q', false), 'q');
    }

    #[test]
    fn translate_passes_through_bytes_outside_the_table() {
        assert_eq!(translate('A', true), 'A');
    }
}
