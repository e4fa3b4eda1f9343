// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component E: the erase family — ED (`J`), EL (`K`), ECH (`X`).
//!
//! Grounded on the teacher's `vt_100_shim_char_ops.rs`/display-clear
//! handling; unlike the teacher (which ignores ED/EL outright, relying on
//! TUI apps to repaint themselves), this spec requires them to actually
//! blank the grid, so they call straight through to [`rendering`].

use vte::Params;

use crate::{
    rendering::{self, EraseMode},
    screen_buffer::ScreenBuffer,
};

use super::{first_param_or_default, nth_param_raw_or};

/// CSI `J` (ED): erase part or all of the display.
pub fn erase_in_display(buf: &mut ScreenBuffer, params: &Params) {
    let mode = EraseMode::from_param(nth_param_raw_or(params, 0, 0));
    rendering::erase_in_display(buf, mode);
}

/// CSI `K` (EL): erase part or all of the cursor's row.
pub fn erase_in_line(buf: &mut ScreenBuffer, params: &Params) {
    let mode = EraseMode::from_param(nth_param_raw_or(params, 0, 0));
    rendering::erase_in_line(buf, mode);
}

/// CSI `X` (ECH): erase n characters at the cursor; no shift, no cursor
/// move.
pub fn erase_chars(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::erase_chars_at_cursor(buf, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{col, height, row, width};

    fn params_of(values: &[u16]) -> Params {
        let mut params = Params::default();
        for &v in values {
            params.extend(std::iter::once(v));
        }
        params
    }

    #[test]
    fn erase_in_display_default_param_is_to_end() {
        let mut buf = ScreenBuffer::new(width(5), height(2)).unwrap();
        for ch in "ABCDE".chars() {
            rendering::put_glyph(&mut buf, ch);
        }
        buf.move_cursor_to(row(0) + col(2));
        erase_in_display(&mut buf, &Params::default());
        assert_eq!(buf.get_char(row(0) + col(2)).unwrap().glyph, ' ');
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().glyph, 'A');
    }

    #[test]
    fn erase_chars_does_not_move_cursor() {
        let mut buf = ScreenBuffer::new(width(5), height(1)).unwrap();
        for ch in "ABCDE".chars() {
            rendering::put_glyph(&mut buf, ch);
        }
        buf.move_cursor_to(row(0) + col(1));
        erase_chars(&mut buf, &params_of(&[2]));
        assert_eq!(buf.cursor(), row(0) + col(1));
        assert_eq!(buf.get_char(row(0) + col(1)).unwrap().glyph, ' ');
        assert_eq!(buf.get_char(row(0) + col(3)).unwrap().glyph, 'D');
    }
}
