// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component E: row/column shifting — ICH (`@`), DCH (`P`), IL (`L`), DL
//! (`M`), SU (`S`), SD (`T`).
//!
//! Grounded on the teacher's `vt_100_shim_line_ops.rs`/`char_ops.rs` split,
//! folded into one module since this crate keeps a single shim+impl layer
//! (see the [module docs](super)).

use vte::Params;

use crate::{rendering, screen_buffer::ScreenBuffer};

use super::first_param_or_default;

/// CSI `@` (ICH): insert n blanks at the cursor; tail shifts right.
pub fn insert_chars(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::insert_chars_at_cursor(buf, n);
}

/// CSI `P` (DCH): delete n chars at the cursor; tail shifts left.
pub fn delete_chars(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::delete_chars_at_cursor(buf, n);
}

/// CSI `L` (IL): insert n blank lines at the cursor row within the scroll
/// region.
pub fn insert_lines(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::insert_lines_at_cursor(buf, n);
}

/// CSI `M` (DL): delete n lines at the cursor row within the scroll region.
pub fn delete_lines(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::delete_lines_at_cursor(buf, n);
}

/// CSI `S` (SU): scroll the region up n.
pub fn scroll_up(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::scroll_region_up(buf, n);
}

/// CSI `T` (SD): scroll the region down n.
pub fn scroll_down(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::scroll_region_down(buf, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cell::Cell,
        units::{col, height, row, width},
    };

    fn params_of(values: &[u16]) -> Params {
        let mut params = Params::default();
        for &v in values {
            params.extend(std::iter::once(v));
        }
        params
    }

    #[test]
    fn delete_lines_count_larger_than_region_clears_it() {
        let mut buf = ScreenBuffer::new(width(3), height(3)).unwrap();
        for (r, text) in ["aaa", "bbb", "ccc"].iter().enumerate() {
            for (c, ch) in text.chars().enumerate() {
                buf.grid_mut().row_mut(row(r))[c] = Cell { glyph: ch, attr: buf.attr() };
            }
        }
        buf.move_cursor_to(row(0) + col(0));
        delete_lines(&mut buf, &params_of(&[99]));
        for c in 0..3 {
            assert_eq!(buf.get_char(row(0) + col(c)).unwrap().glyph, ' ');
            assert_eq!(buf.get_char(row(2) + col(c)).unwrap().glyph, ' ');
        }
    }

    #[test]
    fn scroll_up_default_param_is_one() {
        let mut buf = ScreenBuffer::new(width(3), height(2)).unwrap();
        buf.grid_mut().row_mut(row(0))[0] = Cell { glyph: 'X', attr: buf.attr() };
        scroll_up(&mut buf, &Params::default());
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().glyph, ' ');
    }
}
