// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component E: the cursor-motion family of CSI finals (`A B C D E F G \` d H
//! f Z b`) plus save/restore (`ESC 7`/`8`, CSI `s`/`u`).
//!
//! Grounded on the teacher's `vt_100_shim_cursor_ops.rs`: each function here
//! parses the CSI parameters for one final byte and applies the clamp rule
//! §4.E's table spells out for that command, then writes the cursor fields
//! directly rather than routing through [`ScreenBuffer::move_cursor_to`] —
//! that helper's origin-mode remap assumes a *relative-to-region* row, which
//! only CUP/HVP's `(p1-1, p2-1)` coordinates actually are. A bare "up 1" or
//! "column 12" is already absolute, so remapping it through the origin-mode
//! offset a second time would double-count it.

use vte::Params;

use crate::{
    rendering,
    screen_buffer::ScreenBuffer,
    units::{col, row},
};

use super::{first_param_or_default, nth_param_or_default};

/// CSI `A` (CUU): cursor up n (default 1), clamped to `top`.
pub fn cursor_up(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let lo = buf.scroll_top.as_usize();
    let new_row = buf.cursor().row_index.as_usize().saturating_sub(n).max(lo);
    set_row(buf, new_row);
}

/// CSI `B`/`e` (CUD): cursor down n, clamped to `bottom`.
pub fn cursor_down(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let hi = buf.scroll_bottom.as_usize();
    let new_row = (buf.cursor().row_index.as_usize() + n).min(hi);
    set_row(buf, new_row);
}

/// CSI `C`/`a` (CUF): cursor right n, clamped to `cols-1`.
pub fn cursor_forward(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let max_col = buf.size().col_width.as_usize() - 1;
    let new_col = (buf.cursor().col_index.as_usize() + n).min(max_col);
    set_col(buf, new_col);
}

/// CSI `D` (CUB): cursor left n, not below 0.
pub fn cursor_backward(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let new_col = buf.cursor().col_index.as_usize().saturating_sub(n);
    set_col(buf, new_col);
}

/// CSI `E` (CNL): cursor to column 0, down n.
pub fn cursor_next_line(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let max_row = buf.size().row_height.as_usize() - 1;
    let new_row = (buf.cursor().row_index.as_usize() + n).min(max_row);
    set_row(buf, new_row);
    set_col(buf, 0);
}

/// CSI `F` (CPL): cursor to column 0, up n.
pub fn cursor_prev_line(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let new_row = buf.cursor().row_index.as_usize().saturating_sub(n);
    set_row(buf, new_row);
    set_col(buf, 0);
}

/// CSI `G`/`` ` `` (CHA): set column = n-1, clamped to `cols-1`.
pub fn cursor_column(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let max_col = buf.size().col_width.as_usize() - 1;
    set_col(buf, n.saturating_sub(1).min(max_col));
}

/// CSI `d` (VPA): set row = n-1, clamped to `rows-1`.
pub fn vertical_position_absolute(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    let max_row = buf.size().row_height.as_usize() - 1;
    set_row(buf, n.saturating_sub(1).min(max_row));
}

/// CSI `H`/`f` (CUP/HVP): move to (p1-1, p2-1). Origin mode offsets this
/// into the scroll region via [`ScreenBuffer::move_cursor_to`].
pub fn cursor_position(buf: &mut ScreenBuffer, params: &Params) {
    let p1 = nth_param_or_default(params, 0, 1) as usize;
    let p2 = nth_param_or_default(params, 1, 1) as usize;
    buf.move_cursor_to(row(p1 - 1) + col(p2 - 1));
}

/// CSI `Z` (CBT): cursor back-tab n stops (default 1).
pub fn cursor_back_tab(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::cursor_back_tab(buf, n);
}

/// CSI `b` (REP): repeat the last printed glyph n times (default 1).
pub fn repeat_last_char(buf: &mut ScreenBuffer, params: &Params) {
    let n = first_param_or_default(params, 1) as usize;
    rendering::repeat_last_glyph(buf, n);
}

/// `ESC 7` / CSI `s` (DECSC / SAVECUR): save cursor position, attribute, and
/// charset flag.
pub fn save_cursor(buf: &mut ScreenBuffer) { rendering::save_cursor(buf); }

/// `ESC 8` / CSI `u` (DECRC / RESTORECUR): restore the saved snapshot, or
/// defaults if nothing was ever saved.
pub fn restore_cursor(buf: &mut ScreenBuffer) { rendering::restore_cursor(buf); }

/// Sets the cursor row directly (bypassing origin-mode remap) and clears
/// pending-wrap, per §4.A "any explicit cursor move clears pending-wrap".
fn set_row(buf: &mut ScreenBuffer, r: usize) {
    let c = buf.cursor().col_index;
    buf.cursor = row(r) + c;
    buf.pending_wrap = false;
}

/// Sets the cursor column directly and clears pending-wrap.
fn set_col(buf: &mut ScreenBuffer, c: usize) {
    let r = buf.cursor().row_index;
    buf.cursor = r + col(c);
    buf.pending_wrap = false;
}
