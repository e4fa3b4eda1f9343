// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component B: stateless rendering primitives.
//!
//! Every function here is `fn(&mut ScreenBuffer, ...)` with no state of its
//! own — they are the only code in the crate that mutates cells or moves the
//! cursor, matching §4.B's "the only code that mutates cells or moves the
//! cursor". The CSI handlers in [`crate::operations`] are thin callers of
//! these, mirroring the teacher's `operations/char_ops.rs` shim-calls-impl
//! split, just collapsed into a single free-function layer since this
//! engine's impl layer is small enough not to need its own module.

use crate::{
    cell::Cell,
    screen_buffer::ScreenBuffer,
    units::{col, row, RowIndex},
};

/// `put_glyph(g)` (§4.A): write at the cursor with the current attribute,
/// advance the cursor, honouring autowrap and insert-mode.
pub fn put_glyph(buf: &mut ScreenBuffer, g: char) {
    let size = buf.size();
    let last_col = size.col_width.as_usize() - 1;

    if buf.pending_wrap {
        if buf.autowrap {
            line_feed(buf);
            buf.cursor.col_index = col(0);
        }
        buf.pending_wrap = false;
    }

    if buf.insert_mode {
        shift_row_right_from_cursor(buf, 1);
    }

    let row_idx = buf.cursor.row_index;
    let col_idx = buf.cursor.col_index.as_usize().min(last_col);
    let attr = buf.attr();
    buf.grid_mut().row_mut(row_idx)[col_idx] = Cell { glyph: g, attr };
    buf.last_printed_glyph = Some(g);

    if col_idx == last_col {
        // Pending-wrap position: col == cols. With autowrap off, §9's open
        // question resolution keeps the cursor parked on the last column
        // instead of advancing into it, so repeated prints overwrite.
        if buf.autowrap {
            buf.cursor.col_index = col(last_col + 1);
            buf.pending_wrap = true;
        }
    } else {
        buf.cursor.col_index = col(col_idx + 1);
    }
}

/// C0 `LF`/`VT`/`FF`: if the cursor is on `bottom`, scroll the region up by
/// one; otherwise the cursor moves down one row. Also clears pending-wrap
/// (matching xterm's index behaviour), so a bare `\n` at the last column
/// doesn't leave the next printed glyph to trigger a second, unintended
/// line feed; callers that also want a carriage return (e.g. a bare `\n` in
/// line-oriented terminals) must call `carriage_return` themselves.
pub fn line_feed(buf: &mut ScreenBuffer) {
    if buf.cursor.row_index == buf.scroll_bottom {
        scroll_region_up(buf, 1);
    } else {
        buf.cursor.row_index = row(buf.cursor.row_index.as_usize() + 1);
    }
    buf.pending_wrap = false;
}

/// `ESC M` reverse line feed: scroll the region down by one if the cursor is
/// on `top`, otherwise the cursor moves up one row.
pub fn reverse_line_feed(buf: &mut ScreenBuffer) {
    if buf.cursor.row_index == buf.scroll_top {
        scroll_region_down(buf, 1);
    } else {
        buf.cursor.row_index = row(buf.cursor.row_index.as_usize() - 1);
    }
}

/// C0 `CR`: cursor to column 0, clears pending-wrap.
pub fn carriage_return(buf: &mut ScreenBuffer) {
    buf.cursor.col_index = col(0);
    buf.pending_wrap = false;
}

/// C0 `BS`: cursor left by one, not below 0, clears pending-wrap.
pub fn backspace(buf: &mut ScreenBuffer) {
    let c = buf.cursor.col_index.as_usize();
    buf.cursor.col_index = col(c.saturating_sub(1));
    buf.pending_wrap = false;
}

/// C0 `HT`: advance to the next tab stop, else the last column.
pub fn horizontal_tab(buf: &mut ScreenBuffer) {
    let target = buf.next_tab_stop(buf.cursor.col_index);
    buf.cursor.col_index = target;
    buf.pending_wrap = false;
}

/// CSI `Z` (CBT): cursor back-tab `n` stops.
pub fn cursor_back_tab(buf: &mut ScreenBuffer, n: usize) {
    for _ in 0..n.max(1) {
        let target = buf.prev_tab_stop(buf.cursor.col_index);
        buf.cursor.col_index = target;
    }
    buf.pending_wrap = false;
}

/// CSI `b` (REP): repeat the last printed glyph `n` times.
pub fn repeat_last_glyph(buf: &mut ScreenBuffer, n: usize) {
    if let Some(g) = buf.last_printed_glyph {
        for _ in 0..n.max(1) {
            put_glyph(buf, g);
        }
    }
}

/// `scroll_region_up(n)` (§4.A): shift rows within `[top, bottom]` up by
/// `n`; exposed rows are filled with default blanks, rows shifted off the
/// top are discarded.
pub fn scroll_region_up(buf: &mut ScreenBuffer, n: usize) {
    let top = buf.scroll_top.as_usize();
    let bottom = buf.scroll_bottom.as_usize();
    let default_attr = buf.default_attr();
    let n = n.min(bottom - top + 1);

    for _ in 0..n {
        for r in top..bottom {
            let next_row: crate::screen_buffer::Row = buf.grid().row(row(r + 1)).into();
            *buf.grid_mut().row_mut(row(r)) = next_row;
        }
        let width = buf.size().col_width.as_usize();
        *buf.grid_mut().row_mut(row(bottom)) =
            std::iter::repeat_n(Cell::blank(default_attr), width).collect();
    }
}

/// `scroll_region_down(n)` (§4.A): the mirror image of
/// [`scroll_region_up`] — rows shift down, the top row is re-blanked, rows
/// shifted off the bottom are discarded.
pub fn scroll_region_down(buf: &mut ScreenBuffer, n: usize) {
    let top = buf.scroll_top.as_usize();
    let bottom = buf.scroll_bottom.as_usize();
    let default_attr = buf.default_attr();
    let n = n.min(bottom - top + 1);

    for _ in 0..n {
        let mut r = bottom;
        while r > top {
            let prev_row: crate::screen_buffer::Row = buf.grid().row(row(r - 1)).into();
            *buf.grid_mut().row_mut(row(r)) = prev_row;
            r -= 1;
        }
        let width = buf.size().col_width.as_usize();
        *buf.grid_mut().row_mut(row(top)) =
            std::iter::repeat_n(Cell::blank(default_attr), width).collect();
    }
}

/// Which part of a line/display an erase mode targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// 0: cursor → end.
    ToEnd,
    /// 1: start → cursor (inclusive).
    ToStart,
    /// 2: the whole line/display.
    All,
}

impl EraseMode {
    #[must_use]
    pub fn from_param(n: u16) -> Self {
        match n {
            1 => EraseMode::ToStart,
            2 => EraseMode::All,
            _ => EraseMode::ToEnd,
        }
    }
}

/// CSI `K` (EL): erase part or all of the cursor's row.
pub fn erase_in_line(buf: &mut ScreenBuffer, mode: EraseMode) {
    let size = buf.size();
    let last_col = size.col_width.as_usize() - 1;
    let cur_col = buf.cursor.col_index.as_usize().min(last_col);
    let (from, to) = match mode {
        EraseMode::ToEnd => (cur_col, last_col),
        EraseMode::ToStart => (0, cur_col),
        EraseMode::All => (0, last_col),
    };
    let default_attr = buf.default_attr();
    let r = buf.cursor.row_index;
    let row_cells = buf.grid_mut().row_mut(r);
    for cell in &mut row_cells[from..=to] {
        *cell = Cell::blank(default_attr);
    }
}

/// CSI `J` (ED): erase part or all of the display.
pub fn erase_in_display(buf: &mut ScreenBuffer, mode: EraseMode) {
    let size = buf.size();
    let last_row = size.row_height.as_usize() - 1;
    let cur_row = buf.cursor.row_index.as_usize();

    match mode {
        EraseMode::ToEnd => {
            erase_in_line(buf, EraseMode::ToEnd);
            blank_rows(buf, cur_row + 1, last_row);
        }
        EraseMode::ToStart => {
            erase_in_line(buf, EraseMode::ToStart);
            if cur_row > 0 {
                blank_rows(buf, 0, cur_row - 1);
            }
        }
        EraseMode::All => blank_rows(buf, 0, last_row),
    }
}

fn blank_rows(buf: &mut ScreenBuffer, from: usize, to: usize) {
    if from > to {
        return;
    }
    let width = buf.size().col_width.as_usize();
    let default_attr = buf.default_attr();
    for r in from..=to {
        *buf.grid_mut().row_mut(row(r)) =
            std::iter::repeat_n(Cell::blank(default_attr), width).collect();
    }
}

/// CSI `@` (ICH): insert `n` blanks at the cursor; tail shifts right,
/// characters beyond the margin are lost.
pub fn insert_chars_at_cursor(buf: &mut ScreenBuffer, n: usize) {
    shift_row_right_from_cursor(buf, n);
}

fn shift_row_right_from_cursor(buf: &mut ScreenBuffer, n: usize) {
    let size = buf.size();
    let cols = size.col_width.as_usize();
    let cur_col = buf.cursor.col_index.as_usize().min(cols - 1);
    let default_attr = buf.default_attr();
    let r = buf.cursor.row_index;
    let row_cells = buf.grid_mut().row_mut(r);
    let n = n.min(cols - cur_col);
    row_cells.copy_within(cur_col..cols - n, cur_col + n);
    for cell in &mut row_cells[cur_col..cur_col + n] {
        *cell = Cell::blank(default_attr);
    }
}

/// CSI `P` (DCH): delete `n` characters at the cursor; tail shifts left,
/// blanks are padded at the line end.
pub fn delete_chars_at_cursor(buf: &mut ScreenBuffer, n: usize) {
    let size = buf.size();
    let cols = size.col_width.as_usize();
    let cur_col = buf.cursor.col_index.as_usize().min(cols - 1);
    let default_attr = buf.default_attr();
    let r = buf.cursor.row_index;
    let row_cells = buf.grid_mut().row_mut(r);
    let n = n.min(cols - cur_col);
    row_cells.copy_within(cur_col + n..cols, cur_col);
    for cell in &mut row_cells[cols - n..cols] {
        *cell = Cell::blank(default_attr);
    }
}

/// CSI `X` (ECH): erase `n` characters at the cursor; no shifting, no
/// cursor move.
pub fn erase_chars_at_cursor(buf: &mut ScreenBuffer, n: usize) {
    let size = buf.size();
    let cols = size.col_width.as_usize();
    let cur_col = buf.cursor.col_index.as_usize().min(cols - 1);
    let default_attr = buf.default_attr();
    let r = buf.cursor.row_index;
    let row_cells = buf.grid_mut().row_mut(r);
    let end = (cur_col + n).min(cols);
    for cell in &mut row_cells[cur_col..end] {
        *cell = Cell::blank(default_attr);
    }
}

/// CSI `L` (IL): insert `n` blank lines at the cursor row, within the
/// scroll region. A count larger than the region height erases the whole
/// region (§8 "Boundary behaviours").
pub fn insert_lines_at_cursor(buf: &mut ScreenBuffer, n: usize) {
    let bottom = buf.scroll_bottom.as_usize();
    let top = buf.cursor.row_index.as_usize();
    if top > bottom {
        return;
    }
    let saved_top = buf.scroll_top;
    buf.scroll_top = row(top);
    scroll_region_down(buf, n);
    buf.scroll_top = saved_top;
}

/// CSI `M` (DL): delete `n` lines at the cursor row, within the scroll
/// region.
pub fn delete_lines_at_cursor(buf: &mut ScreenBuffer, n: usize) {
    let bottom = buf.scroll_bottom.as_usize();
    let top = buf.cursor.row_index.as_usize();
    if top > bottom {
        return;
    }
    let saved_top = buf.scroll_top;
    buf.scroll_top = row(top);
    scroll_region_up(buf, n);
    buf.scroll_top = saved_top;
}

/// ESC `7` / CSI `s`: save cursor position, attribute, and charset flag.
pub fn save_cursor(buf: &mut ScreenBuffer) {
    buf.saved_cursor = Some(crate::screen_buffer::SavedCursor {
        pos: buf.cursor(),
        attr: buf.attr(),
        alt_charset: buf.alt_charset,
    });
}

/// ESC `8` / CSI `u`: restore cursor position, attribute, and charset flag
/// from the snapshot, or to defaults if none was ever saved.
pub fn restore_cursor(buf: &mut ScreenBuffer) {
    match buf.saved_cursor {
        Some(saved) => {
            buf.move_cursor_to(saved.pos);
            buf.attr = saved.attr;
            buf.alt_charset = saved.alt_charset;
        }
        None => {
            buf.move_cursor_to(row(0) + col(0));
            buf.attr = buf.default_attr();
            buf.alt_charset = false;
        }
    }
}

/// CSI `r` (DECSTBM): set the scroll region `[p1-1, p2-1]` and home the
/// cursor.
pub fn set_scroll_region(buf: &mut ScreenBuffer, top: RowIndex, bottom: RowIndex) {
    let last_row = buf.size().row_height.as_usize() - 1;
    let top = row(top.as_usize().min(last_row));
    let bottom = row(bottom.as_usize().min(last_row));
    let (top, bottom) = if top.as_usize() <= bottom.as_usize() {
        (top, bottom)
    } else {
        (bottom, top)
    };
    buf.scroll_top = top;
    buf.scroll_bottom = bottom;
    buf.move_cursor_to(row(0) + col(0));
}
