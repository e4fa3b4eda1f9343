// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component A: the screen buffer. Owns the cell grid, cursor, current and
//! default attributes, scroll region, tab stops, saved-cursor snapshot,
//! alternate-charset flag, title, and the DEC private-mode flags the engine
//! tracks.
//!
//! Grounded on the teacher's `OffscreenBuffer` (only its
//! `test_fixtures_ofs_buf.rs` survived retrieval, but its shape — a
//! `window_size` field, a `my_pos` cursor, `get_char(pos)` accessor, and a
//! `PixelChar`-per-cell grid — is the model this type generalises):
//! `OffscreenBuffer` targets a styled/Unicode-aware pixel grid for a TUI
//! renderer, where this type targets the spec's narrower 8-colour,
//! ASCII/Latin-1, scroll-region-and-tab-stops VT100 model.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::{
    cell::{Attribute, Cell},
    error::{Result, TerminalError},
    units::{col, row, ColIndex, ColWidth, RowHeight, RowIndex, Size},
};

/// Most real terminals are 80 columns or fewer; rows that fit stay inline in
/// a [`SmallVec`] instead of touching the heap. Wider rows spill over
/// transparently.
pub type Row = SmallVec<[Cell; 80]>;

/// The maximum title length (§3 invariant 5).
pub const MAX_TITLE_LEN: usize = 256;

/// A plain `rows × cols` cell grid with no cursor/attribute state of its
/// own — that state is per-screen (primary vs. alternate) and lives on
/// [`ScreenBuffer`].
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Row>,
    size: Size,
}

impl Grid {
    fn blank(size: Size, default_attr: Attribute) -> Self {
        let row = std::iter::repeat_n(Cell::blank(default_attr), size.col_width.as_usize())
            .collect::<Row>();
        Self { rows: vec![row; size.row_height.as_usize()], size }
    }

    #[must_use]
    pub fn size(&self) -> Size { self.size }

    #[must_use]
    pub fn get(&self, pos: crate::units::Pos) -> Option<Cell> {
        self.rows
            .get(pos.row_index.as_usize())?
            .get(pos.col_index.as_usize())
            .copied()
    }

    pub(crate) fn row(&self, r: RowIndex) -> &[Cell] { &self.rows[r.as_usize()] }

    pub(crate) fn row_mut(&mut self, r: RowIndex) -> &mut Row { &mut self.rows[r.as_usize()] }

    /// Resize in place: preserve content anchored at top-left, truncate or
    /// pad with `default_attr` blanks (§4.A `resize`).
    fn resize(&mut self, new_size: Size, default_attr: Attribute) {
        let new_cols = new_size.col_width.as_usize();
        let new_rows = new_size.row_height.as_usize();

        for row in &mut self.rows {
            row.resize(new_cols, Cell::blank(default_attr));
        }
        self.rows.resize(
            new_rows,
            std::iter::repeat_n(Cell::blank(default_attr), new_cols).collect(),
        );
        self.size = new_size;
    }
}

/// Cursor position, attribute, and alternate-charset flag snapshotted by
/// `ESC 7`/`ESC 8` and CSI `s`/`u` (§3 "Saved-cursor snapshot").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub pos: crate::units::Pos,
    pub attr: Attribute,
    pub alt_charset: bool,
}

/// Everything stashed away while the alternate screen is active, so `?1049`
/// reset can restore it exactly.
#[derive(Debug, Clone)]
struct PrimaryScreenSnapshot {
    grid: Grid,
    cursor: crate::units::Pos,
    pending_wrap: bool,
    attr: Attribute,
}

/// The live terminal screen state: the grid plus every piece of cursor and
/// mode state a handler can observe or mutate.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    grid: Grid,
    /// Present only while the alternate screen (`?1049`) is active.
    primary_snapshot: Option<PrimaryScreenSnapshot>,

    pub(crate) cursor: crate::units::Pos,
    /// Set after a `put_glyph` at the last column; cleared by any explicit
    /// cursor motion (§4.A "Wrap semantics").
    pub(crate) pending_wrap: bool,

    pub(crate) attr: Attribute,
    default_attr: Attribute,

    pub(crate) scroll_top: RowIndex,
    pub(crate) scroll_bottom: RowIndex,

    tab_stops: BTreeSet<usize>,

    pub(crate) saved_cursor: Option<SavedCursor>,
    pub(crate) alt_charset: bool,

    title: String,
    icon_title: String,

    pub(crate) autowrap: bool,
    pub(crate) origin_mode: bool,
    pub(crate) insert_mode: bool,
    pub(crate) cursor_key_app_mode: bool,
    pub(crate) cursor_visible: bool,

    pub(crate) last_printed_glyph: Option<char>,
}

impl ScreenBuffer {
    /// Creates a screen of the given size with default attributes, tab
    /// stops every 8 columns, and every DEC mode at its power-on default
    /// (autowrap on, origin mode off, insert mode off).
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::InvalidGeometry`] if either dimension is
    /// zero.
    pub fn new(cols: ColWidth, rows: RowHeight) -> Result<Self> {
        if cols.as_usize() == 0 || rows.as_usize() == 0 {
            return Err(TerminalError::InvalidGeometry {
                cols: cols.as_usize(),
                rows: rows.as_usize(),
            });
        }
        let default_attr = Attribute::default_attr();
        let size = cols + rows;
        Ok(Self {
            grid: Grid::blank(size, default_attr),
            primary_snapshot: None,
            cursor: crate::units::Pos::default(),
            pending_wrap: false,
            attr: default_attr,
            default_attr,
            scroll_top: row(0),
            scroll_bottom: row(rows.as_usize() - 1),
            tab_stops: default_tab_stops(cols),
            saved_cursor: None,
            alt_charset: false,
            title: String::new(),
            icon_title: String::new(),
            autowrap: true,
            origin_mode: false,
            insert_mode: false,
            cursor_key_app_mode: false,
            cursor_visible: true,
            last_printed_glyph: None,
        })
    }

    #[must_use]
    pub fn size(&self) -> Size { self.grid.size() }

    #[must_use]
    pub fn cursor(&self) -> crate::units::Pos { self.cursor }

    #[must_use]
    pub fn attr(&self) -> Attribute { self.attr }

    #[must_use]
    pub fn default_attr(&self) -> Attribute { self.default_attr }

    pub fn set_default_colors(&mut self, fg: crate::cell::Color, bg: crate::cell::Color) {
        self.default_attr.fg = fg;
        self.default_attr.bg = bg;
    }

    #[must_use]
    pub fn get_char(&self, pos: crate::units::Pos) -> Option<Cell> { self.grid.get(pos) }

    #[must_use]
    pub fn title(&self) -> &str { &self.title }

    #[must_use]
    pub fn icon_title(&self) -> &str { &self.icon_title }

    pub(crate) fn set_title(&mut self, text: &str) {
        self.title = truncate_to(text, MAX_TITLE_LEN);
    }

    pub(crate) fn set_icon_title(&mut self, text: &str) {
        self.icon_title = truncate_to(text, MAX_TITLE_LEN);
    }

    pub(crate) fn grid(&self) -> &Grid { &self.grid }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    #[must_use]
    pub fn is_alternate_screen(&self) -> bool { self.primary_snapshot.is_some() }

    /// `?1049` SET: stash the primary screen and switch to a fresh blank
    /// grid. A no-op if already on the alternate screen.
    pub(crate) fn enter_alternate_screen(&mut self) {
        if self.primary_snapshot.is_some() {
            return;
        }
        let size = self.grid.size();
        let blank = Grid::blank(size, self.default_attr);
        self.primary_snapshot = Some(PrimaryScreenSnapshot {
            grid: std::mem::replace(&mut self.grid, blank),
            cursor: self.cursor,
            pending_wrap: self.pending_wrap,
            attr: self.attr,
        });
        self.cursor = crate::units::Pos::default();
        self.pending_wrap = false;
    }

    /// `?1049` RESET: restore the stashed primary screen. A no-op if not
    /// currently on the alternate screen.
    pub(crate) fn leave_alternate_screen(&mut self) {
        let Some(snapshot) = self.primary_snapshot.take() else { return };
        self.grid = snapshot.grid;
        self.cursor = snapshot.cursor;
        self.pending_wrap = snapshot.pending_wrap;
        self.attr = snapshot.attr;
    }

    /// Absolute cursor move, clamped to the grid (or, when origin mode is
    /// set, to the scroll region). Clears pending-wrap (§4.A).
    pub(crate) fn move_cursor_to(&mut self, mut target: crate::units::Pos) {
        let size = self.grid.size();
        let max_row = size.row_height.as_usize().saturating_sub(1);
        let max_col = size.col_width.as_usize().saturating_sub(1);

        if self.origin_mode {
            let lo = self.scroll_top.as_usize();
            let hi = self.scroll_bottom.as_usize();
            target.row_index = row((target.row_index.as_usize() + lo).min(hi));
        } else {
            target.row_index = row(target.row_index.as_usize().min(max_row));
        }
        target.col_index = col(target.col_index.as_usize().min(max_col));

        self.cursor = target;
        self.pending_wrap = false;
    }

    /// Next tab stop strictly after the cursor, or the last column if none.
    pub(crate) fn next_tab_stop(&self, from: ColIndex) -> ColIndex {
        let max_col = self.grid.size().col_width.as_usize().saturating_sub(1);
        self.tab_stops
            .range((from.as_usize() + 1)..)
            .next()
            .map_or(col(max_col), |&c| col(c.min(max_col)))
    }

    /// Back-tab: the closest tab stop strictly before the cursor, or column
    /// 0 if none.
    pub(crate) fn prev_tab_stop(&self, from: ColIndex) -> ColIndex {
        self.tab_stops
            .range(..from.as_usize())
            .next_back()
            .map_or(col(0), |&c| col(c))
    }

    /// `resize(new_rows, new_cols)` (§4.A): preserve content anchored at
    /// top-left, clamp the cursor, reset the scroll region to full extent,
    /// and recompute default tab stops only if the column count changed.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::InvalidGeometry`] if either dimension is
    /// zero; the buffer is left unchanged.
    pub fn resize(&mut self, new_cols: ColWidth, new_rows: RowHeight) -> Result<()> {
        if new_cols.as_usize() == 0 || new_rows.as_usize() == 0 {
            return Err(TerminalError::InvalidGeometry {
                cols: new_cols.as_usize(),
                rows: new_rows.as_usize(),
            });
        }
        let cols_changed = new_cols != self.grid.size().col_width;
        let new_size = new_cols + new_rows;

        self.grid.resize(new_size, self.default_attr);
        if let Some(snapshot) = &mut self.primary_snapshot {
            snapshot.grid.resize(new_size, self.default_attr);
        }

        self.scroll_top = row(0);
        self.scroll_bottom = row(new_rows.as_usize() - 1);
        if cols_changed {
            self.tab_stops = default_tab_stops(new_cols);
        }

        let max_row = new_rows.as_usize() - 1;
        let max_col = new_cols.as_usize() - 1;
        self.cursor.row_index = row(self.cursor.row_index.as_usize().min(max_row));
        self.cursor.col_index = col(self.cursor.col_index.as_usize().min(max_col));
        self.pending_wrap = false;

        Ok(())
    }

    /// Full reset (RIS, `ESC c`): defaults, clear grid, home cursor,
    /// default tabs, clear saved state, clear title.
    pub(crate) fn reset_to_initial_state(&mut self) {
        let size = self.grid.size();
        *self = Self::new(size.col_width, size.row_height)
            .expect("size was already valid before reset");
    }
}

fn default_tab_stops(cols: ColWidth) -> BTreeSet<usize> {
    (8..cols.as_usize()).step_by(8).collect()
}

fn truncate_to(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{height, width};

    #[test]
    fn new_rejects_zero_geometry() {
        assert!(ScreenBuffer::new(width(0), height(24)).is_err());
        assert!(ScreenBuffer::new(width(80), height(0)).is_err());
    }

    #[test]
    fn default_tab_stops_every_eight_columns() {
        let buf = ScreenBuffer::new(width(40), height(5)).unwrap();
        assert_eq!(buf.next_tab_stop(col(0)), col(8));
        assert_eq!(buf.next_tab_stop(col(8)), col(16));
        assert_eq!(buf.prev_tab_stop(col(17)), col(16));
    }

    #[test]
    fn move_cursor_clamps_to_grid() {
        let mut buf = ScreenBuffer::new(width(10), height(3)).unwrap();
        buf.move_cursor_to(row(99) + col(99));
        assert_eq!(buf.cursor(), row(2) + col(9));
    }

    #[test]
    fn origin_mode_clamps_into_scroll_region() {
        let mut buf = ScreenBuffer::new(width(10), height(10)).unwrap();
        buf.scroll_top = row(2);
        buf.scroll_bottom = row(5);
        buf.origin_mode = true;
        buf.move_cursor_to(row(0) + col(0));
        assert_eq!(buf.cursor(), row(2) + col(0));
        buf.move_cursor_to(row(10) + col(0));
        assert_eq!(buf.cursor(), row(5) + col(0));
    }

    #[test]
    fn resize_preserves_top_left_and_clamps_cursor() {
        let mut buf = ScreenBuffer::new(width(10), height(5)).unwrap();
        buf.move_cursor_to(row(4) + col(9));
        buf.resize(width(5), height(3)).unwrap();
        assert_eq!(buf.size(), width(5) + height(3));
        assert_eq!(buf.cursor(), row(2) + col(4));
    }

    #[test]
    fn resize_rejects_zero_geometry_and_leaves_state_unchanged() {
        let mut buf = ScreenBuffer::new(width(10), height(5)).unwrap();
        let before = buf.size();
        assert!(buf.resize(width(0), height(5)).is_err());
        assert_eq!(buf.size(), before);
    }

    #[test]
    fn alternate_screen_round_trips_primary_contents() {
        let mut buf = ScreenBuffer::new(width(10), height(3)).unwrap();
        buf.grid_mut().row_mut(row(0))[0] = Cell { glyph: 'X', attr: buf.attr() };
        buf.move_cursor_to(row(0) + col(1));

        buf.enter_alternate_screen();
        assert!(buf.is_alternate_screen());
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().glyph, ' ');

        buf.leave_alternate_screen();
        assert!(!buf.is_alternate_screen());
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().glyph, 'X');
        assert_eq!(buf.cursor(), row(0) + col(1));
    }
}
