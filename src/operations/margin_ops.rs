// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component E: DECSTBM (`r`) — the scroll-region/margin setter.
//!
//! Grounded on the teacher's `vt_100_shim_margin_ops.rs`. The only wrinkle
//! versus a plain two-parameter CSI is the default for `p2`: an absent or
//! zero bottom margin means "to the last row", not "row 0" — so unlike
//! every other handler in this module, the default passed to
//! [`super::nth_param_or_default`] is computed from the current grid height
//! rather than being a fixed literal.

use vte::Params;

use crate::{rendering, screen_buffer::ScreenBuffer, units::row};

use super::nth_param_or_default;

/// CSI `r` (DECSTBM): set the scroll region `[p1-1, p2-1]` and home the
/// cursor.
pub fn set_margins(buf: &mut ScreenBuffer, params: &Params) {
    let rows = buf.size().row_height.as_usize();
    let p1 = nth_param_or_default(params, 0, 1) as usize;
    let p2 = nth_param_or_default(params, 1, rows as u16) as usize;
    rendering::set_scroll_region(buf, row(p1.saturating_sub(1)), row(p2.saturating_sub(1)));
}
