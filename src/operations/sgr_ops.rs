// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component E: SGR (`m`) — Select Graphic Rendition.
//!
//! Grounded on the teacher's `vt_100_shim_sgr_ops.rs`, cut down to this
//! spec's 8-indexed-colour model: no 256-colour or RGB extended sequences,
//! since [`crate::cell::Color`] only has the 8 indexed slots plus Default.
//! Params are applied left to right, matching §4.E's "Params applied left
//! to right"; an empty parameter list (bare `ESC[m`) is equivalent to `0`.

use vte::Params;

use crate::{cell::Color, screen_buffer::ScreenBuffer};

/// CSI `m` (SGR): apply every parameter in order.
pub fn apply(buf: &mut ScreenBuffer, params: &Params) {
    if params.iter().next().is_none() {
        buf.attr.reset();
        return;
    }
    for param in params.iter() {
        let code = param.first().copied().unwrap_or(0);
        apply_one(buf, code);
    }
}

fn apply_one(buf: &mut ScreenBuffer, code: u16) {
    match code {
        0 => buf.attr.reset(),
        1 => buf.attr.bold = true,
        2 => buf.attr.dim = true,
        4 => buf.attr.underline = true,
        5 => buf.attr.blink = true,
        7 => buf.attr.reverse = true,
        8 => buf.attr.invisible = true,
        22 => {
            buf.attr.bold = false;
            buf.attr.dim = false;
        }
        24 => buf.attr.underline = false,
        25 => buf.attr.blink = false,
        27 => buf.attr.reverse = false,
        30..=37 => {
            if let Some(c) = Color::from_sgr_index(code - 30) {
                buf.attr.fg = c;
            }
        }
        39 => buf.attr.fg = Color::Default,
        40..=47 => {
            if let Some(c) = Color::from_sgr_index(code - 40) {
                buf.attr.bg = c;
            }
        }
        49 => buf.attr.bg = Color::Default,
        _ => {} // Unknown SGR codes are ignored (§4.E).
    }
}
