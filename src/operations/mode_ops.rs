// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component E: SM/RM (`h`/`l`) — DEC private modes and the one standard
//! mode (IRM) this spec tracks.
//!
//! Grounded on the teacher's `vt_100_shim_mode_ops.rs`, which detects a
//! private-mode sequence the same way: the `?` intermediate byte `vte`
//! surfaces via `intermediates`, not a parameter value.

use vte::Params;

use crate::{protocols::mode_codes, screen_buffer::ScreenBuffer};

const PRIVATE_MODE_INTERMEDIATE: u8 = crate::protocols::csi_codes::PRIVATE_MODE_INTERMEDIATE;

/// CSI `h` (SM/DECSET): set the modes named in `params`.
pub fn set_mode(buf: &mut ScreenBuffer, params: &Params, intermediates: &[u8]) {
    apply(buf, params, intermediates, true);
}

/// CSI `l` (RM/DECRST): reset the modes named in `params`.
pub fn reset_mode(buf: &mut ScreenBuffer, params: &Params, intermediates: &[u8]) {
    apply(buf, params, intermediates, false);
}

fn apply(buf: &mut ScreenBuffer, params: &Params, intermediates: &[u8], set: bool) {
    let private = intermediates.contains(&PRIVATE_MODE_INTERMEDIATE);
    for param in params.iter() {
        let n = param.first().copied().unwrap_or(0);
        if private {
            apply_private_mode(buf, n, set);
        } else {
            apply_standard_mode(buf, n, set);
        }
    }
}

fn apply_private_mode(buf: &mut ScreenBuffer, n: u16, set: bool) {
    match n {
        mode_codes::DECCKM_CURSOR_KEY => buf.cursor_key_app_mode = set,
        mode_codes::DECOM_ORIGIN_MODE => buf.origin_mode = set,
        mode_codes::DECAWM_AUTO_WRAP => buf.autowrap = set,
        mode_codes::DECTCEM_CURSOR_VISIBLE => buf.cursor_visible = set,
        mode_codes::ALT_SCREEN_BUFFER => {
            if set {
                buf.enter_alternate_screen();
            } else {
                buf.leave_alternate_screen();
            }
        }
        _ => tracing::warn!(mode = n, set, "unrecognised DEC private mode, ignored"),
    }
}

fn apply_standard_mode(buf: &mut ScreenBuffer, n: u16, set: bool) {
    match n {
        mode_codes::IRM_INSERT_MODE => buf.insert_mode = set,
        _ => tracing::warn!(mode = n, set, "unrecognised standard mode, ignored"),
    }
}
