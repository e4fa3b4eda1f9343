// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Component F: OSC dispatch — title/icon-title set (`0`, `1`, `2`);
//! everything else is parsed just far enough to be discarded (§4.F).
//!
//! Grounded on the teacher's `vt_100_shim_osc_ops.rs`, trimmed to this
//! spec's scope: no hyperlink (OSC 8) or progress (OSC 9;4) handling, since
//! those aren't named in §4.F.

use crate::screen_buffer::ScreenBuffer;

const OSC_TITLE_AND_ICON: &[u8] = b"0";
const OSC_ICON_ONLY: &[u8] = b"1";
const OSC_TITLE_ONLY: &[u8] = b"2";

/// Handles a complete OSC sequence once `vte` has assembled it.
pub fn dispatch(buf: &mut ScreenBuffer, params: &[&[u8]], _bell_terminated: bool) {
    let [code, text, ..] = params else {
        return;
    };
    let Ok(text) = std::str::from_utf8(text) else {
        return;
    };
    match *code {
        OSC_TITLE_AND_ICON => {
            buf.set_title(text);
            buf.set_icon_title(text);
        }
        OSC_ICON_ONLY => buf.set_icon_title(text),
        OSC_TITLE_ONLY => buf.set_title(text),
        other => tracing::trace!(
            code = %String::from_utf8_lossy(other),
            "OSC sequence parsed and discarded"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{height, width};

    #[test]
    fn osc_0_sets_both_titles() {
        let mut buf = ScreenBuffer::new(width(10), height(3)).unwrap();
        dispatch(&mut buf, &[b"0", b"Hello"], true);
        assert_eq!(buf.title(), "Hello");
        assert_eq!(buf.icon_title(), "Hello");
    }

    #[test]
    fn osc_2_sets_title_only() {
        let mut buf = ScreenBuffer::new(width(10), height(3)).unwrap();
        buf.set_icon_title("kept");
        dispatch(&mut buf, &[b"2", b"Window Title"], false);
        assert_eq!(buf.title(), "Window Title");
        assert_eq!(buf.icon_title(), "kept");
    }

    #[test]
    fn unrecognised_osc_code_is_discarded_without_panicking() {
        let mut buf = ScreenBuffer::new(width(10), height(3)).unwrap();
        dispatch(&mut buf, &[b"133", b"A"], true);
        assert_eq!(buf.title(), "");
    }
}
