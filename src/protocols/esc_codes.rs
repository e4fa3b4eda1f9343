// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control bytes and direct-ESC final bytes (spec §4.C/§4.D).

pub const BELL: u8 = 0x07;
pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const LINE_FEED: u8 = 0x0A;
pub const VERTICAL_TAB: u8 = 0x0B;
pub const FORM_FEED: u8 = 0x0C;
pub const CARRIAGE_RETURN: u8 = 0x0D;
pub const SHIFT_OUT: u8 = 0x0E;
pub const SHIFT_IN: u8 = 0x0F;

/// `ESC M`: reverse line feed.
pub const RI_REVERSE_INDEX_UP: u8 = b'M';
/// `ESC 7`: save cursor (position, attribute, charset).
pub const DECSC_SAVE_CURSOR: u8 = b'7';
/// `ESC 8`: restore cursor.
pub const DECRC_RESTORE_CURSOR: u8 = b'8';
/// `ESC c`: full reset (RIS).
pub const RIS_RESET_TERMINAL: u8 = b'c';

/// G0 charset-select intermediate (`ESC ( x`).
pub const G0_CHARSET_INTERMEDIATE: &[u8] = b"(";
/// G1 charset-select intermediate (`ESC ) x`), accepted but unused per §4.F.
pub const G1_CHARSET_INTERMEDIATE: &[u8] = b")";

pub const CHARSET_ASCII: u8 = b'B';
pub const CHARSET_DEC_GRAPHICS: u8 = b'0';
