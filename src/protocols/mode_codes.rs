// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! DEC private-mode numbers recognised by SM/RM (spec §4.E "Modes").

/// `?1`: cursor-key application mode. Tracked as a flag only; the engine has
/// no keyboard-input encoder to change behaviour for.
pub const DECCKM_CURSOR_KEY: u16 = 1;
/// `?6`: origin mode.
pub const DECOM_ORIGIN_MODE: u16 = 6;
/// `?7`: autowrap.
pub const DECAWM_AUTO_WRAP: u16 = 7;
/// `?25`: cursor visibility. Tracked as a flag only; rendering is out of
/// scope.
pub const DECTCEM_CURSOR_VISIBLE: u16 = 25;
/// `?1049`: alternate-screen buffer.
pub const ALT_SCREEN_BUFFER: u16 = 1049;
/// `4` (no `?` prefix): insert mode (IRM).
pub const IRM_INSERT_MODE: u16 = 4;
