// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named constants for the wire protocol's final bytes and mode numbers.
//!
//! Grounded on
//! `tui/src/core/pty_mux/vt_100_ansi_parser/protocols/csi_codes/constants.rs`
//! and `.../esc_codes.rs`: the dispatch tables in [`crate::dispatcher`] match
//! on these named constants rather than bare char/byte literals, so the
//! `match` arms in `perform.rs`-style code read as "CUU_CURSOR_UP" instead of
//! an opaque `'A'`.

pub mod csi_codes;
pub mod esc_codes;
pub mod mode_codes;
