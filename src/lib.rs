// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A character-cell VT100/xterm terminal-emulation core.
//!
//! This crate owns screen state (grid, cursor, attributes, modes) and the
//! byte-stream parser that drives it; a [`transport::Transport`]
//! implementation supplies the bytes, typically from a real pseudo-terminal
//! via [`transport::PtyTransport`]. [`terminal::Terminal`] is the façade
//! tying both together.
//!
//! Grounded on the teacher's crate-root layout
//! (`tui/src/core/pty/mod.rs`/`tui/src/lib.rs`): one `pub mod` per
//! component, with the handful of types callers actually construct
//! re-exported at the crate root.

pub mod cell;
pub mod dispatcher;
pub mod error;
pub mod log;
pub mod operations;
pub mod protocols;
pub mod rendering;
pub mod screen_buffer;
pub mod terminal;
pub mod transport;
pub mod units;

pub use cell::{Attribute, Cell, Color};
pub use error::{RecoveredError, Result, TerminalError};
pub use screen_buffer::ScreenBuffer;
pub use terminal::{ExecSpec, Flags, Terminal, TerminalState};
pub use transport::{PtyTransport, Transport, TransportRead};
pub use units::{col, height, row, width, ColIndex, ColWidth, Pos, RowHeight, RowIndex, Size};
