// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error kinds surfaced across the public API boundary.
//!
//! Grounded on the `thiserror` + `miette::Diagnostic` derive pattern used for
//! `SubscribeError` in `tui/src/core/resilient_reactor_thread/rrt_types.rs`:
//! each variant gets a human `#[error(...)]` message and a
//! `#[diagnostic(code(...), help(...))]` pointing at the likely fix. Internal
//! per-byte parsing never produces one of these — malformed escape sequences
//! are absorbed and logged, never propagated (§7) — this enum only covers
//! the handful of operations that can fail for reasons external to the byte
//! stream.

/// Errors the engine's public API can return.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TerminalError {
    /// The transport's child process exited or its pipe broke. The terminal
    /// has moved to `CLOSED`; every further operation returns this same
    /// variant.
    #[error("terminal transport is closed")]
    #[diagnostic(
        code(vterm_engine::closed_transport),
        help("the child process exited or its PTY pipe broke; construct a new Terminal to continue")
    )]
    ClosedTransport,

    /// `resize`/`create`/`init` was asked for fewer than 1 column or row.
    #[error("invalid geometry: {cols}x{rows} (both dimensions must be >= 1)")]
    #[diagnostic(
        code(vterm_engine::invalid_geometry),
        help("pass cols >= 1 and rows >= 1")
    )]
    InvalidGeometry { cols: usize, rows: usize },

    /// Opening the PTY or spawning the child process failed.
    #[error("failed to start the child process")]
    #[diagnostic(code(vterm_engine::spawn_failed))]
    #[cfg_attr(
        target_os = "linux",
        diagnostic(help("check that the executable exists and is on PATH, and that /dev/ptmx is accessible"))
    )]
    #[cfg_attr(
        target_os = "macos",
        diagnostic(help("check that the executable exists and is on PATH"))
    )]
    #[cfg_attr(
        target_os = "windows",
        diagnostic(help("check that the executable exists and ConPTY is available on this Windows version"))
    )]
    SpawnFailed(#[source] std::io::Error),
}

/// Internal, non-propagated diagnostic kinds. These are constructed purely so
/// the `tracing::warn!` call sites have a consistent, greppable shape; §7
/// mandates that both are recovered locally and never returned from a public
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveredError {
    /// The escape accumulator exceeded its bound; the in-progress sequence
    /// was cancelled and the dispatcher returned to `NORMAL`.
    EscapeOverflow { accumulated_len: usize },
    /// A CSI sequence carried more parameters than the cap; the whole
    /// sequence was dropped.
    InvalidParam { param_count: usize },
}

impl std::fmt::Display for RecoveredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveredError::EscapeOverflow { accumulated_len } => {
                write!(f, "escape accumulator overflow after {accumulated_len} bytes, sequence cancelled")
            }
            RecoveredError::InvalidParam { param_count } => {
                write!(f, "CSI parameter count {param_count} exceeds cap, sequence dropped")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TerminalError>;
