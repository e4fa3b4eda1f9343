// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The public façade: owns the screen buffer, the persistent `vte` parser,
//! and a transport, and exposes the lifecycle the spec's §2 API names
//! (`create`, deferred exec, `read_pipe`/`write_pipe`, `resize`,
//! `set_colors`, title access, grid access).
//!
//! Grounded on the teacher's `PtyCommandBuilder`/`PtySession` split
//! (`tui/src/core/pty/pty_command_builder.rs`,
//! `tui/src/core/pty/pty_read_write.rs`): a builder-ish spec struct
//! ([`ExecSpec`]) separate from the live session ([`Terminal`]), and a
//! small closed set of states instead of ad hoc booleans.

use vte::Parser;

use crate::{
    dispatcher::Dispatcher,
    error::{Result, TerminalError},
    screen_buffer::ScreenBuffer,
    transport::{Transport, TransportRead},
    units::{height, width},
};

/// What to spawn once `init` is called. Mirrors the teacher's
/// `PtyCommandBuilder`, trimmed to what this engine actually forwards to
/// the transport (no cwd/env builder surface — out of scope per §1).
#[derive(Debug, Clone)]
pub struct ExecSpec {
    pub path: String,
    pub argv: Vec<String>,
}

impl ExecSpec {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self { Self { path: path.into(), argv: Vec::new() } }

    #[must_use]
    pub fn args(mut self, argv: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.argv = argv.into_iter().map(Into::into).collect();
        self
    }
}

/// Feature flags read once at construction (§2 "dump"/vt100-strict
/// knobs).
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    /// When set, every dispatch callback is also logged at `trace` level —
    /// a firehose meant for engine debugging, not production use (§2).
    pub dump: bool,
    /// When set, xterm-only CSI finals are silently dropped instead of
    /// applied (§9).
    pub vt100_strict: bool,
}

/// The terminal's lifecycle state (§2). `init`/`set_exec` is only valid
/// from `Init`; once a transport closes, the terminal is permanently
/// `Closed` and every further `read_pipe`/`write_pipe`/`resize` call
/// returns [`TerminalError::ClosedTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Init,
    Running,
    Closed,
}

/// A VT100/xterm engine: screen state, parser, and transport bound
/// together behind one handle.
pub struct Terminal {
    screen: ScreenBuffer,
    parser: Parser,
    transport: Option<Box<dyn Transport>>,
    state: TerminalState,
    flags: Flags,
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("state", &self.state)
            .field("flags", &self.flags)
            .field("has_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl Terminal {
    /// Creates a terminal with the given geometry and no transport attached
    /// yet (§2 `create`). Call [`Terminal::set_exec`] to spawn a child and
    /// move to `Running`, or drive it directly with [`Terminal::feed`] for
    /// transport-free use (tests, replaying a recorded session).
    ///
    /// # Errors
    /// Returns [`TerminalError::InvalidGeometry`] if either dimension is
    /// zero.
    pub fn create(cols: usize, rows: usize, flags: Flags) -> Result<Self> {
        let screen = ScreenBuffer::new(width(cols), height(rows))?;
        Ok(Self { screen, parser: Parser::new(), transport: None, state: TerminalState::Init, flags })
    }

    /// Attaches a transport constructed from `spec` and moves to `Running`
    /// (§2 `set_exec`/`init`). Only valid while `state() == Init`.
    ///
    /// # Errors
    /// Returns [`TerminalError::ClosedTransport`] if called more than once.
    pub fn set_exec(&mut self, transport: Box<dyn Transport>, _spec: &ExecSpec) -> Result<()> {
        if self.state != TerminalState::Init {
            return Err(TerminalError::ClosedTransport);
        }
        self.transport = Some(transport);
        self.state = TerminalState::Running;
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> TerminalState { self.state }

    /// Drains whatever the transport has buffered and feeds it through the
    /// parser, one byte at a time (§4.C). A transport-less terminal (never
    /// `set_exec`'d) always reports zero bytes read.
    ///
    /// # Errors
    /// Returns [`TerminalError::ClosedTransport`] once the child has
    /// exited; the terminal moves to `Closed` at that point and every
    /// subsequent call returns the same error.
    pub fn read_pipe(&mut self) -> Result<usize> {
        if self.state == TerminalState::Closed {
            return Err(TerminalError::ClosedTransport);
        }
        let Some(transport) = self.transport.as_mut() else {
            return Ok(0);
        };

        let mut buf = [0_u8; 4096];
        let mut total = 0;
        loop {
            match transport.read_available(&mut buf)? {
                TransportRead::Data(n) => {
                    total += n;
                    feed_bytes(&mut self.parser, &mut self.screen, &buf[..n], self.flags);
                    if n < buf.len() {
                        break;
                    }
                }
                TransportRead::NoData => break,
                TransportRead::Closed => {
                    self.state = TerminalState::Closed;
                    break;
                }
            }
        }
        Ok(total)
    }

    /// Writes `data` to the child (§2 `write_pipe`), e.g. keystrokes.
    ///
    /// # Errors
    /// Returns [`TerminalError::ClosedTransport`] if there is no live
    /// transport.
    pub fn write_pipe(&mut self, data: &[u8]) -> Result<()> {
        match (&mut self.transport, self.state) {
            (Some(transport), TerminalState::Running) => transport.write(data),
            _ => Err(TerminalError::ClosedTransport),
        }
    }

    /// Feeds raw bytes directly through the parser without going through a
    /// transport — the entry point used by tests and by any caller that
    /// already has bytes in hand (a recorded session, a pasted buffer).
    pub fn feed(&mut self, bytes: &[u8]) {
        feed_bytes(&mut self.parser, &mut self.screen, bytes, self.flags);
    }

    /// Resizes the grid and, if a transport is attached, notifies the
    /// pseudo-terminal (§2 `resize`).
    ///
    /// # Errors
    /// Returns [`TerminalError::InvalidGeometry`] if either dimension is
    /// zero, or a transport error if the PTY resize call fails.
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<()> {
        self.screen.resize(width(cols), height(rows))?;
        if let Some(transport) = self.transport.as_mut() {
            transport.resize(u16::try_from(cols).unwrap_or(u16::MAX), u16::try_from(rows).unwrap_or(u16::MAX))?;
        }
        Ok(())
    }

    /// Sets the default foreground/background used by SGR 39/49 and blank
    /// cells (§2 `set_colors`).
    pub fn set_colors(&mut self, fg: crate::cell::Color, bg: crate::cell::Color) {
        self.screen.set_default_colors(fg, bg);
    }

    #[must_use]
    pub fn title(&self) -> &str { self.screen.title() }

    #[must_use]
    pub fn icon_title(&self) -> &str { self.screen.icon_title() }

    #[must_use]
    pub fn screen(&self) -> &ScreenBuffer { &self.screen }
}

fn feed_bytes(parser: &mut Parser, screen: &mut ScreenBuffer, bytes: &[u8], flags: Flags) {
    let mut dispatcher = Dispatcher::new(screen, flags.vt100_strict);
    for &b in bytes {
        if flags.dump {
            tracing::trace!(byte = b, "feeding byte to parser");
        }
        parser.advance(&mut dispatcher, b);
    }
}
