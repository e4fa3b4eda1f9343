// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Diagnostic logging.
//!
//! The engine only ever emits [`tracing`] events (`tracing::trace!` for
//! routine dispatch, `tracing::debug!` for lifecycle transitions,
//! `tracing::warn!` for unrecognised-but-harmless sequences); it never
//! installs a subscriber itself. Library code composes into whatever
//! subscriber the host has already set up — this mirrors the teacher's own
//! `tracing_init.rs`, minus the layered display/file/`SharedWriter`
//! composition that module builds for an application, which a library has
//! no business owning.
//!
//! The one subscriber this crate does construct lives behind
//! `#[cfg(test)]`, for the integration tests under `tests/` that want to
//! assert on emitted diagnostics.

#[cfg(test)]
pub(crate) fn install_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
