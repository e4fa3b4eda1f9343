// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Components C+D: the `vte::Perform` implementation that turns parsed
//! bytes into calls against [`crate::operations`] and [`crate::rendering`].
//!
//! `vte::Parser` itself realises the byte-at-a-time state machine and
//! escape/CSI/OSC/DCS accumulation this spec's Components C and D describe;
//! grounded on the teacher's `vt_100_ansi_parser/perform.rs`, which drives
//! the same `vte` crate the same way — one [`Dispatcher`] per feed, built
//! fresh around a `&mut ScreenBuffer` borrow and dropped once the bytes run
//! out.

use vte::{Params, Perform};

use crate::{
    operations::{
        cursor_ops, erase_ops, line_ops, margin_ops, mode_ops, osc_ops, scs_ops, sgr_ops,
        MAX_CSI_PARAMS,
    },
    protocols::{csi_codes, esc_codes},
    rendering,
    screen_buffer::ScreenBuffer,
};

/// Xterm-only CSI finals gated behind [`Dispatcher::vt100_strict`] (§9): when
/// set, sequences using these finals are discarded exactly as an unknown
/// final would be, so a strict VT100 consumer never observes REP, CBT,
/// SU/SD, ECH, or the `?1049` alternate-screen toggle.
fn is_xterm_only_final(c: char, intermediates: &[u8]) -> bool {
    if intermediates.contains(&csi_codes::PRIVATE_MODE_INTERMEDIATE) {
        return false; // mode number, not final byte, distinguishes ?1049.
    }
    matches!(
        c,
        csi_codes::REP_REPEAT_LAST_CHAR
            | csi_codes::CBT_CURSOR_BACKTAB
            | csi_codes::SU_SCROLL_UP
            | csi_codes::SD_SCROLL_DOWN
            | csi_codes::ECH_ERASE_CHAR
    )
}

fn is_xterm_only_mode(params: &Params) -> bool {
    params
        .iter()
        .any(|p| p.first().copied() == Some(crate::protocols::mode_codes::ALT_SCREEN_BUFFER))
}

/// Borrows a screen buffer for the duration of one `advance()` call (or one
/// batch of them); stateless beyond that borrow and the strictness flag.
pub struct Dispatcher<'a> {
    screen: &'a mut ScreenBuffer,
    vt100_strict: bool,
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("vt100_strict", &self.vt100_strict).finish_non_exhaustive()
    }
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new(screen: &'a mut ScreenBuffer, vt100_strict: bool) -> Self {
        Self { screen, vt100_strict }
    }
}

impl Perform for Dispatcher<'_> {
    fn print(&mut self, c: char) {
        let c = scs_ops::translate(c, self.screen.alt_charset);
        rendering::put_glyph(self.screen, c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            esc_codes::BELL => tracing::trace!("bell"),
            esc_codes::BACKSPACE => rendering::backspace(self.screen),
            esc_codes::TAB => rendering::horizontal_tab(self.screen),
            esc_codes::LINE_FEED | esc_codes::VERTICAL_TAB | esc_codes::FORM_FEED => {
                rendering::line_feed(self.screen);
            }
            esc_codes::CARRIAGE_RETURN => rendering::carriage_return(self.screen),
            // SO/SI select G1/G0: accepted, but this engine only ever
            // renders through G0 (§4.F), so both are no-ops.
            esc_codes::SHIFT_OUT | esc_codes::SHIFT_IN => {}
            other => tracing::trace!(byte = other, "unhandled C0 control, ignored"),
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        // DCS is accepted and parsed by `vte` but this spec names no DCS
        // handler (§4.F); the whole string is swallowed silently.
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        osc_ops::dispatch(self.screen, params, bell_terminated);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, c: char) {
        let param_count = params.iter().count();
        if ignore || param_count > MAX_CSI_PARAMS {
            let recovered = crate::error::RecoveredError::InvalidParam { param_count };
            tracing::debug!(final = %c, %recovered, "CSI sequence dropped");
            return;
        }
        if self.vt100_strict
            && (is_xterm_only_final(c, intermediates)
                || (c == csi_codes::SM_SET_MODE || c == csi_codes::RM_RESET_MODE)
                    && intermediates.contains(&csi_codes::PRIVATE_MODE_INTERMEDIATE)
                    && is_xterm_only_mode(params))
        {
            tracing::trace!(final = %c, "xterm-only CSI final dropped under vt100_strict");
            return;
        }

        match c {
            csi_codes::CUU_CURSOR_UP => cursor_ops::cursor_up(self.screen, params),
            csi_codes::CUD_CURSOR_DOWN | csi_codes::CUD_CURSOR_DOWN_ALT => {
                cursor_ops::cursor_down(self.screen, params);
            }
            csi_codes::CUF_CURSOR_FORWARD | csi_codes::CUF_CURSOR_FORWARD_ALT => {
                cursor_ops::cursor_forward(self.screen, params);
            }
            csi_codes::CUB_CURSOR_BACKWARD => cursor_ops::cursor_backward(self.screen, params),
            csi_codes::CNL_CURSOR_NEXT_LINE => cursor_ops::cursor_next_line(self.screen, params),
            csi_codes::CPL_CURSOR_PREV_LINE => cursor_ops::cursor_prev_line(self.screen, params),
            csi_codes::CHA_CURSOR_COLUMN | csi_codes::CHA_CURSOR_COLUMN_ALT => {
                cursor_ops::cursor_column(self.screen, params);
            }
            csi_codes::VPA_VERTICAL_POSITION => {
                cursor_ops::vertical_position_absolute(self.screen, params);
            }
            csi_codes::CUP_CURSOR_POSITION | csi_codes::HVP_CURSOR_POSITION => {
                cursor_ops::cursor_position(self.screen, params);
            }
            csi_codes::CBT_CURSOR_BACKTAB => cursor_ops::cursor_back_tab(self.screen, params),
            csi_codes::REP_REPEAT_LAST_CHAR => cursor_ops::repeat_last_char(self.screen, params),
            csi_codes::SCP_SAVE_CURSOR => cursor_ops::save_cursor(self.screen),
            csi_codes::RCP_RESTORE_CURSOR => cursor_ops::restore_cursor(self.screen),

            csi_codes::ED_ERASE_DISPLAY => erase_ops::erase_in_display(self.screen, params),
            csi_codes::EL_ERASE_LINE => erase_ops::erase_in_line(self.screen, params),
            csi_codes::ECH_ERASE_CHAR => erase_ops::erase_chars(self.screen, params),

            csi_codes::ICH_INSERT_CHAR => line_ops::insert_chars(self.screen, params),
            csi_codes::DCH_DELETE_CHAR => line_ops::delete_chars(self.screen, params),
            csi_codes::IL_INSERT_LINE => line_ops::insert_lines(self.screen, params),
            csi_codes::DL_DELETE_LINE => line_ops::delete_lines(self.screen, params),
            csi_codes::SU_SCROLL_UP => line_ops::scroll_up(self.screen, params),
            csi_codes::SD_SCROLL_DOWN => line_ops::scroll_down(self.screen, params),

            csi_codes::DECSTBM_SET_MARGINS => margin_ops::set_margins(self.screen, params),

            csi_codes::SM_SET_MODE => mode_ops::set_mode(self.screen, params, intermediates),
            csi_codes::RM_RESET_MODE => mode_ops::reset_mode(self.screen, params, intermediates),

            csi_codes::SGR_SET_GRAPHICS => sgr_ops::apply(self.screen, params),

            other => tracing::warn!(final = %other, "unrecognised CSI final, ignored"),
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        if intermediates == esc_codes::G0_CHARSET_INTERMEDIATE {
            scs_ops::select_g0(&mut self.screen.alt_charset, byte);
            return;
        }
        if intermediates == esc_codes::G1_CHARSET_INTERMEDIATE {
            scs_ops::select_g1(byte);
            return;
        }
        match byte {
            esc_codes::RI_REVERSE_INDEX_UP => rendering::reverse_line_feed(self.screen),
            esc_codes::DECSC_SAVE_CURSOR => cursor_ops::save_cursor(self.screen),
            esc_codes::DECRC_RESTORE_CURSOR => cursor_ops::restore_cursor(self.screen),
            esc_codes::RIS_RESET_TERMINAL => self.screen.reset_to_initial_state(),
            other => tracing::trace!(byte = other, "unrecognised ESC final, ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use vte::Parser;

    use super::*;
    use crate::units::{col, height, row, width};

    fn feed(screen: &mut ScreenBuffer, bytes: &[u8], vt100_strict: bool) {
        let mut parser = Parser::new();
        let mut dispatcher = Dispatcher::new(screen, vt100_strict);
        for &b in bytes {
            parser.advance(&mut dispatcher, b);
        }
    }

    #[test]
    fn plain_text_prints_left_to_right() {
        let mut buf = ScreenBuffer::new(width(10), height(2)).unwrap();
        feed(&mut buf, b"Hi", false);
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().glyph, 'H');
        assert_eq!(buf.get_char(row(0) + col(1)).unwrap().glyph, 'i');
        assert_eq!(buf.cursor(), row(0) + col(2));
    }

    #[test]
    fn csi_cup_moves_cursor_one_based() {
        let mut buf = ScreenBuffer::new(width(10), height(10)).unwrap();
        feed(&mut buf, b"\x1b[3;5H", false);
        assert_eq!(buf.cursor(), row(2) + col(4));
    }

    #[test]
    fn sgr_then_print_sets_attribute_on_cell() {
        let mut buf = ScreenBuffer::new(width(10), height(2)).unwrap();
        feed(&mut buf, b"\x1b[31mX", false);
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().attr.fg, crate::cell::Color::Red);
    }

    #[test]
    fn vt100_strict_drops_rep_and_alt_screen() {
        let mut buf = ScreenBuffer::new(width(10), height(10)).unwrap();
        feed(&mut buf, b"A\x1b[5b", true);
        // REP dropped: only the initial 'A' printed, cursor advanced by 1.
        assert_eq!(buf.cursor(), row(0) + col(1));
        feed(&mut buf, b"\x1b[?1049h", true);
        assert!(!buf.is_alternate_screen());
    }

    #[test]
    fn dec_special_graphics_translates_while_selected() {
        let mut buf = ScreenBuffer::new(width(10), height(2)).unwrap();
        feed(&mut buf, b"\x1b(0q\x1b(Bq", false);
        assert_eq!(buf.get_char(row(0) + col(0)).unwrap().glyph, '\u{2500}');
        assert_eq!(buf.get_char(row(0) + col(1)).unwrap().glyph, 'q');
    }

    #[test]
    fn ris_resets_the_whole_buffer() {
        let mut buf = ScreenBuffer::new(width(10), height(10)).unwrap();
        feed(&mut buf, b"\x1b[31mABC\x1b[5;5H\x1bc", false);
        assert_eq!(buf.cursor(), row(0) + col(0));
        assert_eq!(buf.attr(), buf.default_attr());
    }
}
