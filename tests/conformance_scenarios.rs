// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The six literal byte-stream scenarios and the byte-boundary independence
//! property, driven straight through [`vterm_engine::Terminal::feed`]
//! without a real transport — the same "feed literal bytes into the
//! performer" approach the teacher's own `vt_100_ansi_parser` unit tests
//! use, just placed under `tests/` since these exercise the whole public
//! pipeline rather than one handler.

use pretty_assertions::assert_eq;
use vterm_engine::{
    cell::Color,
    units::{col, row},
    Flags, Terminal,
};

const COLS: usize = 10;
const ROWS: usize = 3;

fn row_text(term: &Terminal, r: usize) -> String {
    (0..COLS)
        .map(|c| term.screen().get_char(row(r) + col(c)).unwrap().glyph)
        .collect()
}

#[test]
fn scenario_1_plain_text_fills_left_to_right() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"HELLO");
    assert_eq!(row_text(&term, 0), "HELLO     ");
    assert_eq!(term.screen().cursor(), row(0) + col(5));
}

#[test]
fn scenario_2_crlf_moves_to_next_row() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"ABC\r\nDEF");
    assert_eq!(row_text(&term, 0), "ABC       ");
    assert_eq!(row_text(&term, 1), "DEF       ");
    assert_eq!(term.screen().cursor(), row(1) + col(3));
}

#[test]
fn scenario_3_clear_screen_then_home_then_print() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"\x1b[2J\x1b[H*");
    assert_eq!(row_text(&term, 0), "*         ");
    assert_eq!(row_text(&term, 1), "          ");
    assert_eq!(row_text(&term, 2), "          ");
    assert_eq!(term.screen().cursor(), row(0) + col(1));
}

#[test]
fn scenario_4_sgr_bold_red_then_reset() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"\x1b[31;1mX\x1b[0mY");
    let x = term.screen().get_char(row(0) + col(0)).unwrap();
    assert_eq!(x.glyph, 'X');
    assert!(x.attr.bold);
    assert_eq!(x.attr.fg, Color::Red);

    let y = term.screen().get_char(row(0) + col(1)).unwrap();
    assert_eq!(y.glyph, 'Y');
    assert_eq!(y.attr, term.screen().default_attr());
}

#[test]
fn scenario_5_insert_line_within_margin_scrolls_out_the_tail() {
    // §8 scenario 5's prose describes a two-row region (rows 1-2, DECSTBM
    // `2;3` one-based) where inserting a blank line at row 1 pushes "bbb"
    // down into row 2 and drops "ccc" off the bottom; row 0 sits outside
    // the region and is untouched. The scenario's own literal bytes
    // (`2;2r`) don't actually produce this — see
    // `scenario_5_literal_spec_bytes_hit_a_single_row_region` below for
    // what those bytes really do.
    let mut term = Terminal::create(3, ROWS, Flags::default()).unwrap();
    term.feed(b"aaa\r\nbbb\r\nccc");
    term.feed(b"\x1b[2;3r\x1b[2;1H\x1b[L");

    let rows: Vec<String> = (0..ROWS)
        .map(|r| {
            (0..3)
                .map(|c| term.screen().get_char(row(r) + col(c)).unwrap().glyph)
                .collect::<String>()
        })
        .collect();
    assert_eq!(rows[0], "aaa");
    assert_eq!(rows[1], "   ");
    assert_eq!(rows[2], "bbb");
}

#[test]
fn scenario_5_literal_spec_bytes_hit_a_single_row_region() {
    // §8 scenario 5's literal bytes are `\x1b[2;2r`, not the `2;3` used
    // above. `2;2r` sets a single-row region `[1, 1]` (0-indexed): IL at
    // that row has no row below it within the region to push "bbb" into,
    // so it just blanks row 1 and leaves row 2's "ccc" untouched — a
    // different, but internally consistent, outcome from the `2;3r` case.
    // Kept alongside the `2;3r` case so the suite documents the literal
    // bytes' actual behaviour rather than silently swapping them out.
    let mut term = Terminal::create(3, ROWS, Flags::default()).unwrap();
    term.feed(b"aaa\r\nbbb\r\nccc");
    term.feed(b"\x1b[2;2r\x1b[2;1H\x1b[L");

    let rows: Vec<String> = (0..ROWS)
        .map(|r| {
            (0..3)
                .map(|c| term.screen().get_char(row(r) + col(c)).unwrap().glyph)
                .collect::<String>()
        })
        .collect();
    assert_eq!(rows[0], "aaa");
    assert_eq!(rows[1], "   ");
    assert_eq!(rows[2], "ccc");
}

#[test]
fn scenario_6_osc_title_leaves_grid_untouched() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"\x1b]0;Hello\x07");
    assert_eq!(term.title(), "Hello");
    assert_eq!(row_text(&term, 0), "          ");
}

#[test]
fn byte_boundary_independence_across_every_split_point() {
    let scenarios: &[&[u8]] = &[
        b"HELLO",
        b"ABC\r\nDEF",
        b"\x1b[2J\x1b[H*",
        b"\x1b[31;1mX\x1b[0mY",
        b"\x1b]0;Hello\x07",
    ];

    for bytes in scenarios {
        let mut whole = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
        whole.feed(bytes);
        let expected: Vec<String> = (0..ROWS).map(|r| row_text(&whole, r)).collect();

        for split in 0..=bytes.len() {
            let (head, tail) = bytes.split_at(split);
            let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
            term.feed(head);
            term.feed(tail);
            let actual: Vec<String> = (0..ROWS).map(|r| row_text(&term, r)).collect();
            assert_eq!(actual, expected, "mismatch splitting {bytes:?} at {split}");
        }
    }
}

#[test]
fn wrap_at_last_column_then_scroll() {
    let mut term = Terminal::create(3, 2, Flags::default()).unwrap();
    term.feed(b"abcdef");
    assert_eq!(row_text_n(&term, 0, 3), "abc");
    assert_eq!(row_text_n(&term, 1, 3), "def");
    assert_eq!(term.screen().cursor(), row(1) + col(3));
}

fn row_text_n(term: &Terminal, r: usize, cols: usize) -> String {
    (0..cols)
        .map(|c| term.screen().get_char(row(r) + col(c)).unwrap().glyph)
        .collect()
}

#[test]
fn decsc_decrc_round_trips_cursor_and_attribute() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"\x1b[31m\x1b[2;3H\x1b7");
    term.feed(b"\x1b[10;10H\x1b[0m");
    term.feed(b"\x1b8");
    assert_eq!(term.screen().cursor(), row(1) + col(2));
    assert_eq!(term.screen().attr().fg, Color::Red);
}

#[test]
fn ed_2_then_home_matches_a_fresh_grid() {
    let mut term = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    term.feed(b"\x1b[31mSOMETHING\r\n\x1b[2J\x1b[H");

    let fresh = Terminal::create(COLS, ROWS, Flags::default()).unwrap();
    for r in 0..ROWS {
        for c in 0..COLS {
            assert_eq!(
                term.screen().get_char(row(r) + col(c)),
                fresh.screen().get_char(row(r) + col(c)),
            );
        }
    }
    assert_eq!(term.screen().cursor(), fresh.screen().cursor());
}
