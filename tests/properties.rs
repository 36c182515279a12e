//! 文書モデル・カーソル・ビューポート・描画のプロパティテスト

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use std::time::Instant;
use tilde::buffer::{expand_tabs, Document, Row};
use tilde::editor::Cursor;
use tilde::input::Key;
use tilde::ui::{compose, Viewport};
use tilde::Editor;

fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(prop_oneof![Just(b'\t'), Just(b' '), b'a'..=b'z'], 0..40)
}

fn document_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(line_strategy(), 0..60)
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowLeft),
        Just(Key::ArrowRight),
        Just(Key::ArrowUp),
        Just(Key::ArrowDown),
        Just(Key::Home),
        Just(Key::End),
        Just(Key::PageUp),
        Just(Key::PageDown),
        Just(Key::Delete),
        Just(Key::Char(b'\r')),
        Just(Key::Char(127)),
        Just(Key::escape()),
        (b'a'..=b'z').prop_map(Key::Char),
        Just(Key::Char(b'\t')),
    ]
}

fn check_cursor_invariants(editor: &Editor) -> Result<(), TestCaseError> {
    let cursor = editor.cursor();
    let num_rows = editor.document().num_rows();
    prop_assert!(cursor.cy <= num_rows);
    if cursor.cy < num_rows {
        prop_assert!(cursor.cx <= editor.document().row_len(cursor.cy));
    } else {
        prop_assert_eq!(cursor.cx, 0);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn render_column_is_monotonic_and_matches_render(
        line in line_strategy(),
        tab_stop in 1usize..9
    ) {
        let row = Row::new(line.clone(), tab_stop);
        let mut previous = 0;
        for cx in 0..=row.len() {
            let rx = row.cx_to_rx(cx, tab_stop);
            prop_assert!(rx >= previous);
            prop_assert!(rx >= cx);
            previous = rx;
        }
        prop_assert_eq!(row.cx_to_rx(row.len(), tab_stop), row.render_len());
        let expected = expand_tabs(&line, tab_stop);
        prop_assert_eq!(row.render(), expected.as_slice());
        prop_assert!(row.render_len() >= row.len());
    }

    #[test]
    fn cursor_invariants_hold_after_every_key(
        lines in document_strategy(),
        keys in proptest::collection::vec(key_strategy(), 0..80),
        screen_rows in 1usize..30
    ) {
        let document = Document::from_lines(lines, 4);
        let mut editor = Editor::new(document, Viewport::new(screen_rows, 40));

        for key in keys {
            editor.process_key(key);
            check_cursor_invariants(&editor)?;
            editor.scroll();
            prop_assert!(editor.cursor().rx >= editor.cursor().cx);
        }
    }

    #[test]
    fn viewport_contains_cursor_after_single_step(
        lines in document_strategy(),
        keys in proptest::collection::vec(key_strategy(), 1..40),
        row_offset in 0usize..80,
        col_offset in 0usize..80,
        screen_rows in 1usize..25,
        screen_cols in 1usize..50
    ) {
        let document = Document::from_lines(lines, 4);
        let mut editor = Editor::new(document, Viewport::new(screen_rows, screen_cols));
        editor.viewport_mut().row_offset = row_offset;
        editor.viewport_mut().col_offset = col_offset;

        for key in keys {
            editor.process_key(key);
            editor.scroll();
            let cursor = *editor.cursor();
            prop_assert!(editor.viewport().contains(cursor.cy, cursor.rx));
        }
    }

    #[test]
    fn rendering_the_same_state_is_idempotent(
        lines in document_strategy(),
        keys in proptest::collection::vec(key_strategy(), 0..30),
        screen_rows in 1usize..25,
        screen_cols in 1usize..60
    ) {
        let document = Document::from_lines(lines, 4);
        let mut editor = Editor::new(document, Viewport::new(screen_rows, screen_cols));
        editor.set_status_message("HELP: Ctrl-Q = quit");
        for key in keys {
            editor.process_key(key);
        }
        editor.scroll();

        let now = Instant::now();
        let first = compose(&editor, now).unwrap();
        let second = compose(&editor, now).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn recompute_only_moves_when_needed(
        cy in 0usize..100,
        row_offset in 0usize..100,
        screen_rows in 1usize..30
    ) {
        let document = Document::from_lines((0..100).map(|i| i.to_string()), 4);
        let mut viewport = Viewport::new(screen_rows, 80);
        viewport.row_offset = row_offset;

        let scroll = viewport.recompute(&Cursor::at(0, cy), &document);
        if (row_offset..row_offset + screen_rows).contains(&cy) {
            prop_assert_eq!(scroll.row_offset, row_offset);
        } else if cy < row_offset {
            prop_assert_eq!(scroll.row_offset, cy);
        } else {
            prop_assert_eq!(scroll.row_offset + screen_rows - 1, cy);
        }
    }
}
