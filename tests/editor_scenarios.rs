// editor_scenarios.rs - キー操作シナリオと制御ループの統合テスト

use std::collections::VecDeque;
use std::io::{self, Write};
use tempfile::TempDir;
use tilde::buffer::Document;
use tilde::file::load_document;
use tilde::input::Key;
use tilde::terminal::ByteSource;
use tilde::ui::Viewport;
use tilde::{App, Editor, Flow};

fn editor_for(document: Document, screen_rows: usize) -> Editor {
    Editor::new(document, Viewport::new(screen_rows, 80))
}

/// 入力を台本から返し、出力を記録する端末
struct ScriptedTerminal {
    input: VecDeque<u8>,
    writes: Vec<Vec<u8>>,
}

impl ScriptedTerminal {
    fn new(input: &[u8]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            writes: Vec::new(),
        }
    }
}

impl ByteSource for ScriptedTerminal {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }
}

impl Write for ScriptedTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn down_down_end_lands_on_empty_last_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("three.txt");
    std::fs::write(&path, "a\tb\nhello\n\n").unwrap();

    let document = load_document(&path, 4).unwrap();
    assert_eq!(document.num_rows(), 3);

    let mut editor = editor_for(document, 10);
    for key in [Key::ArrowDown, Key::ArrowDown, Key::End] {
        assert_eq!(editor.process_key(key), Flow::Continue);
    }
    editor.scroll();

    assert_eq!(editor.cursor().cy, 2);
    assert_eq!(editor.cursor().cx, 0);
    assert_eq!(editor.cursor().rx, 0);
}

#[test]
fn insert_on_trailing_row_creates_it() {
    let mut editor = editor_for(Document::from_lines(["one", "two"], 4), 10);
    editor.process_key(Key::ArrowDown);
    editor.process_key(Key::ArrowDown);
    assert_eq!(editor.cursor().cy, editor.document().num_rows());

    editor.process_key(Key::Char(b'X'));

    assert_eq!(editor.document().num_rows(), 3);
    assert_eq!(editor.document().row(2).unwrap().chars(), b"X");
    assert_eq!(editor.cursor().cx, 1);
    assert_eq!(editor.cursor().cy, 2);
}

#[test]
fn insert_into_empty_document() {
    let mut editor = editor_for(Document::default(), 10);
    editor.process_key(Key::Char(b'\t'));
    editor.process_key(Key::Char(b'x'));
    editor.scroll();

    assert_eq!(editor.document().row(0).unwrap().render(), b"    x");
    assert_eq!(editor.cursor().cx, 2);
    assert_eq!(editor.cursor().rx, 5);
}

#[test]
fn page_down_never_passes_the_trailing_row() {
    let lines: Vec<String> = (0..50).map(|i| format!("line {}", i)).collect();
    let mut editor = editor_for(Document::from_lines(lines, 4), 20);
    assert_eq!(editor.viewport().row_offset, 0);

    for _ in 0..5 {
        editor.process_key(Key::PageDown);
        editor.scroll();
        assert!(editor.cursor().cy <= editor.document().num_rows());
    }
    assert_eq!(editor.cursor().cy, 50);
}

#[test]
fn control_loop_renders_between_keys_and_quits() {
    let terminal = ScriptedTerminal::new(b"\x1b[Bz\x11");
    let editor = editor_for(Document::from_lines(["first", "second"], 4), 5);
    let mut app = App::with_terminal(terminal, editor);

    app.run().unwrap();

    // 3キー分の描画 + 終了時のクリア
    let writes = &app.terminal().writes;
    assert_eq!(writes.len(), 4);
    for frame in &writes[..3] {
        assert!(frame.starts_with(b"\x1b[?25l"));
        assert!(frame.ends_with(b"\x1b[?25h"));
    }
    assert_eq!(writes[3], b"\x1b[2J\x1b[1;1H".to_vec());

    // 2回目の描画は下移動後、3回目は挿入後の状態
    assert!(writes[1].ends_with(b"\x1b[2;1H\x1b[?25h"));
    assert!(writes[2].ends_with(b"\x1b[2;2H\x1b[?25h"));
    assert_eq!(app.editor().document().row(1).unwrap().chars(), b"zsecond");
}

#[test]
fn help_message_is_shown_on_start() {
    let terminal = ScriptedTerminal::new(b"\x11");
    let editor = editor_for(Document::default(), 5);
    let mut app = App::with_terminal(terminal, editor);
    app.run().unwrap();

    let first = &app.terminal().writes[0];
    assert!(first
        .windows(b"HELP: Ctrl-Q = quit".len())
        .any(|window| window == b"HELP: Ctrl-Q = quit"));
}
