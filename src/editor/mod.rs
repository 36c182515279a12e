//! エディタ状態とキー処理
//!
//! 文書・カーソル・ビューポート・メッセージを1つの状態構造体にまとめ、
//! `(状態, コマンド) -> 状態` の遷移関数としてキー処理を実装する。
//! 端末 I/O には触れないため、遷移を直接テストできる。

pub mod cursor;

pub use cursor::Cursor;

use crate::buffer::Document;
use crate::input::{Command, Key, Movement};
use crate::ui::{StatusMessage, Viewport};
use std::time::Instant;

/// 1回のキー処理後に制御ループが取るべき動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// エディタ全体の状態
#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    filename: Option<String>,
    status: Option<StatusMessage>,
}

impl Editor {
    pub fn new(document: Document, viewport: Viewport) -> Self {
        Self {
            document,
            cursor: Cursor::new(),
            viewport,
            filename: None,
            status: None,
        }
    }

    /// ステータスバーに表示するファイル名を設定
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// メッセージを設定（前のメッセージは置き換え）
    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.set_status_message_at(text, Instant::now());
    }

    pub fn set_status_message_at(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage::new_at(text, now));
    }

    /// キーを1つ処理
    pub fn process_key(&mut self, key: Key) -> Flow {
        self.apply(Command::from_key(key))
    }

    /// コマンドを適用
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Move(movement) => self.move_cursor(movement),
            Command::LineStart => self.cursor.cx = 0,
            Command::LineEnd => self.cursor.cx = self.document.row_len(self.cursor.cy),
            Command::PageUp => self.page(Movement::Up),
            Command::PageDown => self.page(Movement::Down),
            Command::InsertChar(byte) => self.insert_char(byte),
            // 改行挿入と削除は未対応
            Command::InsertNewline
            | Command::DeleteBackward
            | Command::DeleteForward
            | Command::Refresh
            | Command::Cancel => {}
        }
        Flow::Continue
    }

    /// 矢印キーによる移動
    fn move_cursor(&mut self, movement: Movement) {
        let num_rows = self.document.num_rows();
        let cursor = &mut self.cursor;

        match movement {
            Movement::Left => {
                if cursor.cx > 0 {
                    cursor.cx -= 1;
                } else if cursor.cy > 0 {
                    cursor.cy -= 1;
                    cursor.cx = self.document.row_len(cursor.cy);
                }
            }
            Movement::Right => {
                if let Some(row) = self.document.row(cursor.cy) {
                    if cursor.cx < row.len() {
                        cursor.cx += 1;
                    } else if cursor.cx == row.len() {
                        cursor.cy += 1;
                        cursor.cx = 0;
                    }
                }
            }
            Movement::Up => cursor.cy = cursor.cy.saturating_sub(1),
            Movement::Down => {
                if cursor.cy < num_rows {
                    cursor.cy += 1;
                }
            }
        }

        let row_len = self.document.row_len(self.cursor.cy);
        self.cursor.cx = self.cursor.cx.min(row_len);
    }

    /// ページ単位の移動
    ///
    /// 画面の上端/下端へ移ってから、画面の行数分だけ上下移動を繰り返す。
    fn page(&mut self, direction: Movement) {
        let screen_rows = self.viewport.screen_rows;
        let target = match direction {
            Movement::Up => self.viewport.row_offset,
            _ => self.viewport.row_offset + screen_rows.saturating_sub(1),
        };
        self.cursor.cy = target.min(self.document.num_rows());

        for _ in 0..screen_rows {
            self.move_cursor(direction);
        }
    }

    /// カーソル位置に文字を挿入
    fn insert_char(&mut self, byte: u8) {
        if self.cursor.cy == self.document.num_rows() {
            self.document.append_row(Vec::new());
        }

        match self.document.insert_char(self.cursor.cy, self.cursor.cx, byte) {
            Ok(column) => self.cursor.cx = column + 1,
            Err(err) => log::warn!("insert ignored: {}", err),
        }
    }

    /// カーソルが画面内に収まるようスクロール位置を更新
    pub fn scroll(&mut self) {
        let scroll = self.viewport.recompute(&self.cursor, &self.document);
        self.cursor.rx = scroll.rx;
        self.viewport.apply(scroll);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }
}
