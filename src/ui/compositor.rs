//! 画面合成
//!
//! 現在の状態から1フレーム分の出力バッファを組み立てる。
//! フレームは端末へ1回の書き込みで送るため、再描画時のちらつきが出ない。

use super::status::floor_char_boundary;
use crate::editor::Editor;
use crate::VERSION;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue};
use std::io;
use std::time::Instant;

/// ステータスバーに表示するファイル名の最大バイト数
const FILENAME_DISPLAY_LIMIT: usize = 20;
/// ファイル名が無い場合の表示
const NO_NAME: &str = "[No Name]";

/// 空文書のときに表示する案内
pub fn welcome_message() -> String {
    format!("Tilde editor -- version {}", VERSION)
}

/// 1フレーム分の出力を組み立てる
///
/// 同じ状態と時刻からは常に同一のバイト列を返す。
pub fn compose(editor: &Editor, now: Instant) -> io::Result<Vec<u8>> {
    let viewport = editor.viewport();
    let mut frame = Vec::with_capacity((viewport.screen_rows + 2) * (viewport.screen_cols + 8));

    queue!(frame, cursor::Hide, cursor::MoveTo(0, 0))?;
    draw_rows(&mut frame, editor)?;
    draw_status_bar(&mut frame, editor)?;
    draw_message_bar(&mut frame, editor, now)?;

    let position = editor.cursor();
    let screen_row = position.cy.saturating_sub(viewport.row_offset);
    let screen_col = position.rx.saturating_sub(viewport.col_offset);
    queue!(
        frame,
        cursor::MoveTo(to_u16(screen_col), to_u16(screen_row)),
        cursor::Show
    )?;

    Ok(frame)
}

fn draw_rows(frame: &mut Vec<u8>, editor: &Editor) -> io::Result<()> {
    let viewport = editor.viewport();
    let document = editor.document();

    for y in 0..viewport.screen_rows {
        let file_row = y + viewport.row_offset;
        match document.row(file_row) {
            Some(row) => {
                let render = row.render();
                if viewport.col_offset < render.len() {
                    let end = render.len().min(viewport.col_offset + viewport.screen_cols);
                    frame.extend_from_slice(&render[viewport.col_offset..end]);
                }
            }
            None if document.is_empty() && y == viewport.screen_rows / 2 => {
                draw_welcome(frame, viewport.screen_cols);
            }
            None => frame.push(b'~'),
        }

        queue!(frame, Clear(ClearType::UntilNewLine))?;
        frame.extend_from_slice(b"\r\n");
    }
    Ok(())
}

fn draw_welcome(frame: &mut Vec<u8>, screen_cols: usize) {
    let welcome = welcome_message();
    let len = welcome.len().min(screen_cols);
    let mut padding = (screen_cols - len) / 2;

    if padding > 0 {
        frame.push(b'~');
        padding -= 1;
    }
    frame.extend(std::iter::repeat(b' ').take(padding));
    frame.extend_from_slice(&welcome.as_bytes()[..len]);
}

fn draw_status_bar(frame: &mut Vec<u8>, editor: &Editor) -> io::Result<()> {
    let cols = editor.viewport().screen_cols;
    let num_rows = editor.document().num_rows();
    let name = editor.filename().unwrap_or(NO_NAME);

    let name = floor_char_boundary(name, FILENAME_DISPLAY_LIMIT);
    let left = format!("{} - {} lines", name, num_rows);
    let right = format!("{}/{}", editor.cursor().cy + 1, num_rows);

    queue!(frame, SetAttribute(Attribute::Reverse))?;

    let left = floor_char_boundary(&left, cols);
    let mut len = left.len();
    frame.extend_from_slice(left.as_bytes());
    while len < cols {
        if cols - len == right.len() {
            frame.extend_from_slice(right.as_bytes());
            break;
        }
        frame.push(b' ');
        len += 1;
    }

    queue!(frame, SetAttribute(Attribute::Reset))?;
    frame.extend_from_slice(b"\r\n");
    Ok(())
}

fn draw_message_bar(frame: &mut Vec<u8>, editor: &Editor, now: Instant) -> io::Result<()> {
    queue!(frame, Clear(ClearType::UntilNewLine))?;

    if let Some(message) = editor.status_message() {
        if message.is_visible_at(now) {
            let text = floor_char_boundary(message.text(), editor.viewport().screen_cols);
            frame.extend_from_slice(text.as_bytes());
        }
    }
    Ok(())
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
