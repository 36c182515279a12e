//! 端末サイズの取得
//!
//! OS の window size 問い合わせを優先し、列数が 0 の場合は
//! カーソルを右下へ飛ばしてからデバイスステータスレポートで位置を問い合わせる。

use super::{write_error, ByteSource};
use crate::error::TerminalError;
use crossterm::{cursor, queue};
use std::io::{self, Write};

/// カーソル位置レポートの要求シーケンス
const POSITION_REQUEST: &[u8] = b"\x1b[6n";
/// 応答バッファの上限
const REPLY_CAPACITY: usize = 32;
/// 画面端を確実に超える移動量
const FAR_EDGE: u16 = 999;

/// 端末の行数と列数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
}

/// 端末サイズを取得する
pub fn query<T: ByteSource + Write>(term: &mut T) -> Result<Geometry, TerminalError> {
    query_with(crossterm::terminal::size(), term)
}

/// OS の問い合わせ結果 `(cols, rows)` から端末サイズを決める
///
/// 列数が 0 か問い合わせ自体が失敗した場合のみ端末へ問い合わせる。
pub fn query_with<T: ByteSource + Write>(
    size: io::Result<(u16, u16)>,
    term: &mut T,
) -> Result<Geometry, TerminalError> {
    match size {
        Ok((cols, rows)) if cols > 0 => {
            return Ok(Geometry {
                rows: rows as usize,
                cols: cols as usize,
            });
        }
        Ok(_) => log::debug!("window size reported zero columns, probing terminal"),
        Err(err) => log::debug!("window size query failed ({}), probing terminal", err),
    }

    probe(term)
}

/// 自己申告による端末サイズ取得
pub fn probe<T: ByteSource + Write>(term: &mut T) -> Result<Geometry, TerminalError> {
    queue!(term, cursor::MoveRight(FAR_EDGE), cursor::MoveDown(FAR_EDGE)).map_err(write_error)?;
    term.write_all(POSITION_REQUEST).map_err(write_error)?;
    term.flush().map_err(write_error)?;

    read_position_report(term)
}

/// `ESC [ rows ; cols R` 形式の応答を1バイトずつ読む
///
/// 'R'・タイムアウト・読み取り失敗・バッファ上限のいずれかで打ち切る。
pub fn read_position_report<S: ByteSource>(source: &mut S) -> Result<Geometry, TerminalError> {
    let mut reply = Vec::with_capacity(REPLY_CAPACITY);
    while reply.len() < REPLY_CAPACITY - 2 {
        match source.read_byte() {
            Ok(Some(b'R')) | Ok(None) | Err(_) => break,
            Ok(Some(byte)) => reply.push(byte),
        }
    }

    parse_position_report(&reply).ok_or_else(|| TerminalError::WindowSize {
        message: format!("unexpected cursor position report {:?}", String::from_utf8_lossy(&reply)),
    })
}

/// 終端の 'R' を除いた応答を解析
pub fn parse_position_report(reply: &[u8]) -> Option<Geometry> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    let rows: usize = rows.parse().ok()?;
    let cols: usize = cols.parse().ok()?;

    if rows == 0 || cols == 0 {
        return None;
    }
    Some(Geometry { rows, cols })
}
