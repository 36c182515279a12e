//! ファイル読み込み
//!
//! 改行で行に分割し、末尾の CR/LF を取り除いて文書に追加する。
//! エンコーディングの解釈は行わずバイト列のまま扱う。

use crate::buffer::Document;
use crate::error::FileError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// ファイルを開いて文書を作成
pub fn load_document<P: AsRef<Path>>(path: P, tab_stop: usize) -> Result<Document, FileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| FileError::Open {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    let mut document = Document::new(tab_stop);
    let count = read_rows(BufReader::new(file), &mut document).map_err(|err| FileError::Read {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    log::info!("loaded {} rows from {}", count, path.display());
    Ok(document)
}

/// 読み込み元の各行を文書に追加
///
/// 戻り値は追加した行数。
pub fn read_rows<R: BufRead>(mut reader: R, document: &mut Document) -> io::Result<usize> {
    let mut count = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        document.append_row(line.as_slice());
        count += 1;
    }

    Ok(count)
}
