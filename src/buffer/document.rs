//! 文書バッファ
//!
//! ファイルの行順に並んだ `Row` の列を保持する。

use super::row::Row;
use crate::config::DEFAULT_TAB_STOP;
use crate::error::BufferError;

/// 行の順序付き列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
    tab_stop: usize,
}

impl Document {
    /// 指定タブ幅の空文書を作成
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            tab_stop: tab_stop.max(1),
        }
    }

    /// 行の内容から文書を作成
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut document = Self::new(tab_stop);
        for line in lines {
            document.append_row(line);
        }
        document
    }

    /// 末尾に行を追加
    pub fn append_row(&mut self, content: impl Into<Vec<u8>>) {
        self.rows.push(Row::new(content.into(), self.tab_stop));
    }

    /// 文字を挿入
    ///
    /// 列は `[0, 行長]` に丸める。戻り値は実際に挿入した列。
    pub fn insert_char(&mut self, row_index: usize, column: usize, byte: u8) -> Result<usize, BufferError> {
        let len = self.rows.len();
        let tab_stop = self.tab_stop;
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(BufferError::RowOutOfRange { index: row_index, len })?;
        Ok(row.insert(column, byte, tab_stop))
    }

    /// 行数
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// 行の論理長（末尾の未作成行は 0）
    pub fn row_len(&self, index: usize) -> usize {
        self.rows.get(index).map_or(0, Row::len)
    }

    /// 論理列を描画列に変換（行が無ければ 0）
    pub fn column_to_render_column(&self, index: usize, column: usize) -> usize {
        self.rows
            .get(index)
            .map_or(0, |row| row.cx_to_rx(column, self.tab_stop))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}
