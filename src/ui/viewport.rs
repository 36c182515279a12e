//! ビューポート管理
//!
//! カーソルが常に画面内に収まるよう、行・列のスクロール位置を最小限だけ動かす。

use crate::buffer::Document;
use crate::editor::Cursor;
use crate::terminal::Geometry;

/// ステータスバーとメッセージバーの行数
pub const BAR_ROWS: usize = 2;

/// 画面に表示する文書の矩形領域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// 表示の開始行
    pub row_offset: usize,
    /// 表示の開始列（描画列）
    pub col_offset: usize,
    /// 表示可能な行数
    pub screen_rows: usize,
    /// 表示可能な列数
    pub screen_cols: usize,
}

/// スクロール再計算の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub row_offset: usize,
    pub col_offset: usize,
    pub rx: usize,
}

impl Viewport {
    pub fn new(screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows: screen_rows.max(1),
            screen_cols: screen_cols.max(1),
        }
    }

    /// 端末サイズからバー2行分を除いた領域
    pub fn for_terminal(geometry: Geometry) -> Self {
        Self::new(geometry.rows.saturating_sub(BAR_ROWS), geometry.cols)
    }

    /// カーソル位置からスクロール位置と描画列を再計算
    pub fn recompute(&self, cursor: &Cursor, document: &Document) -> Scroll {
        let rx = if cursor.cy < document.num_rows() {
            document.column_to_render_column(cursor.cy, cursor.cx)
        } else {
            0
        };

        Scroll {
            row_offset: follow(self.row_offset, cursor.cy, self.screen_rows),
            col_offset: follow(self.col_offset, rx, self.screen_cols),
            rx,
        }
    }

    /// 再計算結果を反映
    pub fn apply(&mut self, scroll: Scroll) {
        self.row_offset = scroll.row_offset;
        self.col_offset = scroll.col_offset;
    }

    /// 指定位置が表示領域内か
    pub fn contains(&self, row: usize, rx: usize) -> bool {
        (self.row_offset..self.row_offset + self.screen_rows).contains(&row)
            && (self.col_offset..self.col_offset + self.screen_cols).contains(&rx)
    }
}

/// `[offset, offset + extent)` に position が入るよう最小限動かす
fn follow(offset: usize, position: usize, extent: usize) -> usize {
    if position < offset {
        position
    } else if position >= offset + extent {
        position + 1 - extent
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(cx: usize, cy: usize) -> Cursor {
        Cursor { cx, cy, rx: 0 }
    }

    #[test]
    fn scrolls_down_minimally() {
        let document = Document::from_lines((0..30).map(|i| i.to_string()), 4);
        let viewport = Viewport::new(10, 80);

        let scroll = viewport.recompute(&cursor(0, 10), &document);
        assert_eq!(scroll.row_offset, 1);

        let scroll = viewport.recompute(&cursor(0, 25), &document);
        assert_eq!(scroll.row_offset, 16);
    }

    #[test]
    fn scrolls_up_to_cursor_row() {
        let document = Document::from_lines((0..30).map(|i| i.to_string()), 4);
        let mut viewport = Viewport::new(10, 80);
        viewport.row_offset = 20;

        let scroll = viewport.recompute(&cursor(0, 5), &document);
        assert_eq!(scroll.row_offset, 5);
    }

    #[test]
    fn horizontal_scroll_follows_render_column() {
        let document = Document::from_lines(["\t\t\tabcdef"], 4);
        let mut viewport = Viewport::new(10, 8);

        let scroll = viewport.recompute(&cursor(5, 0), &document);
        assert_eq!(scroll.rx, 14);
        assert_eq!(scroll.col_offset, 7);
        viewport.apply(scroll);
        assert!(viewport.contains(0, 14));

        let scroll = viewport.recompute(&cursor(0, 0), &document);
        assert_eq!(scroll.col_offset, 0);
    }

    #[test]
    fn trailing_row_has_zero_render_column() {
        let document = Document::from_lines(["\tx"], 4);
        let viewport = Viewport::new(10, 80);
        let scroll = viewport.recompute(&cursor(0, 1), &document);
        assert_eq!(scroll.rx, 0);
    }

    #[test]
    fn terminal_geometry_reserves_bar_rows() {
        let viewport = Viewport::for_terminal(Geometry { rows: 24, cols: 80 });
        assert_eq!(viewport.screen_rows, 22);
        assert_eq!(viewport.screen_cols, 80);

        let viewport = Viewport::for_terminal(Geometry { rows: 1, cols: 80 });
        assert_eq!(viewport.screen_rows, 1);
    }
}
