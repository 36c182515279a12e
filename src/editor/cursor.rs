//! カーソル位置
//!
//! 論理列 `cx`・行 `cy` と、描画列 `rx` を保持する。

/// カーソル位置（すべて 0 ベース）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// 論理列
    pub cx: usize,
    /// 行
    pub cy: usize,
    /// 描画列（スクロール再計算で更新）
    pub rx: usize,
}

impl Cursor {
    /// 原点のカーソル
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定位置のカーソル
    pub fn at(cx: usize, cy: usize) -> Self {
        Self { cx, cy, rx: 0 }
    }
}
