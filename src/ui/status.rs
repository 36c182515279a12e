//! ステータスメッセージ
//!
//! メッセージバーに表示する単一スロットの時限付きメッセージ。

use std::time::{Duration, Instant};

/// メッセージの最大バイト数
pub const STATUS_MESSAGE_CAPACITY: usize = 80;
/// メッセージの表示時間
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// 時限付きメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// 表示テキスト
    text: String,
    /// 設定時刻
    created_at: Instant,
}

impl StatusMessage {
    /// 設定時刻を指定して作成
    pub fn new_at(text: impl Into<String>, created_at: Instant) -> Self {
        let mut text = text.into();
        let len = floor_char_boundary(&text, STATUS_MESSAGE_CAPACITY - 1).len();
        text.truncate(len);
        Self { text, created_at }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 指定時刻に表示対象か（設定から5秒未満）
    pub fn is_visible_at(&self, now: Instant) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.created_at) < MESSAGE_TIMEOUT
    }
}

/// `max_len` バイト以内で文字境界に収まる先頭部分
pub(crate) fn floor_char_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
