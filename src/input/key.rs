//! 論理キー
//!
//! デコーダが返す閉じたキーイベントの集合。

/// ESC
pub const ESC: u8 = 0x1b;
/// Backspace（DEL）
pub const BACKSPACE: u8 = 127;
/// Enter（raw モードでは CR）
pub const ENTER: u8 = b'\r';

/// Ctrl と組み合わせた文字のコード
pub const fn ctrl(byte: u8) -> u8 {
    byte & 0x1f
}

/// 論理キーイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// リテラル文字コード（ESC・Backspace・制御文字を含む）
    Char(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// 単独の ESC
    pub const fn escape() -> Self {
        Key::Char(ESC)
    }

    /// Ctrl+文字
    pub const fn ctrl(byte: u8) -> Self {
        Key::Char(ctrl(byte))
    }
}
