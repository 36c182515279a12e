//! コマンド定義
//!
//! 論理キーからエディタ操作への対応付け

use super::key::{ctrl, Key, BACKSPACE, ENTER, ESC};

/// カーソル移動方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Left,
    Right,
    Up,
    Down,
}

/// エディタコマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 終了（Ctrl-Q）
    Quit,
    /// 矢印キーによる移動
    Move(Movement),
    /// 行頭へ
    LineStart,
    /// 行末へ
    LineEnd,
    PageUp,
    PageDown,
    /// 文字挿入
    InsertChar(u8),
    /// Enter（未実装のため何もしない）
    InsertNewline,
    /// Backspace / Ctrl-H（何もしない）
    DeleteBackward,
    /// Delete（何もしない）
    DeleteForward,
    /// Ctrl-L（何もしない）
    Refresh,
    /// 単独 ESC（何もしない）
    Cancel,
}

impl Command {
    /// キーに対応するコマンド
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::ArrowLeft => Command::Move(Movement::Left),
            Key::ArrowRight => Command::Move(Movement::Right),
            Key::ArrowUp => Command::Move(Movement::Up),
            Key::ArrowDown => Command::Move(Movement::Down),
            Key::Home => Command::LineStart,
            Key::End => Command::LineEnd,
            Key::PageUp => Command::PageUp,
            Key::PageDown => Command::PageDown,
            Key::Delete => Command::DeleteForward,
            Key::Char(byte) => match byte {
                b if b == ctrl(b'q') => Command::Quit,
                ENTER => Command::InsertNewline,
                BACKSPACE => Command::DeleteBackward,
                b if b == ctrl(b'h') => Command::DeleteBackward,
                b if b == ctrl(b'l') => Command::Refresh,
                ESC => Command::Cancel,
                other => Command::InsertChar(other),
            },
        }
    }
}
