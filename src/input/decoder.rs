//! キーデコーダ
//!
//! 端末から届く生バイト列を論理キーに変換する状態機械。
//! 不完全・未知のエスケープシーケンスはエラーにせず単独の ESC として扱う。

use super::key::{Key, ESC};
use crate::error::InputError;
use crate::terminal::ByteSource;

/// バイト列から論理キーを読み出すデコーダ
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// キーが1つ揃うまで読み取る
    ///
    /// 読み取りタイムアウトは吸収して待ち続ける。
    pub fn next_key(&mut self) -> Result<Key, InputError> {
        loop {
            if let Some(key) = self.try_next_key()? {
                return Ok(key);
            }
        }
    }

    /// 1回分の読み取りタイムアウト内でキーを読む
    ///
    /// 最初のバイトが届かなければ `Ok(None)`。
    pub fn try_next_key(&mut self) -> Result<Option<Key>, InputError> {
        let byte = match self.source.read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return Ok(None),
            Err(err) => {
                return Err(InputError::Read {
                    message: err.to_string(),
                })
            }
        };

        if byte != ESC {
            return Ok(Some(Key::Char(byte)));
        }
        Ok(Some(self.read_escape_sequence()))
    }

    /// ESC に続くシーケンスを解釈
    fn read_escape_sequence(&mut self) -> Key {
        let Some(first) = self.follow_up() else {
            return Key::escape();
        };
        let Some(second) = self.follow_up() else {
            return Key::escape();
        };

        let key = match (first, second) {
            (b'[', digit @ b'0'..=b'9') => match self.follow_up() {
                Some(b'~') => tilde_key(digit),
                _ => None,
            },
            (b'[', letter) => csi_letter_key(letter),
            (b'O', letter) => ss3_letter_key(letter),
            _ => None,
        };

        key.unwrap_or_else(|| {
            log::debug!("unrecognized escape sequence {:?} {:?}", first as char, second as char);
            Key::escape()
        })
    }

    /// 後続バイトを1つ読む（タイムアウト・読み取り失敗は None）
    fn follow_up(&mut self) -> Option<u8> {
        self.source.read_byte().ok().flatten()
    }
}

/// `ESC [ <digit> ~`
fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

/// `ESC [ <letter>`
fn csi_letter_key(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `ESC O <letter>`
fn ss3_letter_key(letter: u8) -> Option<Key> {
    match letter {
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}
