//! 入力処理モジュール
//!
//! バイト列からの論理キーのデコードと、キーからコマンドへの対応付けを提供

pub mod command;
pub mod decoder;
pub mod key;

// 公開API
pub use command::{Command, Movement};
pub use decoder::KeyDecoder;
pub use key::Key;
