//! UIモジュール
//!
//! スクロール位置の計算と、1回の書き込みで出力する画面合成

pub mod compositor;
pub mod status;
pub mod viewport;

// 公開API
pub use compositor::{compose, welcome_message};
pub use status::StatusMessage;
pub use viewport::{Scroll, Viewport};
