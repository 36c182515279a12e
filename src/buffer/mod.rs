//! バッファ管理モジュール
//!
//! 行の論理内容とタブ展開済みの描画内容を管理する

pub mod document;
pub mod row;

// 公開API
pub use document::Document;
pub use row::{expand_tabs, Row};
pub use crate::error::BufferError;
