//! ファイル操作モジュール
//!
//! テキストファイルの読み込みと起動引数のパス展開を提供

pub mod loader;
pub mod path;

// 公開API
pub use loader::{load_document, read_rows};
pub use path::{display_name, expand_path};
