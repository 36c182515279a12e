//! tilde - raw モードで動く最小限のターミナルテキストビューア/エディタ
//!
//! 端末の排他的な制御、キー入力のデコード、タブ展開付きの文書モデル、
//! スクロール制御、1回書き込みの画面合成で構成される。

// コアモジュール
pub mod config;
pub mod error;
pub mod logging;

// 端末層
pub mod terminal;

// データ層
pub mod buffer;
pub mod file;

// ロジック層
pub mod editor;
pub mod input;

// 表示層
pub mod ui;

pub mod app;

/// バージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 公開API
pub use app::App;
pub use config::EditorConfig;
pub use editor::{Editor, Flow};
pub use error::{Result, TildeError};
