//! パス処理
//!
//! 起動引数のパス展開と、ステータスバー用の表示名

use std::path::{Path, PathBuf};

/// `~` と環境変数を展開
///
/// 展開できない変数を含む場合は引数をそのまま使う。
pub fn expand_path(arg: &str) -> PathBuf {
    match shellexpand::full(arg) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            log::warn!("path expansion failed for {}: {}", arg, err);
            PathBuf::from(arg)
        }
    }
}

/// ステータスバーに表示するファイル名
pub fn display_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
