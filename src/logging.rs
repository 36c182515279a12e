//! ロギングシステム
//!
//! `log` クレートのバックエンドとしてファイル出力ロガーを提供する。
//! raw モード中は stdout/stderr が画面そのものなので、ターミナルには一切書かない。

use crate::config::EditorConfig;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ファイルロガー
#[derive(Debug)]
pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    /// ログファイルを追記モードで開いてロガーを作成
    pub fn new<P: Into<PathBuf>>(path: P, level: LevelFilter) -> io::Result<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            level,
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// 設定に従ってグローバルロガーを登録
///
/// ログファイルが未設定なら何もしない（`log` のマクロは no-op になる）。
/// 戻り値は実際にロガーを登録したかどうか。
pub fn init(config: &EditorConfig) -> io::Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let level = config.log_level;
    let logger = FileLogger::new(path, level)?;
    log::set_boxed_logger(Box::new(logger))
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err.to_string()))?;
    log::set_max_level(level);
    Ok(true)
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use tempfile::TempDir;

    #[test]
    fn file_logger_respects_level() {
        let dir = TempDir::new().unwrap();
        let logger = FileLogger::new(dir.path().join("tilde.log"), LevelFilter::Info).unwrap();

        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn file_logger_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tilde.log");
        let logger = FileLogger::new(&path, LevelFilter::Debug).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("loaded 3 rows"))
                .level(Level::Info)
                .target("tilde::file")
                .build(),
        );
        logger.flush();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "INFO [tilde::file] loaded 3 rows\n");
    }
}
