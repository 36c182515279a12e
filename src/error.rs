//! エラーハンドリングシステム
//!
//! tilde 全体で使用される統一されたエラー型と致命的エラー処理を定義する。
//! エラーは「致命的（プロセス終了）」と「吸収（無視・ESC扱い）」の二段階のみ。

use std::any::Any;
use std::fmt;
use std::io::Write;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum TildeError {
    /// ターミナル操作エラー
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    /// 入力読み取りエラー
    #[error(transparent)]
    Input(#[from] InputError),

    /// ファイル操作エラー
    #[error(transparent)]
    File(#[from] FileError),

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// ターミナル固有のエラー
#[derive(Error, Debug, Clone)]
pub enum TerminalError {
    #[error("tcgetattr failed: {message}")]
    GetAttributes { message: String },

    #[error("tcsetattr failed: {message}")]
    SetAttributes { message: String },

    #[error("window size query failed: {message}")]
    WindowSize { message: String },

    #[error("terminal write failed: {message}")]
    Write { message: String },
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone)]
pub enum InputError {
    #[error("read from stdin failed: {message}")]
    Read { message: String },
}

/// バッファ操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("row {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("open of {path} failed: {message}")]
    Open { path: String, message: String },

    #[error("read of {path} failed: {message}")]
    Read { path: String, message: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("invalid configuration file {path}: {message}")]
    InvalidFile { path: String, message: String },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// 失敗の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TerminalAttributes,
    WindowSize,
    Output,
    Input,
    FileOpen,
    FileRead,
    Config,
    Panic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::TerminalAttributes => "terminal attributes",
            ErrorKind::WindowSize => "window size",
            ErrorKind::Output => "output",
            ErrorKind::Input => "input",
            ErrorKind::FileOpen => "file open",
            ErrorKind::FileRead => "file read",
            ErrorKind::Config => "config",
            ErrorKind::Panic => "panic",
        };
        f.write_str(label)
    }
}

impl TildeError {
    /// エラーの種類を取得
    pub fn kind(&self) -> ErrorKind {
        match self {
            TildeError::Terminal(TerminalError::GetAttributes { .. })
            | TildeError::Terminal(TerminalError::SetAttributes { .. }) => {
                ErrorKind::TerminalAttributes
            }
            TildeError::Terminal(TerminalError::WindowSize { .. }) => ErrorKind::WindowSize,
            TildeError::Terminal(TerminalError::Write { .. }) => ErrorKind::Output,
            TildeError::Input(_) => ErrorKind::Input,
            TildeError::File(FileError::Open { .. }) => ErrorKind::FileOpen,
            TildeError::File(FileError::Read { .. }) => ErrorKind::FileRead,
            TildeError::Config(_) => ErrorKind::Config,
        }
    }
}

/// 致命的エラー処理
///
/// 画面をクリアし、診断メッセージを stderr に出力してステータス 1 で終了する。
/// ターミナルモードの復元は raw モードガードの `Drop` が担うため、
/// 呼び出し側はガードを破棄してからこの関数を呼ぶこと。
pub fn fail(kind: ErrorKind, message: &str) -> ! {
    log::error!("fatal {}: {}", kind, message);

    let mut out = std::io::stdout();
    let _ = crossterm::execute!(
        out,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    );
    let _ = out.flush();

    eprintln!("{}: {}", kind, message);
    std::process::exit(1);
}

/// パニックハンドラの設定
///
/// raw モード中は端末へ書かず、位置とメッセージをログにだけ残す。
/// アンワインドでガードが端末設定を戻した後、呼び出し側が
/// `catch_unwind` で受けて `fail(ErrorKind::Panic, ..)` を呼ぶ。
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());
        let message = panic_message(panic_info.payload());

        log::error!("panic at {}:{}: {}", location.file(), location.line(), message);
    }));
}

/// パニックのペイロードからメッセージを取り出す
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic payload".to_string()
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TildeError>;
