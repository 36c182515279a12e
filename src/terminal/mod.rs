//! ターミナルセッション
//!
//! raw モードの取得・解放、バイト単位の入力、1回書き込みのフレーム出力を提供する。
//! raw モードはガードが保持し、`Drop` で必ず元の設定に戻す。

pub mod geometry;

pub use geometry::Geometry;

use crate::error::TerminalError;
use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::os::fd::{AsFd, AsRawFd};

/// 1バイトずつ読み出せる入力源
pub trait ByteSource {
    /// 1バイト読み取る
    ///
    /// タイムアウトでデータが無い場合は `Ok(None)` を返す。
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// 事前に用意したバイト列（空になったらタイムアウト扱い）
impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pop_front())
    }
}

/// raw モードの取得ガード
///
/// 生存中は端末が raw モードになり、破棄時に取得前の設定を復元する。
pub struct RawModeGuard<F: AsFd = io::Stdin> {
    fd: F,
    original: Termios,
}

impl<F: AsFd> RawModeGuard<F> {
    /// 現在の設定を保存して raw モードへ切り替える
    pub fn acquire(fd: F, read_timeout_deciseconds: u8) -> Result<Self, TerminalError> {
        let original = termios::tcgetattr(&fd).map_err(|err| TerminalError::GetAttributes {
            message: err.to_string(),
        })?;

        let raw = raw_attributes(&original, read_timeout_deciseconds);
        termios::tcsetattr(&fd, SetArg::TCSAFLUSH, &raw).map_err(|err| {
            TerminalError::SetAttributes {
                message: err.to_string(),
            }
        })?;

        log::debug!("raw mode enabled on fd {}", fd.as_fd().as_raw_fd());
        Ok(Self { fd, original })
    }
}

impl<F: AsFd> Drop for RawModeGuard<F> {
    fn drop(&mut self) {
        let raw_fd = self.fd.as_fd().as_raw_fd();
        match termios::tcsetattr(&self.fd, SetArg::TCSAFLUSH, &self.original) {
            Ok(()) => log::debug!("terminal mode restored on fd {}", raw_fd),
            Err(err) => log::warn!("failed to restore terminal mode: {}", err),
        }
    }
}

/// raw モード用の端末属性を計算
///
/// エコー・行バッファ・シグナル生成・入力拡張処理・出力後処理を無効化し、
/// 8ビット文字、VMIN=0 / VTIME=タイムアウトの読み取りにする。
pub fn raw_attributes(original: &Termios, read_timeout_deciseconds: u8) -> Termios {
    let mut raw = original.clone();
    raw.local_flags
        .remove(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG | LocalFlags::IEXTEN);
    raw.input_flags.remove(
        InputFlags::BRKINT
            | InputFlags::IXON
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP,
    );
    raw.output_flags.remove(OutputFlags::OPOST);
    raw.control_flags.insert(ControlFlags::CS8);
    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = read_timeout_deciseconds.max(1);
    raw
}

/// 端末の排他的な制御セッション
pub struct TerminalSession {
    _guard: RawModeGuard,
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalSession {
    /// 標準入力を raw モードにしてセッションを開始
    pub fn enter(read_timeout_deciseconds: u8) -> Result<Self, TerminalError> {
        let guard = RawModeGuard::acquire(io::stdin(), read_timeout_deciseconds)?;

        Ok(Self {
            _guard: guard,
            stdin: io::stdin(),
            stdout: io::stdout(),
        })
    }

    /// 端末サイズ（行数・列数）を取得
    pub fn query_geometry(&mut self) -> Result<Geometry, TerminalError> {
        geometry::query(self)
    }
}

impl ByteSource for TerminalSession {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.stdin.lock().read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// stdout の行バッファを経由せず fd へ直接書き込む
///
/// 行バッファはフレームを改行ごとに分割してしまう。
impl Write for TerminalSession {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        nix::unistd::write(&self.stdout, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub(crate) fn write_error(err: io::Error) -> TerminalError {
    TerminalError::Write {
        message: err.to_string(),
    }
}
