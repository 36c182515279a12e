//! メインアプリケーション
//!
//! 描画 → キー読み取り → 適用 を厳密に交互に繰り返す同期ループ。

use crate::buffer::Document;
use crate::config::EditorConfig;
use crate::editor::{Editor, Flow};
use crate::error::Result;
use crate::file::{display_name, load_document};
use crate::input::KeyDecoder;
use crate::terminal::{write_error, ByteSource, TerminalSession};
use crate::ui::{compose, Viewport};
use crossterm::{cursor, queue, terminal};
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// 起動時のメッセージ
pub const HELP_MESSAGE: &str = "HELP: Ctrl-Q = quit";

/// 端末とエディタ状態を束ねたアプリケーション
pub struct App<T = TerminalSession> {
    terminal: T,
    editor: Editor,
}

impl App<TerminalSession> {
    /// raw モードに入り、端末サイズを取得してファイルを読み込む
    ///
    /// 途中で失敗した場合もセッションの破棄で端末設定は復元される。
    pub fn new(config: &EditorConfig, path: Option<&Path>) -> Result<Self> {
        let mut terminal = TerminalSession::enter(config.read_timeout_deciseconds())?;
        let geometry = terminal.query_geometry()?;
        log::info!("terminal geometry {}x{}", geometry.cols, geometry.rows);

        let viewport = Viewport::for_terminal(geometry);
        let editor = match path {
            Some(path) => {
                let document = load_document(path, config.tab_stop)?;
                Editor::new(document, viewport).with_filename(display_name(path))
            }
            None => Editor::new(Document::new(config.tab_stop), viewport),
        };

        Ok(Self::with_terminal(terminal, editor))
    }
}

impl<T: ByteSource + Write> App<T> {
    /// 任意の端末で作成
    pub fn with_terminal(terminal: T, mut editor: Editor) -> Self {
        editor.set_status_message(HELP_MESSAGE);
        Self { terminal, editor }
    }

    /// 終了キーが押されるまでループ
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh_screen()?;

            let key = KeyDecoder::new(&mut self.terminal).next_key()?;
            if self.editor.process_key(key) == Flow::Quit {
                log::info!("quit requested");
                self.clear_screen()?;
                return Ok(());
            }
        }
    }

    /// スクロール位置を更新して1フレーム描画
    pub fn refresh_screen(&mut self) -> Result<()> {
        self.editor.scroll();
        let frame = compose(&self.editor, Instant::now()).map_err(write_error)?;
        self.write_all(&frame)
    }

    fn clear_screen(&mut self) -> Result<()> {
        let mut frame = Vec::new();
        queue!(frame, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))
            .map_err(write_error)?;
        self.write_all(&frame)
    }

    fn write_all(&mut self, frame: &[u8]) -> Result<()> {
        self.terminal.write_all(frame).map_err(write_error)?;
        self.terminal.flush().map_err(write_error)?;
        Ok(())
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }
}
