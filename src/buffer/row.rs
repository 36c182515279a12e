//! 行データ
//!
//! 論理内容（バイト列）と、タブをタブストップまでの空白に展開した描画内容を1組で保持する。

/// 論理内容と描画内容の組
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    /// 内容から行を作成し描画内容を計算
    pub fn new(chars: Vec<u8>, tab_stop: usize) -> Self {
        let render = expand_tabs(&chars, tab_stop);
        Self { chars, render }
    }

    /// 論理内容
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// タブ展開済みの描画内容
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// 論理長
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// 描画長
    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// 文字を挿入して描画内容を更新
    ///
    /// 範囲外の列は行末に丸める。戻り値は実際に挿入した列。
    pub fn insert(&mut self, at: usize, byte: u8, tab_stop: usize) -> usize {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update(tab_stop);
        at
    }

    /// 論理列を描画列に変換
    ///
    /// 通常文字は1、タブは次のタブストップまでの距離だけ進む。
    /// `expand_tabs` と同じ規則なので、行長を渡すと描画長と一致する。
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.chars.iter().take(cx).fold(0, |rx, &byte| {
            if byte == b'\t' {
                rx + tab_stop - (rx % tab_stop)
            } else {
                rx + 1
            }
        })
    }

    fn update(&mut self, tab_stop: usize) {
        self.render = expand_tabs(&self.chars, tab_stop);
    }
}

/// タブを次のタブストップまでの空白に展開
pub fn expand_tabs(chars: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = chars.iter().filter(|&&byte| byte == b'\t').count();
    let mut render = Vec::with_capacity(chars.len() + tabs * (tab_stop - 1));

    for &byte in chars {
        if byte == b'\t' {
            render.push(b' ');
            while render.len() % tab_stop != 0 {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }
    render
}
