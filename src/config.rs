//! エディタ設定
//!
//! `<config_dir>/tilde/config.json` と環境変数から設定を読み込む。

use crate::error::ConfigError;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// タブ幅の既定値
pub const DEFAULT_TAB_STOP: usize = 4;
/// 読み取りタイムアウトの既定値（ミリ秒）
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 100;

const ENV_TAB_STOP: &str = "TILDE_TAB_STOP";
const ENV_LOG_FILE: &str = "TILDE_LOG";
const ENV_LOG_LEVEL: &str = "TILDE_LOG_LEVEL";

/// 検証済みのエディタ設定
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// タブストップ幅
    pub tab_stop: usize,
    /// 1バイト読み取りのタイムアウト
    pub read_timeout: Duration,
    /// ログ出力先（未指定ならログ無効）
    pub log_file: Option<PathBuf>,
    /// ログレベル
    pub log_level: LevelFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// 設定ファイルの生の内容
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawConfig {
    tab_stop: usize,
    read_timeout_ms: u64,
    log_file: Option<PathBuf>,
    log_level: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            tab_stop: DEFAULT_TAB_STOP,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// 既定の設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tilde").join("config.json"))
    }

    /// 設定ファイルと環境変数から読み込む
    pub fn load() -> Result<Self, ConfigError> {
        let raw = match Self::default_path() {
            Some(path) if path.is_file() => read_raw(&path)?,
            _ => RawConfig::default(),
        };
        let raw = apply_env(raw, |key| std::env::var(key).ok());
        validate(raw)
    }

    /// JSON 文字列から読み込む（環境変数は参照しない）
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json).map_err(|err| ConfigError::InvalidFile {
            path: "<inline>".to_string(),
            message: err.to_string(),
        })?;
        validate(raw)
    }

    /// ログ出力先を上書き
    pub fn with_log_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// 端末の VTIME 値（1/10 秒単位）
    pub fn read_timeout_deciseconds(&self) -> u8 {
        let tenths = self.read_timeout.as_millis() / 100;
        tenths.clamp(1, u8::MAX as u128) as u8
    }
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidFile {
        path: path.display().to_string(),
        message,
    };
    let content = std::fs::read_to_string(path).map_err(|err| invalid(err.to_string()))?;
    serde_json::from_str(&content).map_err(|err| invalid(err.to_string()))
}

fn apply_env<F>(mut raw: RawConfig, lookup: F) -> RawConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(ENV_TAB_STOP) {
        // 数値でなければ 0 にして検証で弾く
        raw.tab_stop = value.trim().parse().unwrap_or(0);
    }
    if let Some(value) = lookup(ENV_LOG_FILE) {
        if !value.is_empty() {
            raw.log_file = Some(PathBuf::from(value));
        }
    }
    if let Some(value) = lookup(ENV_LOG_LEVEL) {
        raw.log_level = value;
    }
    raw
}

fn validate(raw: RawConfig) -> Result<EditorConfig, ConfigError> {
    if !(1..=16).contains(&raw.tab_stop) {
        return Err(invalid_value("tab_stop", raw.tab_stop));
    }
    if !(100..=25_500).contains(&raw.read_timeout_ms) {
        return Err(invalid_value("read_timeout_ms", raw.read_timeout_ms));
    }
    let log_level =
        LevelFilter::from_str(&raw.log_level).map_err(|_| invalid_value("log_level", &raw.log_level))?;

    Ok(EditorConfig {
        tab_stop: raw.tab_stop,
        read_timeout: Duration::from_millis(raw.read_timeout_ms),
        log_file: raw.log_file,
        log_level,
    })
}

fn invalid_value(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
