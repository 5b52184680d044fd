//! エラーハンドリング
//!
//! ライブラリ全体のエラー分類。検証エラーは I/O より前に返し、
//! OS 由来の失敗は元のエラーメッセージを保持したまま `Io` に包む。

use thiserror::Error;

/// エラー型
#[derive(Debug, Error)]
pub enum Error {
    /// 設定不備（HOME 環境変数の欠落など）
    #[error("configuration error: {0}")]
    Config(String),

    /// 入力不正（空のログメッセージなど）
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 未知のログレベル名
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// OS レベルの I/O 失敗（stat / mkdir / open / read / write）
    #[error("I/O error: {0}")]
    Io(String),

    /// 構築したパスが PATH_MAX を超過
    #[error("path exceeds PATH_MAX: {0} bytes")]
    PathTooLong(usize),
}

impl Error {
    /// I/O エラーをエラー型に変換
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 設定エラー
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// 入力不正エラー
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
