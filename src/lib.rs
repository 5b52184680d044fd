//! プログラム共通ライブラリ
//!
//! 複数のプログラムで共有される基盤機能を提供します。
//!
//! - ファイルヘルパー（存在確認・拡張子取得・全読み込み）
//! - レベル付きロガー（コンソール出力＋日付別ログファイルへの追記）
//! - プログラム別 data / state ディレクトリのパス構築

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype・列挙）
pub mod domain;

/// Outbound ポート（外界の抽象）
pub mod ports;

/// アダプター（ポートの標準実装）
pub mod adapter;

/// data / state パス解決
pub mod paths;

/// ログ行の整形
pub mod format;

/// ロガー（合成ルート）
pub mod logger;

/// ファイル操作ヘルパー
pub mod fsutil;

pub use domain::{ProgramName, Severity};
pub use error::Error;
pub use logger::{FileWriteStatus, LogOutcome, Logger};
pub use paths::PathResolver;
