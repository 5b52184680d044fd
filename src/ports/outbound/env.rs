//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリを実行環境から解決する。
//! パス構築はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境から解決する
    ///
    /// 未設定・空の場合は `Error::Config`。I/O は行わない。
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;
}
