//! 時刻取得の抽象
//!
//! ロガーはこの trait 経由で「現在のローカル時刻」を取得し、
//! ログ行の整形と日付別ファイル名の計算に使う。

use chrono::NaiveDateTime;

/// 時刻取得の抽象
///
/// 実装は `adapter::StdClock` やテスト用の固定時刻など。
/// 失敗しない契約: 時刻を取得できない実装は Unix エポックを返す
/// （決定的なフォールバック）。
pub trait Clock: Send + Sync {
    /// 現在のローカル壁時計時刻（秒精度で使用される）
    fn now_local(&self) -> NaiveDateTime;
}
