//! コンソール出力 Outbound ポート
//!
//! 整形済みのログ 1 行を stdout / stderr のどちらかに書き出す。
//! 出力はベストエフォート: 失敗しても呼び出し全体を中断しない。

use crate::domain::Severity;
use anyhow::Result;

/// 出力先ストリーム
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Out,
    Err,
}

impl ConsoleStream {
    /// レベルに応じた出力先。Info より大きいレベルは stderr。
    pub fn for_severity(severity: Severity) -> Self {
        if severity > Severity::Info {
            ConsoleStream::Err
        } else {
            ConsoleStream::Out
        }
    }
}

/// コンソール出力抽象（Outbound ポート）
///
/// 実装は `adapter::StdConsoleSink` やテスト用のキャプチャ Sink など。
pub trait ConsoleSink: Send + Sync {
    /// 整形済みの 1 行（末尾改行込み）を指定ストリームへ書き出す
    fn write_line(&self, stream: ConsoleStream, line: &str) -> Result<()>;
}
