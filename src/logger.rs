//! ロガー（合成ルート）
//!
//! 検証 → 時刻取得 → 整形 → コンソール出力 → （要求時のみ）日付別ファイル追記、
//! の直線フロー。コンソール出力は無条件・ベストエフォートで、ファイル書き込みの
//! 失敗に巻き込まれない。ファイル側の結果は `LogOutcome` で別途返す。

use crate::adapter::{StdClock, StdConsoleSink, StdEnvResolver, StdFileSystem};
use crate::domain::{ProgramName, Severity};
use crate::error::Error;
use crate::format::format_line;
use crate::paths::{log_file_name, PathResolver};
use crate::ports::outbound::{Clock, ConsoleSink, ConsoleStream, EnvResolver, FileSystem};
use chrono::NaiveDateTime;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// ファイル書き込みの結果（コンソール出力とは独立に報告する）
#[derive(Debug)]
pub enum FileWriteStatus {
    /// persist 指定なし
    NotRequested,
    /// 追記完了
    Written,
    /// 追記失敗（コンソール出力は既に完了している）
    Failed(Error),
}

impl FileWriteStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, FileWriteStatus::Written)
    }
}

/// `Logger::log` 1 回分の結果
#[derive(Debug)]
pub struct LogOutcome {
    pub file: FileWriteStatus,
}

/// レベル付きロガー
///
/// 起動時に一度構築し、参照で引き回す明示的な設定オブジェクト。
/// プログラム識別名はここで保持し、可変グローバルは存在しない。
pub struct Logger {
    program: ProgramName,
    paths: PathResolver,
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    console: Arc<dyn ConsoleSink>,
}

impl Logger {
    pub fn new(
        program: ProgramName,
        env: Arc<dyn EnvResolver>,
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        console: Arc<dyn ConsoleSink>,
    ) -> Self {
        Self {
            program,
            paths: PathResolver::new(env),
            fs,
            clock,
            console,
        }
    }

    /// 標準アダプター一式で構築する
    pub fn with_std(program: ProgramName) -> Self {
        Self::new(
            program,
            Arc::new(StdEnvResolver),
            Arc::new(StdFileSystem),
            Arc::new(StdClock),
            Arc::new(StdConsoleSink),
        )
    }

    pub fn program(&self) -> &ProgramName {
        &self.program
    }

    /// 1 件ログを出力する
    ///
    /// 空メッセージは `Error::InvalidInput` で、副作用ゼロのまま失敗する。
    /// それ以外は常にコンソールへ出力し、`persist` のときだけ
    /// `<state-dir>/log_YYYYMMDD.txt` へ追記する。ファイル側の失敗は
    /// 戻り値の `LogOutcome` に載せ、呼び出し自体は成功で返す。
    pub fn log(
        &self,
        severity: Severity,
        message: &str,
        persist: bool,
    ) -> Result<LogOutcome, Error> {
        if message.is_empty() {
            return Err(Error::invalid_input("empty log message"));
        }

        let ts = self.clock.now_local();
        let line = format_line(ts, severity, message);

        let stream = ConsoleStream::for_severity(severity);
        if let Err(e) = self.console.write_line(stream, &line) {
            eprintln!("log: console write failed: {}", e);
        }

        let file = if persist {
            match self.write_file(ts, &line) {
                Ok(()) => FileWriteStatus::Written,
                Err(e) => FileWriteStatus::Failed(e),
            }
        } else {
            FileWriteStatus::NotRequested
        };

        Ok(LogOutcome { file })
    }

    /// 日付別ログファイルへ 1 行追記する（open → write → close の独立サイクル）
    fn write_file(&self, ts: NaiveDateTime, line: &str) -> Result<(), Error> {
        let dir = self.paths.state_path(&self.program)?;
        ensure_dir(self.fs.as_ref(), &dir)?;

        let path = dir.join(log_file_name(ts));
        let mut w = self.fs.open_append(&path)?;
        w.write_all(line.as_bytes()).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })?;
        w.flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush '{}': {}", path.display(), e)))
    }
}

/// ディレクトリが無ければ 0700 で作成する
///
/// 既存エントリは種別を問わず成功扱い（ファイルが同名で存在する場合は
/// 後続の open が `Error::Io` で失敗する）。
fn ensure_dir(fs: &dyn FileSystem, path: &Path) -> Result<(), Error> {
    if fs.exists(path) {
        return Ok(());
    }
    fs.create_dir_private(path)
}
