//! ログ行の整形（純粋・I/O なし）
//!
//! レイアウト: `[M/DD/YYYY HH:MM:SS] LEVEL  message\n`
//!
//! - 月は先頭ゼロなし（1〜12）、日・時・分・秒は 2 桁ゼロ詰め、年は 4 桁
//! - レベルとメッセージの間は空白ちょうど 2 個
//! - 末尾の改行は常にちょうど 1 個
//!
//! 出力は LOG_MAX バイトに収まるよう、超過分のメッセージを
//! 文字境界で切り詰める（改行は失わない）。

use crate::domain::Severity;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// 整形済みログ 1 行の上限（バイト、末尾改行込み）
pub const LOG_MAX: usize = 1024;

/// タイムスタンプ・レベル・メッセージを 1 行に整形する
pub fn format_line(ts: NaiveDateTime, severity: Severity, message: &str) -> String {
    let mut line = format!(
        "[{}/{:02}/{:04} {:02}:{:02}:{:02}] {}  {}",
        ts.month(),
        ts.day(),
        ts.year(),
        ts.hour(),
        ts.minute(),
        ts.second(),
        severity.as_str(),
        message,
    );
    if line.len() >= LOG_MAX {
        let mut end = LOG_MAX - 1;
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        line.truncate(end);
    }
    line.push('\n');
    line
}
