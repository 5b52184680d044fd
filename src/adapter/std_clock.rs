//! 標準時刻実装（chrono::Local を委譲）

use crate::ports::outbound::Clock;
use chrono::{Local, NaiveDateTime};

/// ローカルタイムゾーンの現在時刻を返す Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
