//! 標準コンソール出力実装（stdout / stderr へ書き出し）

use crate::ports::outbound::{ConsoleSink, ConsoleStream};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// stdout / stderr へそのまま書き出す ConsoleSink 実装
#[derive(Debug, Clone, Default)]
pub struct StdConsoleSink;

impl ConsoleSink for StdConsoleSink {
    fn write_line(&self, stream: ConsoleStream, line: &str) -> Result<()> {
        match stream {
            ConsoleStream::Out => {
                let mut out = io::stdout();
                out.write_all(line.as_bytes())
                    .context("Failed to write to stdout")?;
                out.flush().context("Failed to flush stdout")?;
            }
            ConsoleStream::Err => {
                io::stderr()
                    .write_all(line.as_bytes())
                    .context("Failed to write to stderr")?;
            }
        }
        Ok(())
    }
}
