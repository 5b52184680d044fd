//! アダプター（ポートの標準実装）
//!
//! 実運用では Std* を注入し、テストではモックを注入する。

pub mod std_clock;
pub mod std_console;
pub mod std_env_resolver;
pub mod std_fs;

pub use std_clock::StdClock;
pub use std_console::StdConsoleSink;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
