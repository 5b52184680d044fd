//! Outbound ポート: 外界（FS・時刻・環境変数・コンソール）の抽象

pub mod clock;
pub mod console;
pub mod env;
pub mod fs;

pub use clock::Clock;
pub use console::{ConsoleSink, ConsoleStream};
pub use env::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
