//! ファイル操作ヘルパー
//!
//! 標準ファイルシステム実装への薄いラッパー。

use crate::adapter::StdFileSystem;
use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::path::Path;

/// パスが存在するか（種別は問わない）
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    StdFileSystem.exists(path.as_ref())
}

/// 拡張子を返す（`Path::extension` の意味論。ドットファイルや拡張子なしは None）
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// ファイル全体をメモリに読み込む
///
/// open → サイズ実測 → 全読み込み → バイト数照合。どの段階の失敗も
/// `Error::Io` で返し、部分的なバッファは呼び出し側に渡らない。
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    StdFileSystem.read(path.as_ref())
}
