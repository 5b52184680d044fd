//! ファイルシステム Outbound ポート
//!
//! ロガーとファイルヘルパーはこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::Path;

/// ファイルメタデータ（サイズ・種別）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    len: u64,
    is_file: bool,
    is_dir: bool,
}

impl FileMetadata {
    pub fn new(len: u64, is_file: bool, is_dir: bool) -> Self {
        Self { len, is_file, is_dir }
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `adapter::StdFileSystem` やテスト用のモックなど。
pub trait FileSystem: Send + Sync {
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;

    /// ディレクトリを 1 階層だけ作成する（モード 0700、親は既存が前提）
    fn create_dir_private(&self, path: &Path) -> Result<(), Error>;

    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// ファイル全体を読み込む。実測サイズと読み込みバイト数の不一致は `Error::Io`。
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;

    /// パスが存在するか（metadata が取れれば true、種別は問わない）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
