//! data / state パス解決
//!
//! プログラム識別名とホームディレクトリから、プログラム別の
//! data / state ディレクトリを決定的に導出する。存在確認や作成は行わない。
//!
//! - data:  `<home>/.local/share/<program>/<relative>`
//! - state: `<home>/.local/state/<program>`

use crate::domain::ProgramName;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 構築パスの上限（バイト）。超過は切り詰めずに `Error::PathTooLong` で拒否する。
pub const PATH_MAX: usize = 4096;

/// data / state パス解決器
pub struct PathResolver {
    env: Arc<dyn EnvResolver>,
}

impl PathResolver {
    pub fn new(env: Arc<dyn EnvResolver>) -> Self {
        Self { env }
    }

    /// プログラム別 data ディレクトリ配下のパスを構築する
    pub fn data_path(
        &self,
        program: &ProgramName,
        relative: impl AsRef<Path>,
    ) -> Result<PathBuf, Error> {
        let home = self.env.resolve_home_dir()?;
        let path = home
            .join(".local")
            .join("share")
            .join(program.as_ref())
            .join(relative);
        bounded(path)
    }

    /// プログラム別 state（ログ）ディレクトリのパスを構築する
    pub fn state_path(&self, program: &ProgramName) -> Result<PathBuf, Error> {
        let home = self.env.resolve_home_dir()?;
        let path = home.join(".local").join("state").join(program.as_ref());
        bounded(path)
    }
}

/// 指定日のログファイル名: `log_YYYYMMDD.txt`
pub fn log_file_name(ts: NaiveDateTime) -> String {
    format!("log_{}.txt", ts.format("%Y%m%d"))
}

fn bounded(path: PathBuf) -> Result<PathBuf, Error> {
    let len = path.as_os_str().len();
    if len > PATH_MAX {
        return Err(Error::PathTooLong(len));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HomeDir;
    use chrono::NaiveDate;

    struct FixedEnv(PathBuf);

    impl EnvResolver for FixedEnv {
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new(self.0.clone()))
        }
    }

    struct NoHome;

    impl EnvResolver for NoHome {
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Err(Error::config("home directory unavailable"))
        }
    }

    fn resolver() -> PathResolver {
        PathResolver::new(Arc::new(FixedEnv(PathBuf::from("/home/alice"))))
    }

    #[test]
    fn test_data_path_layout() {
        let program = ProgramName::new("myprog");
        let path = resolver().data_path(&program, "config.toml").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/alice/.local/share/myprog/config.toml")
        );
    }

    #[test]
    fn test_data_path_nested_relative() {
        let program = ProgramName::new("myprog");
        let path = resolver().data_path(&program, "cache/index.bin").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/alice/.local/share/myprog/cache/index.bin")
        );
    }

    #[test]
    fn test_state_path_layout() {
        let program = ProgramName::new("myprog");
        let path = resolver().state_path(&program).unwrap();
        assert_eq!(path, PathBuf::from("/home/alice/.local/state/myprog"));
    }

    #[test]
    fn missing_home_is_config_error() {
        let resolver = PathResolver::new(Arc::new(NoHome));
        let program = ProgramName::new("myprog");
        assert!(matches!(
            resolver.data_path(&program, "x"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            resolver.state_path(&program),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn overlong_path_is_rejected_not_truncated() {
        let program = ProgramName::new("myprog");
        let relative = "a".repeat(PATH_MAX + 1);
        let err = resolver().data_path(&program, &relative).unwrap_err();
        assert!(matches!(err, Error::PathTooLong(len) if len > PATH_MAX));
    }

    #[test]
    fn test_log_file_name_zero_pads_month_and_day() {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap();
        assert_eq!(log_file_name(ts), "log_20260305.txt");
    }
}
