//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 環境変数 HOME からホームディレクトリを解決する実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        env::var("HOME")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .map(HomeDir::new)
            .ok_or_else(|| Error::config("home directory unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env_var<F: FnOnce()>(key: &str, value: Option<&str>, f: F) {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = env::var(key).ok();
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
        f();
        match original {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    #[test]
    fn test_resolve_home_dir_uses_home_env() {
        with_env_var("HOME", Some("/tmp/progbase_home"), || {
            let home = StdEnvResolver.resolve_home_dir().unwrap();
            assert_eq!(home.as_ref(), std::path::Path::new("/tmp/progbase_home"));
        });
    }

    #[test]
    fn test_missing_home_is_config_error() {
        with_env_var("HOME", None, || {
            let err = StdEnvResolver.resolve_home_dir().unwrap_err();
            assert!(matches!(err, Error::Config(ref m) if m == "home directory unavailable"));
        });
    }

    #[test]
    fn test_empty_home_is_config_error() {
        with_env_var("HOME", Some(""), || {
            let err = StdEnvResolver.resolve_home_dir().unwrap_err();
            assert!(matches!(err, Error::Config(_)));
        });
    }
}
