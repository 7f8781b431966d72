mod api_config;
mod log_level;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const OVERRIDE_VARS: [&str; 7] = [
    "ASESOR_API_BASE_URL",
    "ASESOR_API_TIMEOUT_SECS",
    "ASESOR_API_LIST_SCOPE",
    "ASESOR_API_OWNER_FIELD",
    "ASESOR_LOG_LEVEL",
    "ASESOR_LOG_COLORED",
    "ASESOR_LOG_FILE",
];

/// Create a temp config directory, point ASESOR_CONFIG_DIR at it and
/// clear any override variables inherited from the environment
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "ASESOR_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(OVERRIDE_VARS.iter().map(|key| EnvGuard::remove(key)));
    (temp, guards)
}
