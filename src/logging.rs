// src/logging.rs
pub const LOG_ENV: &str = "COUNT_BITS_LOG";
pub const LOG_STYLE_ENV: &str = "COUNT_BITS_LOG_STYLE";

/// Installs `env_logger` when `COUNT_BITS_LOG` is set; otherwise logging stays off.
pub fn init() {
    if std::env::var_os(LOG_ENV).is_some() {
        let env = env_logger::Env::new().filter(LOG_ENV).write_style(LOG_STYLE_ENV);
        // A second init (e.g. from tests) keeps the first logger.
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
