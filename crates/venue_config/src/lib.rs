use config::{Config, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod models;
pub use config::ConfigError;
pub use models::*;

/// Environment variable prefix, e.g. `VENUE__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "VENUE";

/// Loads the application configuration.
///
/// Layers, later ones winning: serde defaults, `config/default.*`,
/// `config/{RUN_ENV}.*`, then `VENUE__*` environment variables. The config
/// directory can be moved with `VENUE_CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir =
        PathBuf::from(env::var("VENUE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    load_config_from(config_dir, &run_env)
}

/// Same as [`load_config`] with an explicit config directory and environment name.
pub fn load_config_from(config_dir: PathBuf, run_env: &str) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// The path is taken from `DOTENV_OVERRIDE`, defaulting to `.env`. A missing
/// file is not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
