use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG: &str = "annc";
pub const ENV_PREFIX: &str = "ANNC";

#[annc_derive::annc_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: a base file, then `ANNC__`-prefixed environment overrides.
///
/// An explicit `path` must exist. Without one, `annc.{toml,json,yaml,...}` in the
/// working directory is used when present and defaults apply otherwise. Nested keys use
/// double underscores: `ANNC__LOGGING__LEVEL=debug` sets `logging.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source cannot be
/// parsed, or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use annc_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
