use boxoffice_core::Toggles;
use config::{ConfigError, Environment, File, FileFormat};
use std::path::Path;

/// Load the experiment toggles from a YAML file, with `TOGGLE_*` environment
/// overrides on top. Any failure leaves both experiments switched off.
pub fn load_toggles(path: impl AsRef<Path>) -> Toggles {
    let path = path.as_ref();

    match read_toggles(path) {
        Ok(toggles) => {
            tracing::info!(
                "Loaded toggles from {}: guest_checkout={} auto_seating={}",
                path.display(), toggles.guest_checkout, toggles.auto_seating
            );
            toggles
        }
        Err(e) => {
            tracing::warn!("Failed to load toggles from {}, using defaults: {}", path.display(), e);
            Toggles::default()
        }
    }
}

fn read_toggles(path: &Path) -> Result<Toggles, ConfigError> {
    config::Config::builder()
        .add_source(File::from(path).format(FileFormat::Yaml))
        .add_source(Environment::with_prefix("TOGGLE").try_parsing(true))
        .build()?
        .try_deserialize()
}
