use std::fs;
use std::path;

use crate::error::*;

/// Create a `_lumen.yml` with the theme's default settings
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = "./")]
    pub(crate) directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let path = create_settings_file(&self.directory)?;
        log::info!("Created {}", path.display());

        Ok(())
    }
}

pub(crate) fn create_settings_file(dest: &path::Path) -> Result<path::PathBuf> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let path = dest.join(lumen_config::SETTINGS_FILE_NAMES[0]);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let content = lumen_config::SiteSettings::default().to_yaml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
