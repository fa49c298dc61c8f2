use std::path::{Path, PathBuf};

use cadence_core::Theme;

/// Where a resolved theme came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// `--theme` or `CADENCE_THEME`
    Explicit(PathBuf),
    /// The XDG config file
    Config(PathBuf),
    BuiltIn,
}

pub fn default_theme_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("theme.toml"))
}

/// Resolve the theme: an explicit path must exist; otherwise the XDG file is
/// used when present, else the built-in default.
pub fn load_theme(explicit: Option<&Path>) -> anyhow::Result<(Theme, ThemeSource)> {
    if let Some(path) = explicit {
        let theme = read_theme(path)?;
        return Ok((theme, ThemeSource::Explicit(path.to_path_buf())));
    }

    match default_theme_path() {
        Ok(path) if path.exists() => {
            let theme = read_theme(&path)?;
            Ok((theme, ThemeSource::Config(path)))
        }
        Ok(_) => Ok((Theme::default(), ThemeSource::BuiltIn)),
        Err(err) => {
            tracing::debug!(error = %err, "no config directory; using built-in theme");
            Ok((Theme::default(), ThemeSource::BuiltIn))
        }
    }
}

pub fn read_theme(path: &Path) -> anyhow::Result<Theme> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read theme {}: {}", path.display(), e))?;
    Theme::from_toml_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to load theme {}: {}", path.display(), e))
}

pub fn write_theme(path: &Path, theme: &Theme, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Theme file {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents = theme.to_toml_string()?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write theme {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("cadence"));
        }
    }
    Ok(home_dir()?.join(".config").join("cadence"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
