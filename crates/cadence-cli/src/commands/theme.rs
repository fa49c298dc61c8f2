use std::path::Path;

use cadence_core::Theme;

use crate::app::AppContext;
use crate::config::{default_theme_path, write_theme, ThemeSource};

pub fn handle_theme_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let (theme, source) = ctx.theme()?;

    if json {
        let output = serde_json::to_string_pretty(&theme)
            .map_err(|e| anyhow::anyhow!("JSON error: {}", e))?;
        println!("{}", output);
        return Ok(());
    }

    let origin = match source {
        ThemeSource::Explicit(path) | ThemeSource::Config(path) => path.display().to_string(),
        ThemeSource::BuiltIn => "built-in".to_string(),
    };
    println!("# source: {}", origin);
    print!("{}", theme.to_toml_string()?);
    Ok(())
}

pub fn handle_theme_init(ctx: &AppContext, path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => default_theme_path()?,
    };
    write_theme(&target, &Theme::default(), force)?;

    let mut stream = ctx.stream_with(Theme::default());
    stream.success(&format!("Wrote theme to {}", target.display()))?;
    Ok(())
}
