use adw_app::settings::{FileStore, SettingsManager};
use adw_app::{Config, MemoryRegion, Outcome};
use anyhow::Result;
use colored::Colorize;

pub fn execute(mut config: Config, hash: &str, base_url: Option<String>) -> Result<()> {
    if let Some(base_url) = base_url {
        config.api.base_url = base_url;
    }
    let settings = SettingsManager::open(
        FileStore::new(super::settings::settings_path(&config)),
        config.ui.default_settings(),
    )?
    .current();

    let navigator = adw_app::navigator(&config, None, settings, MemoryRegion::new());
    let outcome = super::block_on(navigator.navigate(hash))??;

    match outcome {
        Outcome::Rendered { view, .. } => {
            eprintln!("{} rendered {}", "✓".green(), view.cyan());
            println!("{}", navigator.region().html());
        }
        Outcome::NotFound => {
            eprintln!("{} no route matches {}", "404:".yellow().bold(), hash);
            println!("{}", navigator.region().html());
        }
        Outcome::Unchanged { view } => {
            eprintln!("{} view {} has no renderer", "⚠".yellow(), view.cyan());
        }
        Outcome::Superseded => {}
    }

    Ok(())
}
