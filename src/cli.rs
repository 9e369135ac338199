//! Command-line interface for fontpad.
//!
//! This module handles CLI argument parsing and the headless export path.

use clap::Parser;
use std::path::{Path, PathBuf};

use fontpad_catalog::CatalogSource;
use fontpad_config::{FileSettingsStore, SettingsStore};

/// fontpad - a catalog-driven font preview and text editor
#[derive(Parser)]
#[command(name = "fontpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog resource: a path to a fonts.json file or an HTTP(S) URL
    #[arg(long, value_name = "PATH_OR_URL")]
    pub catalog: Option<String>,

    /// Settings file location (default: per-user config directory)
    #[arg(long, value_name = "PATH")]
    pub settings_file: Option<PathBuf>,

    /// Export the persisted editor content to PATH and exit without starting the UI
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug)]
pub struct RuntimeOptions {
    /// Where to load the font catalog from
    pub catalog: CatalogSource,
    /// Settings file override
    pub settings_file: Option<PathBuf>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Exit with the given code (headless operation completed)
    Exit(i32),
}

/// Process CLI arguments and handle headless operations
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    let catalog = cli
        .catalog
        .as_deref()
        .map(CatalogSource::parse)
        .unwrap_or_else(CatalogSource::default_location);

    if let Some(ref export_path) = cli.export {
        let result = headless_export(cli.settings_file.as_deref(), export_path);
        return CliResult::Exit(match result {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("fontpad: export failed: {e:#}");
                1
            }
        });
    }

    CliResult::Continue(RuntimeOptions {
        catalog,
        settings_file: cli.settings_file,
    })
}

/// Write the persisted editor content to a file, without starting the UI.
fn headless_export(settings_file: Option<&Path>, export_path: &Path) -> anyhow::Result<()> {
    let store = match settings_file {
        Some(path) => FileSettingsStore::with_path(path.to_path_buf()),
        None => FileSettingsStore::new(),
    };
    let settings = store.load();
    std::fs::write(export_path, &settings.content)?;
    println!(
        "Exported {} bytes to {}",
        settings.content.len(),
        export_path.display()
    );
    Ok(())
}
