use crate::core::config::{FetchConfig, LABELS_FILENAME, MODEL_FILENAME};
use crate::core::download::Downloader;
use crate::core::extract;
use crate::error::{FetchError, Result};
use crate::utils::fs;
use std::path::Path;

/// Runs the full fetch pipeline: ensure directory, download, extract,
/// classify/rename, verify, cleanup. Any step's failure aborts the rest.
pub fn run(config: &FetchConfig) -> Result<()> {
    fs::ensure_dir_exists(&config.assets_dir)?;

    let archive_path = config.archive_path();

    let downloader = Downloader::new(config.timeout);
    downloader.download_file(&config.model_url, &archive_path)?;

    extract::extract_zip(&archive_path, &config.assets_dir)?;

    classify_and_rename(config)?;
    verify_outputs(config)?;

    fs::remove_file_if_exists(&archive_path)?;

    println!(
        "Done! Model and labels are ready in {}",
        config.assets_dir.display()
    );
    Ok(())
}

/// Scans the immediate contents of the assets directory once, in sorted name
/// order, and renames the first `.tflite` match and the first
/// case-insensitive `label*.txt` match to their canonical filenames.
/// Later matches and unrelated entries are left in place.
pub fn classify_and_rename(config: &FetchConfig) -> Result<()> {
    let mut model_found = false;
    let mut labels_found = false;

    for name in sorted_file_names(&config.assets_dir)? {
        // Lossy view only for rule matching; the real name is used for the
        // rename so non-UTF-8 filenames are still handled
        let display = name.to_string_lossy();
        if !model_found && display.ends_with(".tflite") {
            let src = config.assets_dir.join(&name);
            rename_if_needed(&src, &config.model_path())?;
            println!("Model saved as: {}", config.model_path().display());
            model_found = true;
        } else if !labels_found
            && display.to_lowercase().contains("label")
            && display.ends_with(".txt")
        {
            let src = config.assets_dir.join(&name);
            rename_if_needed(&src, &config.labels_path())?;
            println!("Labels saved as: {}", config.labels_path().display());
            labels_found = true;
        }
    }

    Ok(())
}

/// Confirms both canonical output files exist. A run where extraction
/// produced no matching file is an error, not a silent success.
pub fn verify_outputs(config: &FetchConfig) -> Result<()> {
    if !config.model_path().is_file() {
        return Err(FetchError::MissingArtifact {
            name: MODEL_FILENAME.to_string(),
        });
    }
    if !config.labels_path().is_file() {
        return Err(FetchError::MissingArtifact {
            name: LABELS_FILENAME.to_string(),
        });
    }
    Ok(())
}

fn sorted_file_names(dir: &Path) -> Result<Vec<std::ffi::OsString>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name());
        }
    }
    names.sort();
    Ok(names)
}

fn rename_if_needed(src: &Path, dst: &Path) -> Result<()> {
    if src != dst {
        std::fs::rename(src, dst)?;
    }
    Ok(())
}
