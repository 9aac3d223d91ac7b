use crate::error::{FetchError, Result};
use crate::utils::fs;
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Extracts every entry of the ZIP at `archive_path` into `destination`,
/// preserving entry-relative paths.
///
/// Entry paths are validated before anything is written: an entry whose
/// resolved path would land outside `destination` fails the whole step.
/// The archive handle is dropped before this function returns, so the
/// caller may delete the file afterwards.
pub fn extract_zip(archive_path: &Path, destination: &Path) -> Result<()> {
    println!(
        "Extracting {} to {}",
        archive_path.display(),
        destination.display()
    );

    fs::ensure_dir_exists(destination)?;

    let file = File::open(archive_path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| FetchError::extraction(archive_path, e.to_string()))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| FetchError::extraction(archive_path, e.to_string()))?;
        let entry_name = entry.name().to_string();

        // enclosed_name rejects absolute paths and any `..` component
        let outpath = match entry.enclosed_name() {
            Some(path) => destination.join(path),
            None => return Err(FetchError::UnsafeArchivePath { entry: entry_name }),
        };

        if entry_name.ends_with('/') {
            fs::ensure_dir_exists(&outpath)?;
        } else {
            if let Some(p) = outpath.parent() {
                fs::ensure_dir_exists(p)?;
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut entry, &mut outfile)?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
            }
        }
    }

    println!("Extraction completed");
    Ok(())
}
