//! Zipping a finished runtime image for distribution.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::error::{ErrorExt, Result};

/// Packs an image directory into a single zip archive at `destination`.
///
/// Entries keep their paths relative to the image root, with forward
/// slashes, so the archive unpacks to the same layout on any platform.
/// Runs only after a successful link; the image directory must exist.
pub fn zip_image(image_dir: &Path, destination: &Path) -> Result<PathBuf> {
    let file = File::create(destination).fs_context("creating image archive", destination)?;
    let mut writer = ZipWriter::new(file);
    let file_options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(image_dir) {
        let entry = entry
            .map_err(io::Error::from)
            .fs_context("walking image directory", image_dir)?;
        let relative = entry.path().strip_prefix(image_dir)?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let entry_name = relative.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            writer.add_directory(entry_name, file_options)?;
        } else {
            writer.start_file(entry_name, file_options)?;
            let mut source =
                File::open(entry.path()).fs_context("reading image file", entry.path())?;
            io::copy(&mut source, &mut writer).fs_context("archiving image file", entry.path())?;
        }
    }

    writer.finish()?;
    log::info!("✓ Created image archive {}", destination.display());
    Ok(destination.to_path_buf())
}
