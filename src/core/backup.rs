//! Copy of the SQLite vault, optionally zipped.

use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy `db_path` to `dest`; with `compress` the copy is replaced by
    /// `dest.zip`. Returns the file that was finally written.
    pub fn backup(db_path: &str, dest: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);

        if !src.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_target, force)?;

        fs::copy(src, dest)?;

        let final_path = if compress {
            let zipped = compress_backup(dest, &final_target)?;
            if zipped != dest
                && let Err(e) = fs::remove_file(dest)
            {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            zipped
        } else {
            final_target
        };

        success(format!("Backup created: {}", final_path.display()));

        audit(
            db_path,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

fn compress_backup(path: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "timevault.sqlite".to_string());

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
