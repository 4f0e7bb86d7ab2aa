// src/file.rs

use std::{
    fs::{ self, File },
    io::{ BufWriter, Write },
    path::{ Path, PathBuf },
};

use crate::config::options::{ DatasetKind, ExportOptions };
use crate::csv::write_row;
use crate::error::{ Error, Result };
use crate::store::DataSet;

/// Write a whole table to `path` (created or truncated), creating the
/// parent directory if needed.
pub fn write_dataset(path: &Path, ds: &DataSet, sep: char, include_headers: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    if include_headers {
        if let Some(h) = &ds.headers {
            write_row(&mut out, h, sep)?;
        }
    }
    for row in &ds.rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()?;
    logf!("Wrote {} rows to {}", ds.row_count(), path.display());
    Ok(())
}

/// Export according to the dashboard's options. Returns the path written.
pub fn write_export(export: &ExportOptions, kind: DatasetKind, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path(kind);
    write_dataset(&path, ds, export.delim(), export.include_headers)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_file_as_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "x").unwrap();
        let ds = DataSet::default();
        let err = write_dataset(&blocker.join("out.csv"), &ds, ',', true).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }
}
