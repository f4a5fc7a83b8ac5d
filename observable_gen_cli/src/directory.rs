//! Emitter that mirrors generated units into a directory of JSON files.
//!
//! Every file access goes through a capability handle on the target
//! directory, so unit names derived from snapshot contents cannot reach
//! outside it.

use std::io::{self, BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use observable_gen::{CodeEmitter, GeneratedUnit};
use thiserror::Error;

use crate::error::CliError;

/// Failure while writing or removing one unit file.
#[derive(Debug, Error)]
pub enum UnitFileError {
    /// The file could not be created, written or removed.
    #[error("{path}: {source}")]
    Io {
        /// File being accessed, relative to the emit directory's parent.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// The unit could not be serialised.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Writes each unit to `<dir>/<unit name>.json`.
#[derive(Debug)]
pub struct DirectoryEmitter {
    root: Utf8PathBuf,
    dir: Dir,
}

impl DirectoryEmitter {
    /// Opens `root`, creating it when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when the directory cannot be created or
    /// opened.
    pub fn create(root: &Utf8Path) -> Result<Self, CliError> {
        Ok(Self {
            root: root.to_path_buf(),
            dir: ensure_dir(root)?,
        })
    }

    /// File name backing `unit_name`, relative to the emit directory.
    #[must_use]
    pub fn file_name(unit_name: &str) -> String {
        format!("{unit_name}.json")
    }

    /// Path of the file backing `unit_name`, for reporting.
    #[must_use]
    pub fn path_for(&self, unit_name: &str) -> Utf8PathBuf {
        self.root.join(Self::file_name(unit_name))
    }
}

impl CodeEmitter for DirectoryEmitter {
    type Error = UnitFileError;

    fn emit(&mut self, unit: &GeneratedUnit) -> Result<(), Self::Error> {
        let io_error = |source| UnitFileError::Io {
            path: self.path_for(&unit.name),
            source,
        };
        let file = self
            .dir
            .open_with(
                Self::file_name(&unit.name),
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, unit)?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)
    }

    fn retire(&mut self, unit_name: &str) -> Result<(), Self::Error> {
        match self.dir.remove_file(Self::file_name(unit_name)) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(UnitFileError::Io {
                path: self.path_for(unit_name),
                source,
            }),
        }
    }
}

/// Opens `path` as a directory handle, creating it first when missing.
pub(crate) fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|source| CliError::io(path, source))?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|source| CliError::io(path, source))
        }
        Err(open_err) => Err(CliError::io(path, open_err)),
    }
}

/// Opens the directory holding `path` and returns it with the file name.
pub(crate) fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), CliError> {
    let file_name = path.file_name().ok_or_else(|| {
        CliError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| CliError::io(parent, source))?;
    Ok((dir, file_name))
}
