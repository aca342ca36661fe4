//! Input acquisition for CLI commands
//!
//! Resolves the command-line paths into one readable stream: stdin when no
//! path is given, otherwise the named files (and the `.txt` files found
//! under named directories) concatenated in order.

use crate::constants::INPUT_FILE_EXTENSION;
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Expand the given paths into the list of export files to read
///
/// Every path is checked before anything is read, so a missing input fails
/// without partial output.
pub fn resolve_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if let Some(missing) = paths.iter().find(|path| !path.exists()) {
        return Err(Error::input_not_found(missing.display().to_string()));
    }

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let found = scan_directory(path)?;
            debug!("Found {} export files under {}", found.len(), path.display());
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let message = format!("Failed to scan directory {}", dir.display());
            match e.into_io_error() {
                Some(source) => Error::io(message, source),
                None => Error::configuration(message),
            }
        })?;

        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == INPUT_FILE_EXTENSION) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Open the input stream for the given paths
///
/// Files are opened up front and read lazily one after another. A file that
/// does not end in a newline is followed by one, so its last line cannot
/// merge with the first line of the next file.
pub fn open_inputs(paths: &[PathBuf]) -> Result<Box<dyn BufRead>> {
    if paths.is_empty() {
        debug!("No input paths given, reading stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    let files = resolve_input_files(paths)?;
    let mut stream: Box<dyn Read> = Box::new(io::empty());
    for file in &files {
        let (handle, needs_newline) = open_file(file)
            .map_err(|e| Error::io(format!("Failed to open {}", file.display()), e))?;
        stream = Box::new(stream.chain(handle));
        if needs_newline {
            stream = Box::new(stream.chain(&b"\n"[..]));
        }
    }

    info!("Reading {} input files", files.len());
    Ok(Box::new(BufReader::new(stream)))
}

/// Open a file positioned at its start, noting whether it lacks a final newline
fn open_file(path: &Path) -> io::Result<(File, bool)> {
    let mut file = File::open(path)?;
    let needs_newline = if file.metadata()?.len() == 0 {
        false
    } else {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        file.seek(SeekFrom::Start(0))?;
        last[0] != b'\n'
    };
    Ok((file, needs_newline))
}
