use crate::constants::GZIP_FILE_EXTENSION;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a reference source for reading, transparently decompressing `.gz` files.
pub fn open_source(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(path)
        .map_err(|e| Error::reference_load(path.display().to_string(), e.to_string()))?;

    let is_gzip = path
        .extension()
        .map_or(false, |ext| ext == GZIP_FILE_EXTENSION);

    if is_gzip {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads an entire reference source into a string.
pub fn read_source_to_string(path: &Path) -> Result<String, Error> {
    let mut contents = String::new();

    open_source(path)?
        .read_to_string(&mut contents)
        .map_err(|e| Error::reference_load(path.display().to_string(), e.to_string()))?;

    Ok(contents)
}
