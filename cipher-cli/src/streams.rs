use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use cipher_core::alphabet::trim_end_bytes;
use log::debug;

use crate::error::AppError;

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads the whole input, from standard input for `-`, with trailing whitespace removed.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, AppError> {
    let mut text = Vec::new();
    let result = if is_stdio(path) {
        io::stdin().lock().read_to_end(&mut text).map(|_| ())
    } else {
        fs::read(path).map(|bytes| text = bytes)
    };
    result.map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    trim_end_bytes(&mut text);
    debug!("read {} byte(s) from '{}'", text.len(), path.display());
    Ok(text)
}

/// Writes `text` followed by a newline, to standard output for `-`.
pub(crate) fn write_output(path: &Path, text: &[u8]) -> Result<(), AppError> {
    let result = if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        write_line(&mut stdout, text).and_then(|()| stdout.flush())
    } else {
        fs::File::create(path).and_then(|mut file| write_line(&mut file, text))
    };
    result.map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote {} byte(s) to '{}'", text.len(), path.display());
    Ok(())
}

fn write_line<W: Write>(writer: &mut W, text: &[u8]) -> io::Result<()> {
    writer.write_all(text)?;
    writer.write_all(b"\n")
}
