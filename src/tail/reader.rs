//! File-backed tail reads

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::ReadError;

use super::budget::{LineBudget, Viewport};
use super::scanner::{Step, TailScanner};

/// Bytes read per backward step
pub const BLOCK_SIZE: usize = 8 * 1024;

/// Read the trailing content of `path` that fits `budget`.
///
/// The file is opened fresh on every call because it may have been replaced
/// since the last read. `viewport` only matters for
/// [`LineBudget::FitViewport`].
pub fn read_tail(path: &Path, budget: LineBudget, viewport: Viewport) -> Result<Vec<u8>, ReadError> {
    let metadata = std::fs::metadata(path).map_err(|e| classify(path, e))?;
    if metadata.is_dir() {
        return Err(ReadError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let mut file = File::open(path).map_err(|e| classify(path, e))?;
    let mut scanner = TailScanner::new(budget.rows(viewport), budget.wrap_width(viewport));
    scan_backward(&mut file, &mut scanner).map_err(|e| classify(path, e))
}

fn scan_backward<R: Read + Seek>(reader: &mut R, scanner: &mut TailScanner) -> io::Result<Vec<u8>> {
    let mut pos = reader.seek(SeekFrom::End(0))?;
    let mut block = vec![0u8; BLOCK_SIZE];
    // Built back to front, reversed once at the end.
    let mut kept = Vec::new();

    'scan: while pos > 0 {
        let start = pos.saturating_sub(BLOCK_SIZE as u64);
        let len = (pos - start) as usize;
        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(&mut block[..len])?;

        for &byte in block[..len].iter().rev() {
            match scanner.feed(byte) {
                Step::Keep => kept.push(byte),
                Step::Stop => break 'scan,
            }
        }
        pos = start;
    }

    kept.reverse();
    Ok(kept)
}

fn classify(path: &Path, err: io::Error) -> ReadError {
    match err.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ReadError::Unreadable {
            path: path.to_path_buf(),
            source: err,
        },
    }
}
