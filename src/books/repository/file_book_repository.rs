use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::{debug, warn};
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{LoadOutcome, Repository, SkippedRecord};

// FileBookRepository keeps the catalog as a pipe-delimited text file, one book per line.
#[derive(Debug, Default)]
pub struct FileBookRepository {}

impl FileBookRepository {
    pub fn new() -> Self {
        Self {}
    }
}

fn io_error(path: &Path) -> impl Fn(std::io::Error) -> LibraryError + '_ {
    move |err| LibraryError::from(err).with_path(path.display().to_string().as_str())
}

impl Repository<BookEntity> for FileBookRepository {
    fn load(&self, path: &Path) -> LibraryResult<LoadOutcome<BookEntity>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no data file at {}", path.display());
                return Ok(LoadOutcome::NotFound);
            }
            Err(err) => return Err(io_error(path)(err)),
        };

        let mut records = vec![];
        let mut skipped = vec![];
        for (ndx, line) in BufReader::new(file).lines().enumerate() {
            let line_no = ndx + 1;
            let parsed = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => BookEntity::parse(line.as_str())
                    .map_err(|err| LibraryError::malformed_line(err.to_string().as_str(), line_no)),
                // the undecodable line is consumed, so reading can carry on
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    Err(LibraryError::malformed_line("record is not valid UTF-8", line_no))
                }
                Err(err) => return Err(io_error(path)(err)),
            };
            match parsed {
                Ok(book) => records.push(book),
                Err(err) => {
                    warn!("skipping record in {}: {}", path.display(), err);
                    skipped.push(SkippedRecord { line: line_no, reason: err.to_string() });
                }
            }
        }
        Ok(LoadOutcome::Loaded { records, skipped })
    }

    fn save(&self, path: &Path, entities: &[BookEntity]) -> LibraryResult<usize> {
        let file = File::create(path).map_err(io_error(path))?;
        let mut writer = BufWriter::new(file);
        for book in entities {
            writeln!(writer, "{}", book.to_line()).map_err(io_error(path))?;
        }
        writer.flush().map_err(io_error(path))?;
        Ok(entities.len())
    }
}
