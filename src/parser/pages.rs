use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Form feed emitted by `pdftotext` at the start of every new page.
pub const PAGE_BREAK: char = '\x0c';

pub type Page = Vec<String>;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("cannot open input {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed after page {page}: {source}")]
    Read {
        page: usize,
        #[source]
        source: io::Error,
    },
}

/// Lazily splits text into pages on lines that begin with a form feed.
///
/// The boundary line itself opens the next page. The text before the first
/// boundary is always yielded as page 0, and whatever is buffered at the end
/// of input is yielded as the last page, even when empty.
pub struct Pages<R> {
    lines: io::Lines<R>,
    buffer: Page,
    emitted: usize,
    done: bool,
}

pub fn paginate<R: BufRead>(reader: R) -> Pages<R> {
    Pages {
        lines: reader.lines(),
        buffer: Vec::new(),
        emitted: 0,
        done: false,
    }
}

pub fn open_pages(path: &Path) -> Result<Pages<BufReader<File>>, PageError> {
    let file = File::open(path).map_err(|source| PageError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(paginate(BufReader::new(file)))
}

impl<R: BufRead> Iterator for Pages<R> {
    type Item = Result<Page, PageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            let mut line = match line {
                Ok(l) => l,
                Err(source) => {
                    self.done = true;
                    return Some(Err(PageError::Read {
                        page: self.emitted,
                        source,
                    }));
                }
            };
            // `lines()` drops "\n" but leaves the "\r" of CRLF input
            if line.ends_with('\r') {
                line.pop();
            }

            if line.starts_with(PAGE_BREAK) {
                let page = std::mem::replace(&mut self.buffer, vec![line]);
                self.emitted += 1;
                return Some(Ok(page));
            }
            self.buffer.push(line);
        }

        self.done = true;
        self.emitted += 1;
        Some(Ok(std::mem::take(&mut self.buffer)))
    }
}

impl<R: BufRead> std::iter::FusedIterator for Pages<R> {}
