//! Lazy line source over any buffered reader.

use std::io::{self, BufRead};

/// Iterator over the raw lines of a reader.
///
/// Each item holds the bytes up to and including the `\n` terminator; the
/// last line may lack one. End of input is `None`, a read failure is
/// `Some(Err(_))`.
#[derive(Debug)]
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}
