use crate::core::{InputSource, MessageSink};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Reads guesses line by line from any buffered reader (stdin in the binary).
/// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
/// line reaches the parser as bad input instead of ending the session.
#[derive(Debug)]
pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for ConsoleInput<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for ConsoleOutput<W> {
    fn write_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<()> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}
