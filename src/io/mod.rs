//! Destinations for the transformer's verbose report.
//!
//! Output goes to stdout by default, and can be redirected to a file, an
//! arbitrary stream or an in-memory buffer, or discarded.

use std::fs::File;
use std::io::{stdout, Error, ErrorKind, Result, Write};

/// Where report text is written
#[derive(Default)]
pub(crate) enum PrintTarget {
    #[default]
    Stdout,
    Sink,
    File(File),
    Stream(Box<dyn Write + Send + Sync>),
    Buffer(Vec<u8>),
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout => "Stdout",
            PrintTarget::Sink => "Sink",
            PrintTarget::File(_) => "File",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Buffer(_) => "Buffer",
        };
        write!(f, "PrintTarget::{name}")
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout => stdout().write(buf),
            PrintTarget::Sink => Ok(buf.len()),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Buffer(buffer) => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout => stdout().flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Sink | PrintTarget::Buffer(_) => Ok(()),
        }
    }
}

/// Redirection of report output.  Output is only produced when the
/// `verbose` setting is on.
pub trait ConfigurablePrintTarget {
    /// write to stdout (the default)
    fn print_to_stdout(&mut self);
    /// discard all output
    fn print_to_sink(&mut self);
    /// write to a file
    fn print_to_file(&mut self, file: File);
    /// write to any stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// collect output in an internal buffer, replacing any earlier buffer
    fn print_to_buffer(&mut self);
    /// text collected so far in the internal buffer.  Errors if output
    /// is not being buffered.
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout;
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink;
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).into_owned()),
            _ => Err(Error::new(ErrorKind::Other, "output is not being buffered")),
        }
    }
}
