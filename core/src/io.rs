//! Normalised I/O for the frame pipeline.
//!
//! - [`ByteSource`]: forward-only reads of N bytes that tell a clean end of
//!   input apart from a short read.
//! - [`InputSource`] / [`OutputSink`]: file, memory or caller-provided
//!   streams, opened into boxed readers/writers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::types::PipelineError;

/// Outcome of a fixed-size read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The whole buffer was filled.
    Complete,
    /// No byte was available.
    Eof,
    /// Input ended after this many bytes.
    Short(usize),
}

/// Sequential byte source consumed by the decoder.
pub trait ByteSource {
    /// Fill `buf` completely, or report how far the input got.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Fill>;

    /// Consume `\r` / `\n` bytes at the current position; returns how many.
    fn skip_line_breaks(&mut self) -> io::Result<usize>;
}

impl<R: BufRead + ?Sized> ByteSource for R {
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Fill> {
        let n = read_exact_or_eof(self, buf)?;
        Ok(if n == buf.len() {
            Fill::Complete
        } else if n == 0 {
            Fill::Eof
        } else {
            Fill::Short(n)
        })
    }

    fn skip_line_breaks(&mut self) -> io::Result<usize> {
        let mut skipped = 0;
        loop {
            let (n, more) = match self.fill_buf() {
                Ok(available) if available.is_empty() => return Ok(skipped),
                Ok(available) => {
                    let n = available
                        .iter()
                        .take_while(|&&b| b == b'\r' || b == b'\n')
                        .count();
                    (n, n == available.len())
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.consume(n);
            skipped += n;
            if !more {
                return Ok(skipped);
            }
        }
    }
}

/// Read until `buf` is full or the input ends; returns bytes read.
pub fn read_exact_or_eof<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;
    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(off)
}

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn BufRead + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    /// Capture the report in memory; the buffer is handed back by `open_output`.
    Memory,
}

/// Normalize input source into a boxed buffered reader
pub fn open_input(src: InputSource) -> Result<Box<dyn BufRead + Send>, PipelineError> {
    let reader: Box<dyn BufRead + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(path) => {
            let file = File::open(&path).map_err(|source| PipelineError::Open { path, source })?;
            Box::new(BufReader::new(file))
        }
        InputSource::Memory(bytes) => Box::new(Cursor::new(bytes)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer.
///
/// For [`OutputSink::Memory`] the second element holds the shared capture
/// buffer.
pub fn open_output(
    sink: OutputSink,
) -> Result<(Box<dyn Write + Send>, Option<Arc<Mutex<Vec<u8>>>>), PipelineError> {
    match sink {
        OutputSink::Writer(w) => Ok((w, None)),
        OutputSink::File(path) => {
            let file = File::create(&path).map_err(|source| PipelineError::Open { path, source })?;
            Ok((Box::new(BufWriter::new(file)), None))
        }
        OutputSink::Memory => {
            let buf = Arc::new(Mutex::new(Vec::new()));
            let writer = SharedBufferWriter { buf: buf.clone() };
            Ok((Box::new(writer), Some(buf)))
        }
    }
}

pub struct SharedBufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "report buffer lock poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
