//! Unified error taxonomy.
//!
//! Every module error funnels into [`PipelineError`]. Each error maps to a
//! legacy numeric [`ErrorCode`], and each code carries an explicit
//! [`ErrorCategory`]. The numeric family rule (`b - 1000 < c <= b`) is only
//! used by [`ErrorCategory::classify`] for raw codes coming from outside.

use std::fmt;
use std::io;
use std::path::PathBuf;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{error_families, ERR_FAMILY_WIDTH};
use crate::framing::FrameError;
use crate::transform::TransformError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    System,
    Message,
    Application,
    Unknown,
}

impl ErrorCategory {
    /// Family base code (`None` for `Unknown`).
    pub const fn base(self) -> Option<i32> {
        match self {
            ErrorCategory::System => Some(error_families::SYSTEM),
            ErrorCategory::Message => Some(error_families::MESSAGE),
            ErrorCategory::Application => Some(error_families::APPLICATION),
            ErrorCategory::Unknown => None,
        }
    }

    /// Whether raw `code` falls inside this family's bucket.
    pub fn contains(self, code: i32) -> bool {
        match self.base() {
            Some(base) => base - ERR_FAMILY_WIDTH < code && code <= base,
            None => false,
        }
    }

    /// Classify a raw numeric code by family bucket.
    pub fn classify(code: i32) -> Self {
        [ErrorCategory::System, ErrorCategory::Message, ErrorCategory::Application]
            .into_iter()
            .find(|c| c.contains(code))
            .unwrap_or(ErrorCategory::Unknown)
    }

    pub const fn label(self) -> &'static str {
        match self {
            ErrorCategory::System => "System Error",
            ErrorCategory::Message => "Message Error",
            ErrorCategory::Application => "Application Error",
            ErrorCategory::Unknown => "Unknown Error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Legacy numeric error codes, kept for the report line and exit status.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum ErrorCode {
    FileRead          = -1001,
    FileLength        = -1002,
    FileEof           = -1003,
    FileWrite         = -1004,

    MessageFormat     = -2001,
    MessageGeneral    = -2002,
    MessageConversion = -2003,
    MessageChecksum   = -2004,

    WrongArguments    = -3001,
    MemoryAllocation  = -3002,
}

impl ErrorCode {
    pub const fn category(self) -> ErrorCategory {
        use ErrorCode::*;
        match self {
            FileRead | FileLength | FileEof | FileWrite => ErrorCategory::System,
            MessageFormat | MessageGeneral | MessageConversion | MessageChecksum => ErrorCategory::Message,
            WrongArguments | MemoryAllocation => ErrorCategory::Application,
        }
    }

    /// Catalogue message for this code.
    pub const fn message(self) -> &'static str {
        use ErrorCode::*;
        match self {
            FileRead => "File read error",
            FileLength => "File length error",
            FileEof => "End of file",
            FileWrite => "File write error",
            MessageFormat => "Message format is wrong",
            MessageGeneral => "General message error",
            MessageConversion => "Message conversion error",
            MessageChecksum => "Message checksum check failure",
            WrongArguments => "Wrong arguments",
            MemoryAllocation => "Memory allocation failure",
        }
    }

    pub fn as_i32(self) -> i32 {
        self.into()
    }
}

/// Render the one-line categorized message for a raw code.
///
/// Unknown codes still get a line: `"[Unknown Error] General error, rc: 42"`.
pub fn error_line(code: i32) -> String {
    let category = ErrorCategory::classify(code);
    match ErrorCode::try_from(code) {
        Ok(known) => format!("[{}] {}", category, known.message()),
        Err(_) => format!("[{}] General error, rc: {}", category, code),
    }
}

/// Unified pipeline error covering I/O, framing, integrity and reporting.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input or output could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Frame or mask decoding failed.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Checksum verification or payload transform failed.
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// The report sink rejected a write.
    #[error("report write failed: {0}")]
    Report(#[source] io::Error),

    /// Report serialisation failed.
    #[error("report serialisation failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Caller passed an unusable configuration or path.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl PipelineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PipelineError::Open { .. } => ErrorCode::FileRead,
            PipelineError::Frame(e) => e.code(),
            PipelineError::Transform(e) => e.code(),
            PipelineError::Report(_) => ErrorCode::FileWrite,
            PipelineError::Serialize(_) => ErrorCode::MessageGeneral,
            PipelineError::InvalidArguments(_) => ErrorCode::WrongArguments,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// `[Category] catalogue message: detail`
    pub fn report_line(&self) -> String {
        let code = self.code();
        format!("[{}] {}: {}", code.category(), code.message(), self)
    }
}
