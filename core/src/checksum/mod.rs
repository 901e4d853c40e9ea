//! CRC-32/ISO-HDLC engine.
//!
//! Table driven (forward table + byte reflection table). The tables are
//! built once per process behind a `OnceLock` and shared read-only.

pub mod table;
pub mod crc32;

pub use table::Crc32Table;
pub use self::crc32::{crc32, reflect32, Crc32Hasher};
