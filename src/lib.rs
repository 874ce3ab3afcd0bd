//! Quantities of digital information (bytes and bits) with binary and
//! decimal unit systems, human-readable formatting and parsing.
//!
//! ```
//! use bytesize::{Size, UnitSystem};
//!
//! let s = Size::from_kilobytes(1.5, UnitSystem::Binary);
//! assert_eq!(s.bytes(), 1536.0);
//! assert_eq!(s.to_string(), "1.5 KiB");
//! assert_eq!(Size::parse("1.5 KiB").unwrap(), s);
//! ```

mod parse;
mod size;
mod unit;

pub use parse::ParseSizeError;
pub use size::{BitsDisplay, Size, DEFAULT_PRECISION};
pub use unit::{round_to_nearest_bit, Notation, Prefix, Unit, UnitSystem, BITS_IN_BYTE, BYTES_IN_BIT};
