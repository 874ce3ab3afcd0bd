use crate::size::Size;
use crate::unit::{Notation, Prefix, Unit, UnitSystem};
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSizeError {
    #[error("size is empty")]
    Empty,

    #[error("invalid number `{token}` in size")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("number `{token}` in size is not finite")]
    NonFinite { token: String },

    #[error("size `{input}` does not fit in an f64 byte count")]
    Overflow { input: String },
}

const TIERS: [(Unit, Unit); 5] = [
    (Unit::Kilobyte, Unit::Kilobit),
    (Unit::Megabyte, Unit::Megabit),
    (Unit::Gigabyte, Unit::Gigabit),
    (Unit::Terabyte, Unit::Terabit),
    (Unit::Petabyte, Unit::Petabit),
];

const PREFIXES: [Prefix; 3] = [Prefix::Iec, Prefix::Jedec, Prefix::Metric];

/// Symbol lookup order: bit, byte, then every tier with IEC, JEDEC and
/// Metric symbols (byte before bit). `None` means prefix-independent.
fn symbol_table() -> impl Iterator<Item = (Unit, Option<Prefix>)> {
    [(Unit::Bit, None), (Unit::Byte, None)].into_iter().chain(
        TIERS.into_iter().flat_map(|(byte, bit)| {
            PREFIXES
                .into_iter()
                .flat_map(move |p| [(byte, Some(p)), (bit, Some(p))])
        }),
    )
}

fn notation_for(prefix: Prefix) -> Notation {
    match prefix {
        Prefix::Metric => Notation::DECIMAL,
        Prefix::Iec | Prefix::Jedec => Notation::new(UnitSystem::Binary, prefix),
    }
}

/// Resolve a unit symbol. JEDEC and Metric share most symbols; the first
/// match wins unless `system` is decimal and a metric reading exists.
fn lookup_symbol(suffix: &str, system: UnitSystem) -> Option<(Unit, Notation)> {
    let mut matches =
        symbol_table().filter(|&(unit, prefix)| unit.symbol(prefix.unwrap_or_default()) == suffix);

    let (unit, prefix) = matches.next()?;
    let Some(prefix) = prefix else {
        return Some((unit, Notation::from(system)));
    };

    if system == UnitSystem::Decimal && prefix != Prefix::Metric {
        if let Some((metric_unit, _)) = matches.find(|&(_, p)| p == Some(Prefix::Metric)) {
            return Some((metric_unit, Notation::DECIMAL));
        }
    }

    Some((unit, notation_for(prefix)))
}

impl Size {
    /// Parse `"<number> <symbol>"`, e.g. `"1.5 KiB"` or `"2 Mbit"`.
    ///
    /// An unknown or missing symbol is not an error: the number is then
    /// read as a count of bits.
    ///
    /// Symbols shared by JEDEC and Metric ("MB", "GB", "Mbit", ...) are read
    /// as binary JEDEC units. A decimal size of a megabyte or more therefore
    /// does not round-trip through `parse`: `"2.5 MB"` comes back as
    /// 2621440 bytes, not 2500000. Likewise a binary size printed with
    /// metric symbols (`"1.5 kB"` for 1536 bytes) comes back as decimal.
    /// Use [`Size::parse_as`] with [`UnitSystem::Decimal`] for decimal text.
    ///
    /// # Errors
    ///
    /// Returns an error if the numeric token is missing, malformed or not
    /// finite, or if the value overflows an `f64` byte count in its unit.
    pub fn parse(input: &str) -> Result<Size, ParseSizeError> {
        Self::parse_as(input, UnitSystem::Binary)
    }

    /// Same as [`Size::parse`], but symbols shared by JEDEC and Metric
    /// ("MB", "Gbit", ...) resolve to `system`. Plain bits/bytes and the
    /// unknown-symbol fallback also take `system`'s default notation.
    ///
    /// # Errors
    ///
    /// See [`Size::parse`].
    pub fn parse_as(input: &str, system: UnitSystem) -> Result<Size, ParseSizeError> {
        let input = input.trim();
        let (number, suffix) = match input.split_once(char::is_whitespace) {
            Some((number, suffix)) => (number, suffix.trim()),
            None => (input, ""),
        };

        if number.is_empty() {
            return Err(ParseSizeError::Empty);
        }

        let value: f64 = number
            .parse()
            .map_err(|source| ParseSizeError::InvalidNumber {
                token: number.to_string(),
                source,
            })?;

        if !value.is_finite() {
            return Err(ParseSizeError::NonFinite {
                token: number.to_string(),
            });
        }

        let (unit, notation) = lookup_symbol(suffix, system).unwrap_or_else(|| {
            tracing::debug!(suffix, value, "unrecognized size suffix, reading value as bits");
            (Unit::Bit, Notation::from(system))
        });

        if !(value * unit.bytes_in(notation.system())).is_finite() {
            return Err(ParseSizeError::Overflow {
                input: input.to_string(),
            });
        }

        let size = Size::from_unit(value, unit, notation);

        tracing::trace!(input, bytes = size.bytes(), "parsed size");
        Ok(size)
    }

    /// Non-failing variant of [`Size::parse`].
    pub fn try_parse(input: &str) -> Option<Size> {
        Self::parse(input).ok()
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::parse(s)
    }
}
