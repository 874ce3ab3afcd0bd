use crate::unit::{round_to_nearest_bit, Notation, Prefix, Unit, UnitSystem, BYTES_IN_BIT};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Decimal places used by `Display` when the formatter gives none.
pub const DEFAULT_PRECISION: usize = 3;

/// A quantity of digital information.
///
/// The magnitude is kept in bytes and rounded to the nearest bit on every
/// construction. Equality tolerates differences below one bit; ordering
/// compares the raw magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct Size {
    bytes: f64,
    notation: Notation,
}

impl Size {
    pub const MIN: Size = Size {
        bytes: 0.0,
        notation: Notation::BINARY,
    };

    pub const MAX: Size = Size {
        bytes: f64::MAX,
        notation: Notation::BINARY,
    };

    /// Binary units, IEC symbols. Infinite inputs saturate to
    /// `±f64::MAX` bytes.
    pub fn new(bytes: f64) -> Self {
        Self::with_notation(bytes, Notation::BINARY)
    }

    pub fn with_notation(bytes: f64, notation: impl Into<Notation>) -> Self {
        Self {
            bytes: round_to_nearest_bit(bytes),
            notation: notation.into(),
        }
    }

    pub fn from_unit(value: f64, unit: Unit, notation: impl Into<Notation>) -> Self {
        let notation = notation.into();
        Self::with_notation(value * unit.bytes_in(notation.system()), notation)
    }

    pub fn to_unit(&self, unit: Unit) -> f64 {
        self.bytes / unit.bytes_in(self.notation.system())
    }

    /// Add `amount` of `unit`, re-applying bit rounding.
    pub fn add_unit(&mut self, amount: f64, unit: Unit) {
        let bytes_in = unit.bytes_in(self.notation.system());
        *self = Self::with_notation(self.bytes + amount * bytes_in, self.notation);
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.notation.system()
    }

    pub fn prefix(&self) -> Prefix {
        self.notation.prefix()
    }

    /// Coarsest byte unit in which the absolute magnitude is at least one,
    /// or `Unit::Bit` for anything under a byte.
    pub fn largest_unit(&self) -> Unit {
        self.largest_of(&Unit::BYTE_TIERS)
    }

    pub fn largest_unit_value(&self) -> f64 {
        self.to_unit(self.largest_unit())
    }

    pub fn largest_unit_symbol(&self) -> &'static str {
        self.largest_unit().symbol(self.prefix())
    }

    /// Like [`Size::largest_unit`] but over kilobits..petabits, falling
    /// back to plain bits.
    pub fn largest_bit_unit(&self) -> Unit {
        self.largest_of(&Unit::BIT_TIERS)
    }

    fn largest_of(&self, tiers: &[Unit]) -> Unit {
        tiers
            .iter()
            .copied()
            .find(|&unit| self.to_unit(unit).abs() >= 1.0)
            .unwrap_or(Unit::Bit)
    }

    /// `"<value> <symbol>"` with at most `precision` decimal places.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{self:.precision$}")
    }

    /// Display adapter that picks a bit tier ("2 Mbit") instead of a byte tier.
    pub fn bits_display(self) -> BitsDisplay {
        BitsDisplay(self)
    }

    fn fmt_in(&self, f: &mut fmt::Formatter<'_>, unit: Unit) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        let value = format_value(self.to_unit(unit), precision);
        write!(f, "{} {}", value, unit.symbol(self.prefix()))
    }
}

// Generates the per-unit accessor, factory and in-place adder.
macro_rules! unit_methods {
    ($($unit:ident => $to:ident, $from:ident, $add:ident;)*) => {
        impl Size {
            $(
                pub fn $to(&self) -> f64 {
                    self.to_unit(Unit::$unit)
                }

                pub fn $from(value: f64, notation: impl Into<Notation>) -> Self {
                    Self::from_unit(value, Unit::$unit, notation)
                }

                pub fn $add(&mut self, amount: f64) {
                    self.add_unit(amount, Unit::$unit)
                }
            )*
        }
    };
}

unit_methods! {
    Bit => bits, from_bits, add_bits;
    Byte => bytes, from_bytes, add_bytes;
    Kilobyte => kilobytes, from_kilobytes, add_kilobytes;
    Megabyte => megabytes, from_megabytes, add_megabytes;
    Gigabyte => gigabytes, from_gigabytes, add_gigabytes;
    Terabyte => terabytes, from_terabytes, add_terabytes;
    Petabyte => petabytes, from_petabytes, add_petabytes;
    Kilobit => kilobits, from_kilobits, add_kilobits;
    Megabit => megabits, from_megabits, add_megabits;
    Gigabit => gigabits, from_gigabits, add_gigabits;
    Terabit => terabits, from_terabits, add_terabits;
    Petabit => petabits, from_petabits, add_petabits;
}

/// Fixed `precision` decimals, then trailing fractional zeros dropped.
fn format_value(value: f64, precision: usize) -> String {
    let mut s = format!("{value:.precision$}");
    if s.contains('.') {
        let keep = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(keep);
    }
    s
}

impl Default for Size {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_in(f, self.largest_unit())
    }
}

/// See [`Size::bits_display`].
#[derive(Debug, Clone, Copy)]
pub struct BitsDisplay(Size);

impl fmt::Display for BitsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_in(f, self.0.largest_bit_unit())
    }
}

impl PartialEq for Size {
    /// Less than one bit apart.
    fn eq(&self, other: &Self) -> bool {
        (self.bytes - other.bytes).abs() < BYTES_IN_BIT
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.bytes.partial_cmp(&other.bytes)
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.bytes < other.bytes
    }

    fn le(&self, other: &Self) -> bool {
        self.bytes < other.bytes || self == other
    }

    fn gt(&self, other: &Self) -> bool {
        self.bytes > other.bytes
    }

    fn ge(&self, other: &Self) -> bool {
        self.bytes > other.bytes || self == other
    }
}

// Arithmetic keeps the left operand's notation.

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::with_notation(self.bytes + rhs.bytes, self.notation)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::with_notation(self.bytes - rhs.bytes, self.notation)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        *self = *self + rhs;
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Size) {
        *self = *self - rhs;
    }
}
