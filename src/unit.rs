/// Bytes represented by a single bit; the finest resolution a `Size` keeps.
pub const BYTES_IN_BIT: f64 = 0.125;
pub const BITS_IN_BYTE: f64 = 8.0;

const BYTES_IN_KIBIBYTE: f64 = 1_024.0;
const BYTES_IN_MEBIBYTE: f64 = 1_048_576.0;
const BYTES_IN_GIBIBYTE: f64 = 1_073_741_824.0;
const BYTES_IN_TEBIBYTE: f64 = 1_099_511_627_776.0;
const BYTES_IN_PEBIBYTE: f64 = 1_125_899_906_842_624.0;

const BYTES_IN_KILOBYTE: f64 = 1_000.0;
const BYTES_IN_MEGABYTE: f64 = 1_000_000.0;
const BYTES_IN_GIGABYTE: f64 = 1_000_000_000.0;
const BYTES_IN_TERABYTE: f64 = 1_000_000_000_000.0;
const BYTES_IN_PETABYTE: f64 = 1_000_000_000_000_000.0;

/// What "kilo" means.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum UnitSystem {
    /// One kilobyte is 1000 bytes.
    Decimal,
    /// One kilobyte is 1024 bytes.
    #[default]
    Binary,
}

/// Symbol set used when a size is printed.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Prefix {
    /// kB, MB, kbit, ...
    Metric,
    /// KiB, MiB, Kibit, ...
    #[default]
    Iec,
    /// KB, MB, Kbit, ...
    Jedec,
}

/// Unit system and prefix style carried by every `Size`.
///
/// The decimal system only ever prints with metric symbols, so
/// [`Notation::new`] discards the requested prefix in that case.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Notation {
    system: UnitSystem,
    prefix: Prefix,
}

impl Notation {
    pub const BINARY: Notation = Notation {
        system: UnitSystem::Binary,
        prefix: Prefix::Iec,
    };

    pub const DECIMAL: Notation = Notation {
        system: UnitSystem::Decimal,
        prefix: Prefix::Metric,
    };

    pub const fn new(system: UnitSystem, prefix: Prefix) -> Self {
        match system {
            UnitSystem::Decimal => Self::DECIMAL,
            UnitSystem::Binary => Self { system, prefix },
        }
    }

    pub fn system(self) -> UnitSystem {
        self.system
    }

    pub fn prefix(self) -> Prefix {
        self.prefix
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self::BINARY
    }
}

impl From<UnitSystem> for Notation {
    fn from(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Decimal => Self::DECIMAL,
            UnitSystem::Binary => Self::BINARY,
        }
    }
}

impl From<Prefix> for Notation {
    fn from(prefix: Prefix) -> Self {
        Self::new(UnitSystem::Binary, prefix)
    }
}

impl From<(UnitSystem, Prefix)> for Notation {
    fn from((system, prefix): (UnitSystem, Prefix)) -> Self {
        Self::new(system, prefix)
    }
}

/// Every unit a `Size` can be expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Unit {
    Bit,
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Kilobit,
    Megabit,
    Gigabit,
    Terabit,
    Petabit,
}

impl Unit {
    pub const ALL: [Unit; 12] = [
        Unit::Bit,
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Kilobit,
        Unit::Megabit,
        Unit::Gigabit,
        Unit::Terabit,
        Unit::Petabit,
    ];

    /// Byte tiers, coarsest first. `Bit` is the fallback and is not listed.
    pub const BYTE_TIERS: [Unit; 6] = [
        Unit::Petabyte,
        Unit::Terabyte,
        Unit::Gigabyte,
        Unit::Megabyte,
        Unit::Kilobyte,
        Unit::Byte,
    ];

    /// Prefixed bit tiers, coarsest first.
    pub const BIT_TIERS: [Unit; 5] = [
        Unit::Petabit,
        Unit::Terabit,
        Unit::Gigabit,
        Unit::Megabit,
        Unit::Kilobit,
    ];

    pub fn is_bit(self) -> bool {
        matches!(
            self,
            Unit::Bit | Unit::Kilobit | Unit::Megabit | Unit::Gigabit | Unit::Terabit | Unit::Petabit
        )
    }

    /// How many bytes one of this unit holds under `system`.
    pub fn bytes_in(self, system: UnitSystem) -> f64 {
        let binary = system == UnitSystem::Binary;

        let bytes = match self {
            Unit::Bit => return BYTES_IN_BIT,
            Unit::Byte => return 1.0,
            Unit::Kilobyte | Unit::Kilobit => {
                if binary { BYTES_IN_KIBIBYTE } else { BYTES_IN_KILOBYTE }
            }
            Unit::Megabyte | Unit::Megabit => {
                if binary { BYTES_IN_MEBIBYTE } else { BYTES_IN_MEGABYTE }
            }
            Unit::Gigabyte | Unit::Gigabit => {
                if binary { BYTES_IN_GIBIBYTE } else { BYTES_IN_GIGABYTE }
            }
            Unit::Terabyte | Unit::Terabit => {
                if binary { BYTES_IN_TEBIBYTE } else { BYTES_IN_TERABYTE }
            }
            Unit::Petabyte | Unit::Petabit => {
                if binary { BYTES_IN_PEBIBYTE } else { BYTES_IN_PETABYTE }
            }
        };

        if self.is_bit() {
            bytes / BITS_IN_BYTE
        } else {
            bytes
        }
    }

    /// Display symbol. Bit and byte ignore the prefix.
    pub fn symbol(self, prefix: Prefix) -> &'static str {
        use Prefix::{Iec, Jedec, Metric};

        match (self, prefix) {
            (Unit::Bit, _) => "b",
            (Unit::Byte, _) => "B",

            (Unit::Kilobyte, Iec) => "KiB",
            (Unit::Kilobyte, Jedec) => "KB",
            (Unit::Kilobyte, Metric) => "kB",
            (Unit::Megabyte, Iec) => "MiB",
            (Unit::Megabyte, Jedec | Metric) => "MB",
            (Unit::Gigabyte, Iec) => "GiB",
            (Unit::Gigabyte, Jedec | Metric) => "GB",
            (Unit::Terabyte, Iec) => "TiB",
            (Unit::Terabyte, Jedec | Metric) => "TB",
            (Unit::Petabyte, Iec) => "PiB",
            (Unit::Petabyte, Jedec | Metric) => "PB",

            (Unit::Kilobit, Iec) => "Kibit",
            (Unit::Kilobit, Jedec) => "Kbit",
            (Unit::Kilobit, Metric) => "kbit",
            (Unit::Megabit, Iec) => "Mibit",
            (Unit::Megabit, Jedec | Metric) => "Mbit",
            (Unit::Gigabit, Iec) => "Gibit",
            (Unit::Gigabit, Jedec | Metric) => "Gbit",
            (Unit::Terabit, Iec) => "Tibit",
            (Unit::Terabit, Jedec | Metric) => "Tbit",
            (Unit::Petabit, Iec) => "Pibit",
            (Unit::Petabit, Jedec | Metric) => "Pbit",
        }
    }
}

/// Round a byte count to the nearest bit. Midpoints go away from zero.
///
/// Works on the exact remainder (`%` is fmod) instead of scaling by 8,
/// so values near `f64::MAX` cannot overflow. Infinities saturate to
/// `±f64::MAX`; NaN is passed through unchanged.
pub fn round_to_nearest_bit(bytes: f64) -> f64 {
    if bytes.is_infinite() {
        return f64::MAX.copysign(bytes);
    }

    let remainder = bytes % BYTES_IN_BIT;
    let mut rounded = bytes - remainder;

    if remainder.abs() >= BYTES_IN_BIT / 2.0 {
        rounded += BYTES_IN_BIT.copysign(remainder);
    }

    // turns -0.0 into 0.0
    rounded + 0.0
}
