use anyhow::{Context, Result};
use bytesize::{Prefix, Size, Unit, UnitSystem, DEFAULT_PRECISION};
use clap::{Parser, Subcommand};

mod logging;

#[derive(Parser, Debug)]
#[command(name = "bytesize")]
#[command(version, about = "Format, parse and convert byte and bit quantities")]
struct Cli {
    /// Increase logging verbosity (use together with RUST_LOG for fine control).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a byte count in its largest unit
    Format {
        /// Quantity in bytes; fractions are rounded to the nearest bit
        #[arg(allow_negative_numbers = true)]
        bytes: f64,

        /// Unit system (decimal always prints metric symbols)
        #[arg(long, value_enum, default_value_t = UnitSystem::Binary)]
        unit: UnitSystem,

        /// Symbol style
        #[arg(long, value_enum, default_value_t = Prefix::Iec)]
        prefix: Prefix,

        /// Maximum number of decimal places
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,

        /// Use bit tiers (Kibit, Mbit, ...) instead of byte tiers
        #[arg(long, default_value_t = false)]
        bits: bool,
    },

    /// Parse a size such as "1.5 KiB" and print its byte count
    Parse {
        /// Number and unit symbol; may be passed as one or two arguments
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        text: Vec<String>,

        /// How to read symbols shared by JEDEC and Metric ("MB", "Gbit", ...)
        #[arg(long, value_enum, default_value_t = UnitSystem::Binary)]
        unit: UnitSystem,
    },

    /// Parse a size and print it in every unit
    Convert {
        /// Number and unit symbol; may be passed as one or two arguments
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        text: Vec<String>,

        /// How to read symbols shared by JEDEC and Metric ("MB", "Gbit", ...)
        #[arg(long, value_enum, default_value_t = UnitSystem::Binary)]
        unit: UnitSystem,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.cmd {
        Command::Format {
            bytes,
            unit,
            prefix,
            precision,
            bits,
        } => {
            let size = Size::with_notation(bytes, (unit, prefix));
            if size.prefix() != prefix {
                tracing::debug!(?prefix, "decimal units always use metric symbols");
            }

            if bits {
                println!("{:.precision$}", size.bits_display());
            } else {
                println!("{}", size.to_string_with_precision(precision));
            }
            Ok(())
        }

        Command::Parse { text, unit } => {
            let size = parse_text(&text, unit)?;

            println!("bytes:  {}", size.bytes());
            println!("bits:   {}", size.bits());
            println!("pretty: {size}");
            Ok(())
        }

        Command::Convert { text, unit } => {
            let size = parse_text(&text, unit)?;
            let prefix = size.prefix();

            tracing::info!(
                bytes = size.bytes(),
                system = ?size.unit_system(),
                ?prefix,
                "converting"
            );

            for u in Unit::ALL {
                println!("{:>24} {}", size.to_unit(u), u.symbol(prefix));
            }
            Ok(())
        }
    }
}

fn parse_text(text: &[String], unit: UnitSystem) -> Result<Size> {
    let joined = text.join(" ");
    Size::parse_as(&joined, unit).with_context(|| format!("Failed to parse size '{joined}'"))
}
