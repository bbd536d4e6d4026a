use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use sizeconv::commands::{
    DisplayOptions, best::BestOptions, config_cmd::ConfigOptions, convert::ConvertOptions,
    format::FormatCommandOptions,
};
use sizeconv::commands::{execute_best, execute_config, execute_convert, execute_format};
use sizeconv::error::AppError;
use sizeconv::locale::MAX_EXACT_FRACTION_DIGITS;
use sizeconv::unit::Unit;
use tracing_subscriber::{EnvFilter, prelude::*};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let default_directive = if verbose { "sizeconv=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

/// Digits past the exact expansion of an `f64` are always zero, so larger counts are refused.
fn decimal_places_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(..=MAX_EXACT_FRACTION_DIGITS as u64)
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Convert(args) => {
            let options = ConvertOptions {
                size: args.size,
                from: args.from,
                to: args.to,
                raw: args.raw,
                json: args.json,
                display: args.display.into(),
            };
            execute_convert(options)?;
        }
        Commands::Format(args) => {
            let options = FormatCommandOptions {
                size: args.size,
                unit: args.unit,
                display: args.display.into(),
            };
            execute_format(options)?;
        }
        Commands::Best(args) => {
            let options =
                BestOptions { bytes: args.bytes, json: args.json, display: args.display.into() };
            execute_best(options)?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                edit: args.edit,
                set_decimal_places: args.set_decimal_places,
                set_locale: args.set_locale,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "sizeconv", version, about = "Convert and format file sizes in base-1024 units.")]
struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a size from one unit to another.
    #[command(visible_alias = "cv")]
    Convert(ConvertArgs),
    /// Format a size in a given unit.
    #[command(visible_alias = "fmt")]
    Format(FormatArgs),
    /// Express a byte count in the largest fitting unit.
    #[command(visible_alias = "bu")]
    Best(BestArgs),
    /// Manage sizeconv configuration (default decimal places and locale).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct DisplayArgs {
    /// Number of fractional digits to print (defaults to the configured value, then 2).
    #[arg(
        short = 'd',
        long = "decimals",
        value_name = "N",
        value_parser = decimal_places_parser()
    )]
    decimal_places: Option<usize>,

    /// Locale for the decimal separator, e.g. en-US, de_DE.UTF-8, invariant.
    #[arg(short = 'l', long = "locale", value_name = "LOCALE")]
    locale: Option<String>,
}

impl From<DisplayArgs> for DisplayOptions {
    fn from(args: DisplayArgs) -> Self {
        DisplayOptions { decimal_places: args.decimal_places, locale: args.locale }
    }
}

#[derive(Args)]
struct ConvertArgs {
    /// Size to convert.
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    size: f64,

    /// Unit the size is expressed in (B, KB, MB, GB, TB, PB).
    #[arg(short = 'f', long = "from", value_name = "UNIT")]
    from: Unit,

    /// Unit to convert to.
    #[arg(short = 't', long = "to", value_name = "UNIT")]
    to: Unit,

    /// Print the bare number without a suffix.
    #[arg(long = "raw", action = ArgAction::SetTrue, conflicts_with = "json")]
    raw: bool,

    /// Print the result as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct FormatArgs {
    /// Size to format.
    #[arg(value_name = "SIZE", allow_negative_numbers = true)]
    size: f64,

    /// Unit the size is expressed in.
    #[arg(short = 'u', long = "unit", value_name = "UNIT", default_value = "B")]
    unit: Unit,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct BestArgs {
    /// Byte count to scale.
    #[arg(value_name = "BYTES", allow_negative_numbers = true)]
    bytes: f64,

    /// Print the scaled size and unit as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Persist the default number of decimal places.
    #[arg(long = "set-decimals", value_name = "N", value_parser = decimal_places_parser())]
    set_decimal_places: Option<usize>,

    /// Persist the default locale.
    #[arg(long = "set-locale", value_name = "LOCALE")]
    set_locale: Option<String>,
}
