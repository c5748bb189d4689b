use clap::{Parser, Subcommand};
use unit_converter::cli;
use unit_converter::error::ConvertResult;
use unit_converter::types::Unit;

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Convert values between meter/kilometer and gram/kilogram")]
#[command(long_about = "Unit Converter - fixed-table unit conversion

SUPPORTED CONVERSIONS:
  meter     -> kilometer   x 0.001
  kilometer -> meter       x 1000
  gram      -> kilogram    x 0.001
  kilogram  -> gram        x 1000

Any other pair, including same-unit pairs, is not supported.

COMMANDS:
  convert   - Convert a single value
  units     - List units and conversion rules
  form      - Interactive conversion form

EXAMPLES:
  convert convert 5 --from meter --to kilometer
  convert convert 2 -f kilogram -t gram --json
  convert form")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert a single value between two units.

Exits with a non-zero status when the pair has no conversion rule.

EXAMPLES:
  convert convert 5 --from meter --to kilometer     # 5 meter = 0.005 kilometer
  convert convert 3 -f gram -t kilogram --json")]
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit (meter, kilometer, gram, kilogram)
        #[arg(short, long)]
        from: Unit,

        /// Target unit (meter, kilometer, gram, kilogram)
        #[arg(short, long)]
        to: Unit,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Show the lookup details
        #[arg(short, long)]
        verbose: bool,
    },

    /// List units and conversion rules
    Units,

    #[command(long_about = "Interactive conversion form.

Prompts for a value (minimum 1, blank keeps the default) and the two units.
A blank unit answer is treated as 'not yet selected' and asked again.")]
    /// Interactive conversion form
    Form {
        /// Show the available units before prompting
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ConvertResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            json,
            verbose,
        } => cli::convert(value, from, to, json, verbose),

        Commands::Units => cli::units(),

        Commands::Form { verbose } => cli::form(verbose),
    }
}
