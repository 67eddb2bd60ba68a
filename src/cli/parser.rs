use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for envwatch
/// CLI application to record environmental and water quality readings
#[derive(Parser)]
#[command(
    name = "envwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record PM2.5 / water hardness / temperature / pH readings, check them against thresholds and ask Gemini for a forecast",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Start the session from a CSV previously written by `export`
    /// instead of the built-in sample readings
    #[arg(global = true, long = "from", value_name = "CSV")]
    pub from: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new reading and show the updated status
    Add(ReadingArgs),

    /// Show the status of the latest reading
    Status,

    /// List the readings of the session
    List(ListArgs),

    /// Export the session readings to CSV or JSON
    Export(ExportArgs),

    /// Ask Gemini for a 6/12/24 hour forecast from the latest reading
    Forecast(ForecastArgs),

    /// Ask Gemini a free-text question about the latest reading
    Ask(AskArgs),

    /// Open an interactive session (readings live until you quit)
    Shell,
}

/// Values of a new reading. Defaults match the input form of the dashboard.
#[derive(Args, Debug, Clone)]
pub struct ReadingArgs {
    /// PM2.5 in µg/m³ (0-500)
    #[arg(long = "pm25", default_value_t = 45.0)]
    pub pm25: f64,

    /// Total hardness in mg/L as CaCO₃ (0-1000)
    #[arg(long = "hardness", default_value_t = 268.0)]
    pub hardness: f64,

    /// Water temperature in °C (0-50)
    #[arg(long = "temp", default_value_t = 28.0)]
    pub temperature: f64,

    /// pH (0-14)
    #[arg(long = "ph", default_value_t = 7.8)]
    pub ph: f64,

    /// Location label (default: session location)
    #[arg(long = "location")]
    pub location: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Show only the last N readings
    #[arg(long = "last", short = 'n', value_name = "N")]
    pub last: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    #[arg(long, value_name = "FILE")]
    pub file: String,

    /// Overwrite output file without confirmation
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ForecastArgs {
    /// Location sent to the model (default: session location)
    #[arg(long = "location")]
    pub location: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// The question, e.g. "will the dust be bad tomorrow?"
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub question: Vec<String>,

    /// Location sent to the model (default: session location)
    #[arg(long = "location")]
    pub location: Option<String>,
}
