use clap::{Parser, Subcommand};

/// CLI arguments for swissmatch
#[derive(Debug, Parser)]
#[command(
    name = "swissmatch",
    version,
    about = "Resolve Swiss cantons, communities and zip codes"
)]
pub struct CliArgs {
    /// Path to the dataset (default: the bundled swissmatch.json.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Treat --input as a binary dataset written by `compile`
    #[arg(long = "binary", global = true)]
    pub binary: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Lookup a canton by abbreviation or plate code
    Canton {
        /// Abbreviation (ZH) or plate code (1)
        id: String,
    },

    /// List all cantons
    Cantons,

    /// Lookup a community by community number
    Community { number: String },

    /// List communities, optionally only those matching a name
    Communities { name: Option<String> },

    /// Lookup a single zip code.
    ///
    /// A lone number is the ordering number (ONRP), NOT the 4 digit code.
    ZipCode {
        /// ONRP, 6 digit code+add-on, or 4 digit code when a second argument is given
        code: String,
        /// 2 digit add-on or a name
        add_on_or_name: Option<String>,
    },

    /// List zip codes by 4 digit code or by name
    ZipCodes { code_or_name: Option<String> },

    /// List zip codes whose name matches
    City { name: String },

    /// Distinct names used by a 4 digit code
    Cities {
        code: String,
        /// Only keep these zip code types (10, 20, 30, 40, 80)
        #[arg(short = 't', long = "type")]
        types: Vec<u8>,
        /// native, de, fr, it or rt
        #[arg(short = 'l', long = "locale")]
        locale: Option<String>,
    },

    /// Write the loaded dataset as a binary file
    Compile { out: String },
}
