use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to analyze time-sheet CSV files
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze a time-sheet CSV: average weekly working time and overtime against contract quotas",
    long_about = None
)]
pub struct Cli {
    /// Print diagnostic logs to stderr (filter with RUST_LOG)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(value_name = "FILE", help = "Configuration file to create")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print or validate a configuration file
    Config {
        #[arg(value_name = "CONFIGFILE")]
        file: String,

        #[arg(long = "print", help = "Print the configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Validate the configuration file, contract periods included"
        )]
        check: bool,
    },

    /// Parse a time-sheet csv file, analyze it and render a PDF report
    Timesheet {
        #[arg(value_name = "CONFIGFILE")]
        config: String,

        #[arg(value_name = "INFILE", help = "csv file to analyze")]
        infile: String,

        #[arg(value_name = "OUTFILE", help = "output pdf filename")]
        outfile: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Dump the computed tables instead of rendering them
    Dump {
        #[arg(value_name = "CONFIGFILE")]
        config: String,

        #[arg(value_name = "INFILE", help = "csv file to analyze")]
        infile: String,

        #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
        out_dir: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the computed tables to the terminal
    Show {
        #[arg(value_name = "CONFIGFILE")]
        config: String,

        #[arg(value_name = "INFILE", help = "csv file to analyze")]
        infile: String,
    },

    /// Generate a sample csv file
    Sample {
        #[arg(value_name = "CONFIGFILE")]
        config: String,

        #[arg(value_name = "OUTFILE", help = "output csv filename")]
        outfile: String,

        #[arg(long, help = "Number of entries (overrides sample.num)")]
        num: Option<usize>,

        #[arg(long = "id-num", help = "Number of distinct persons (overrides sample.id_num)")]
        id_num: Option<usize>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
