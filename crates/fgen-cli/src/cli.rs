use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fgen")]
#[command(version)]
#[command(about = "Generate Fortran interface modules from C headers", long_about = None)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to ./fgen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Fortran interface module from a C header
    Generate {
        /// Header to scan
        header: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Module name (default: header file name, upper-cased)
        #[arg(long)]
        module: Option<String>,
        /// Maximum width of PUBLIC export lines
        #[arg(long)]
        line_budget: Option<usize>,
        /// Add the generation time to the banner comment
        #[arg(long)]
        stamp: bool,
    },
    /// Check that every declared API function is defined and vice versa
    CheckApi {
        /// C source file with the definitions
        source: PathBuf,
        /// Header with the declarations
        header: PathBuf,
        /// Function name prefix of the API
        #[arg(long)]
        prefix: Option<String>,
        /// Exit with an error when the check finds problems
        #[arg(long)]
        strict: bool,
    },
    /// Print C string constants for the tags and attributes of a schema
    ExtractStrings {
        /// XSD file to scan
        schema: PathBuf,
        /// Print extern declarations instead of definitions
        #[arg(long)]
        header: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Wrap a file's contents as a multi-line C string literal
    FileToString {
        /// File to wrap
        file: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
