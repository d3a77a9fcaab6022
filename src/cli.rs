use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"
{about}

{usage-heading} {usage}

{all-args}

{after-help}"#;

#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(author, version)]
#[command(about = "Generates the per-system-call exception boilerplate for the wrapper library")]
#[command(after_help = "Examples:
  wrapgen header              Print the declarations block
  wrapgen body                Print the definitions block
  wrapgen                     Same as `wrapgen body`
  wrapgen names --json        List the wrapped functions as JSON
  wrapgen header -m gen.toml  Scan the files listed in gen.toml

Output is framed by begin/end banner comments; redirect it into the
generated region of the library sources.")]
#[command(help_template = HELP_TEMPLATE)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the declarations block (Function enum + exception classes)
    Header {
        /// TOML manifest overriding the built-in input file lists
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Directory relative input paths are resolved against
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Scanner variant producing the name set
        #[arg(short, long, value_enum, default_value = "declarations")]
        strategy: ScanStrategy,
    },

    /// Print the definitions block (the two method bodies per class)
    Body {
        /// TOML manifest overriding the built-in input file lists
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Directory relative input paths are resolved against
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Scanner variant producing the name set
        #[arg(short, long, value_enum, default_value = "declarations")]
        strategy: ScanStrategy,
    },

    /// List the extracted wrapped function names
    Names {
        /// TOML manifest overriding the built-in input file lists
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Directory relative input paths are resolved against
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Scanner variant producing the name set
        #[arg(short, long, value_enum, default_value = "declarations")]
        strategy: ScanStrategy,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Scanner variant selectable from the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Reconstruct prototypes from the declaration files
    Declarations,
    /// Locate function bodies in the definition files
    Definitions,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
