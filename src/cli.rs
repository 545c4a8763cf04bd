use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser};
use std::path::PathBuf;

/// fpick – search and pick files into another directory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source directory to search
    #[arg(short, long, value_name = "PATH")]
    pub src: PathBuf,

    /// Destination directory (created if missing)
    #[arg(short, long, value_name = "PATH")]
    pub dst: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output into a flat directory: `foo/bar` becomes `foo__bar`
    #[arg(long)]
    pub flat: bool,

    /// Print what would be copied and exit without copying
    #[arg(long)]
    pub dry_run: bool,

    /// Log each copy to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Exactly one way of matching filenames.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct FilterArgs {
    /// Pick files whose name is exactly FILENAME
    #[arg(
        short = 'n',
        long = "name",
        value_name = "FILENAME",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub name: Option<String>,

    /// Pick files whose name contains a match for PATTERN
    #[arg(
        short,
        long,
        value_name = "PATTERN",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub regex: Option<String>,
}
