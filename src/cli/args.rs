use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Save game XML data to a CSV file and vice versa
#[derive(Parser, Debug)]
#[command(name = "balancer")]
#[command(about = "Tool to save game XML file data to a CSV file and vice versa", long_about = None)]
pub struct CliArgs {
    /// Conversion direction
    #[arg(
        value_name = "MODE",
        help = "Either 'r' to read from the XML files or 'w' to write to the XML files"
    )]
    pub mode: Mode,

    /// CSV file path
    #[arg(
        value_name = "FILENAME",
        help = "CSV file to either read from or write to"
    )]
    pub filename: PathBuf,
}

/// Conversion direction selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Read XML files into the CSV file
    #[value(name = "r")]
    Read,
    /// Write the CSV file into the XML files
    #[value(name = "w")]
    Write,
}
