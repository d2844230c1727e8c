use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct CliArgs {
    /// Container runtime cli to invoke, must accept docker style arguments
    #[arg(short = 'b', long = "bin", default_value = "docker")]
    pub bin: String,

    /// Attempt to colorize logs & inspect output, default is to remove ansi formatting
    #[arg(short = 'c', long = "color")]
    pub color: bool,

    /// Draw the interface without any colours
    #[arg(short = 'm', long = "monochrome")]
    pub monochrome: bool,

    /// Write tracing output to this file, nothing is logged when not set
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. info, debug, d5r=trace
    #[arg(short = 'l', long = "log-level", default_value = "info")]
    pub log_level: String,
}

impl CliArgs {
    /// Parse cli arguments
    pub fn new() -> Self {
        Self::parse()
    }
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            bin: String::from("docker"),
            color: false,
            monochrome: false,
            log_file: None,
            log_level: String::from("info"),
        }
    }
}
