use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Zowe: work with z/OS data sets over z/OSMF.
#[derive(Parser, Debug)]
#[command(name = "zowe", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage z/OS data sets.
    Files {
        #[command(subcommand)]
        command: FilesCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilesCommand {
    /// Search the contents of data sets.
    Search {
        #[command(subcommand)]
        command: SearchCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommand {
    /// Search every sequential data set and PDS member matching a pattern.
    DataSets(SearchDataSetsArgs),
}

#[derive(ClapArgs, Debug)]
pub struct SearchDataSetsArgs {
    /// Data set name pattern, e.g. "IBMUSER.**".
    pub pattern: String,

    /// String to search for.
    pub search_string: String,

    /// Match case exactly.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Let z/OSMF discard non-matching candidates before downloading them.
    #[arg(long)]
    pub mainframe_search: bool,

    /// Requests in flight at once (0 = unbounded).
    #[arg(long)]
    pub max_concurrent_requests: Option<usize>,

    /// Seconds after which no new requests are started.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Codepage used to download content.
    #[arg(long)]
    pub encoding: Option<String>,

    /// Volume serial, for uncataloged data sets.
    #[arg(long)]
    pub volume: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
