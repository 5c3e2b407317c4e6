//! Shared entry point of the `fibonacci-table` and `fibonacci-table-recursive` programs.

use std::io::{BufWriter, Write};

use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr};
use fibtable::{Algorithm, Table};
use log::{debug, info};

/// Print the first 35 Fibonacci numbers as `index<TAB>value` lines
#[derive(Debug, Parser)]
#[command(version, long_about = None)]
pub struct TableCli {
    /// log level (written to stderr)
    #[arg(short, long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Parse the command line, set up logging and print the table to stdout
pub fn main(algorithm: Algorithm) -> Result<()> {
    let args = TableCli::parse();
    pretty_env_logger::formatted_builder().filter_level(args.log_level.into()).init();
    debug!("args: {args:?}");

    let stdout = std::io::stdout().lock();
    let rows = run(Table::new(algorithm), stdout)?;
    info!("printed {rows} rows using the {algorithm} algorithm");
    Ok(())
}

/// Write `table` to `out` through a buffer
pub fn run(table: Table, out: impl Write) -> Result<usize> {
    table.write_to(BufWriter::new(out)).wrap_err("failed to write the fibonacci table")
}
