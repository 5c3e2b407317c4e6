use eyre::{Result, eyre};
use fibtable::{Algorithm, DEFAULT_MAX_COUNT, Table};
use owo_colors::OwoColorize;

fn main() -> Result<()> {
    pretty_env_logger::formatted_builder().filter_level(log::LevelFilter::Warn).init();

    let mut failed = Vec::new();
    for n in 0..DEFAULT_MAX_COUNT {
        let iterative = Algorithm::Iterative.fib(n)?;
        let recursive = Algorithm::Recursive.fib(n)?;
        if iterative != recursive {
            failed.push((n, iterative, recursive));
        }
    }

    let mut iterative = Vec::new();
    let mut recursive = Vec::new();
    Table::new(Algorithm::Iterative).write_to(&mut iterative)?;
    Table::new(Algorithm::Recursive).write_to(&mut recursive)?;
    let tables_match = iterative == recursive;

    if failed.is_empty() && tables_match {
        println!("\n\npassed: both algorithms agree on indices 0..{DEFAULT_MAX_COUNT}");
        return Ok(());
    }

    for (n, iterative, recursive) in &failed {
        eprintln!("fib({n}): iterative={iterative}, recursive={recursive}");
    }
    Err(eyre!(format!(
        "{}: {} mismatched values, tables match: {tables_match}",
        "algorithms disagree".red().bold(),
        failed.len()
    )))
}
