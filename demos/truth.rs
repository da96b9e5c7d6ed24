use clap::Parser;

use qmc_rs::table::TruthTable;
use qmc_rs::{canonical, cover, expr, render_result, simple_projection_checked};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Truth tables as bit strings of length 2^n (e.g. `10001110`).
    #[arg(value_name = "BITS", required = true)]
    inputs: Vec<String>,

    /// Treat each input as a 10-bit positional string instead of a truth table.
    #[clap(long)]
    simple: bool,

    /// Also print the prime implicants.
    #[clap(long)]
    primes: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    for input in &args.inputs {
        println!("input = {}", input);

        if args.simple {
            println!("  DNF: {}", render_result(simple_projection_checked(input)));
            continue;
        }

        let table = match TruthTable::parse(input) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("skipping {:?}: {}", input, e);
                println!("  {}", e);
                continue;
            }
        };

        let time = std::time::Instant::now();
        println!("  n = {}, minterms = {:?}", table.num_vars(), table.minterms().collect::<Vec<_>>());
        println!("  SDNF:      {}", canonical::disjunctive(&table));
        println!("  SCNF:      {}", canonical::conjunctive(&table));
        println!("  Minimized: {}", expr::minimize(&table));
        println!("  Minimum:   {}", cover::minimum(&table));
        if args.primes {
            for p in qmc_rs::qmc::prime_implicants(&table) {
                println!("  - {}", p);
            }
        }
        log::info!("{} done in {:.3}s", input, time.elapsed().as_secs_f64());
    }

    Ok(())
}
