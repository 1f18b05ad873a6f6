use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use log_sketch_rs::{
    BloomFilter, HyperLogLogEstimator, bits2hr, bytes2hr, exact_unique_count,
    load_ip_addresses,
};
use std::{path::PathBuf, time::Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check candidate passwords against a list of already-used ones
    Passwords {
        /// File with known passwords, one per line
        #[arg(short, long)]
        existing: PathBuf,

        /// Bloom filter size in bits
        #[arg(short, long, default_value = "1000")]
        size: usize,

        /// Number of hash functions
        #[arg(long, default_value = "3")]
        hashes: usize,

        /// Passwords to check
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Estimate unique IPv4 addresses in an access log
    CountIps {
        /// Path to the log file
        log_path: PathBuf,

        /// HyperLogLog precision (4-18)
        #[arg(short, long, default_value = "10")]
        precision: u8,

        /// Skip the exact HashSet baseline (for very large logs)
        #[arg(long)]
        skip_exact: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Passwords {
            existing,
            size,
            hashes,
            candidates,
        } => check_passwords(&existing, size, hashes, &candidates),
        Commands::CountIps {
            log_path,
            precision,
            skip_exact,
        } => count_ips(&log_path, precision, skip_exact),
    }
}

fn check_passwords(
    existing: &PathBuf,
    size: usize,
    hashes: usize,
    candidates: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut filter = BloomFilter::new(size, hashes)?;

    let known = std::fs::read_to_string(existing)?;
    let mut known_count = 0usize;
    for password in known.lines().filter(|line| !line.is_empty()) {
        filter.add(password.as_bytes());
        known_count += 1;
    }

    println!(
        "Loaded {} known passwords into a {}-bit filter ({} hashes, {})\n",
        known_count,
        size,
        hashes,
        bits2hr(size)
    );

    println!("Password check results:");
    for password in candidates {
        let status = if filter.contains(password.as_bytes()) {
            "already used".red()
        } else {
            "unique".green()
        };
        println!("  {} - {}", password.cyan(), status);
    }

    Ok(())
}

fn count_ips(
    log_path: &PathBuf,
    precision: u8,
    skip_exact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let addresses = load_ip_addresses(log_path)?;
    println!(
        "Loaded {} IPv4 entries from {}",
        addresses.len(),
        log_path.display()
    );

    let hll_started = Instant::now();
    let mut hll = HyperLogLogEstimator::new(precision)?;
    for ip in &addresses {
        hll.add(ip.as_bytes());
    }
    let hll_count = hll.estimate();
    let hll_elapsed = hll_started.elapsed();

    if skip_exact {
        println!(
            "HyperLogLog estimate: {:.0} unique addresses in {:.4}s ({} of registers)",
            hll_count,
            hll_elapsed.as_secs_f64(),
            bytes2hr(hll.size_bytes())
        );
        return Ok(());
    }

    let exact_started = Instant::now();
    let exact_count = exact_unique_count(addresses.iter().map(|s| s.as_str()));
    let exact_elapsed = exact_started.elapsed();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Metric").set_alignment(CellAlignment::Center),
            Cell::new("Exact count").set_alignment(CellAlignment::Center),
            Cell::new("HyperLogLog").set_alignment(CellAlignment::Center),
        ]);
    table.add_row(vec![
        Cell::new("Unique elements"),
        Cell::new(format!("{}", exact_count)),
        Cell::new(format!("{:.0}", hll_count)),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed (sec)"),
        Cell::new(format!("{:.4}", exact_elapsed.as_secs_f64())),
        Cell::new(format!("{:.4}", hll_elapsed.as_secs_f64())),
    ]);

    println!("\n{}", "Comparison results:".cyan());
    println!("{table}");
    println!(
        "Estimator memory: {} (precision {}, expected error ±{:.2}%)",
        bytes2hr(hll.size_bytes()),
        precision,
        hll.relative_error() * 100.0
    );

    Ok(())
}
