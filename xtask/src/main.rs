use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "adjacent workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the resolver benchmarks and write a comparison report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["descriptor_benchmark", "resolver_benchmark"];

/// Functions each group is compared against, in preference order.
const BASELINES: &[&str] = &["hand_written", "slice_iter", "btree_get"];

/// One measured function: group, function (plus parameter), ops per second.
#[derive(Debug, Serialize)]
struct Measurement {
    group: String,
    function: String,
    ops_per_sec: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", bench, "--"]);

        if quick {
            cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
        }

        let status = cmd.status().with_context(|| format!("failed to run bench {bench}"))?;
        if status.success() {
            println!("Finished {bench} in {:.2?}", start.elapsed());
        } else {
            eprintln!("Warning: benchmark {bench} failed");
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut measurements = Vec::new();
    collect_results(criterion_dir, criterion_dir, &mut measurements);
    measurements.sort_by(|a, b| (&a.group, &a.function).cmp(&(&b.group, &b.function)));

    let out_dir = Path::new("benchmark_results");
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("results.json");
    fs::write(&json_path, serde_json::to_string_pretty(&measurements)?)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    let mut groups: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in &measurements {
        groups.entry(m.group.as_str()).or_default().push(m);
    }

    let report_path = out_dir.join("report.md");
    let mut file = fs::File::create(&report_path)?;
    writeln!(file, "# Resolver Benchmark Report")?;

    for (group, rows) in groups {
        let baseline = BASELINES
            .iter()
            .find_map(|name| rows.iter().find(|m| m.function.split('/').next() == Some(*name)))
            .map(|m| m.ops_per_sec);

        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Function | Ops/s | vs baseline |")?;
        writeln!(file, "|---|---|---|")?;
        for m in rows {
            let rel = match baseline {
                Some(base) if base > 0.0 => format!("**{:.2}x**", m.ops_per_sec / base),
                _ => "-".to_string(),
            };
            writeln!(file, "| {} | {} | {} |", m.function, format_ops(m.ops_per_sec), rel)?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Walks `target/criterion`, reading each `<group>/<function>[/<param>]/new/estimates.json`.
fn collect_results(root: &Path, dir: &Path, out: &mut Vec<Measurement>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) != Some("report") {
                collect_results(root, &path, out);
            }
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };
        let Ok(relative) = bench_dir.strip_prefix(root) else { continue };

        let mut parts = relative.iter().filter_map(|p| p.to_str());
        let Some(group) = parts.next() else { continue };
        let function = parts.collect::<Vec<_>>().join("/");
        if function.is_empty() {
            continue;
        }

        let elements = read_json(&run_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64())
            .unwrap_or(1.0);

        let time_ns = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
            .unwrap_or(0.0);

        if time_ns > 0.0 {
            out.push(Measurement {
                group: group.to_string(),
                function,
                ops_per_sec: elements * 1e9 / time_ns,
            });
        }
    }
}
