//! TVM Engine CLI
//!
//! Thin command-line wrapper over the library. Results print as plain text, or
//! as JSON with `--json`. Settings come from `--config <file.json>` and the
//! `TVM_*` environment variables (see `config`).

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use tvm_engine::{
    average_return, cashflows, discounted_payback_period, future_value, future_value_annuity,
    geometric_mean_return, holding_period_return, holding_period_return_annualized,
    net_present_value, payback_period, present_value, present_value_growing_perpetuity,
    present_value_growing_perpetuity_due, present_value_perpetuity, present_value_perpetuity_due,
    BatchRunner, EngineConfig, IrrOutcome, IrrSolver,
};

/// Time-value-of-money calculations
#[derive(Parser)]
#[command(name = "tvm", version, about = "Time-value-of-money calculations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (discount rate, IRR solver settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Future value of a single amount, or of an annuity with --annuity
    Fv(ValueArgs),
    /// Present value of a single future amount
    Pv(ValueArgs),
    /// Net present value of a cash-flow sequence (first flow undiscounted)
    Npv(FlowArgs),
    /// Internal rate of return of an investment followed by cash flows
    Irr(InvestmentArgs),
    /// Simple and discounted payback periods
    Payback(InvestmentArgs),
    /// Holding period return metrics
    Returns(ReturnsArgs),
    /// Present value of a (growing) perpetuity
    Perpetuity(PerpetuityArgs),
    /// Evaluate every series in a CSV file (id,initial_investment,flow_1,...)
    Batch(BatchArgs),
}

#[derive(Args)]
struct ValueArgs {
    /// Amount (present value, future value or payment)
    #[arg(allow_hyphen_values = true)]
    amount: f64,
    /// Per-period rate
    #[arg(long)]
    rate: f64,
    /// Number of periods
    #[arg(long)]
    periods: u32,
    /// Treat the amount as a level payment (fv only)
    #[arg(long)]
    annuity: bool,
}

#[derive(Args)]
struct FlowArgs {
    /// Per-period rate (defaults to the configured discount rate)
    #[arg(long)]
    rate: Option<f64>,
    /// Cash flows in chronological order
    #[arg(required = true, allow_hyphen_values = true)]
    flows: Vec<f64>,
}

#[derive(Args)]
struct InvestmentArgs {
    /// Initial investment (outflow at period 0)
    #[arg(long)]
    investment: f64,
    /// Discount rate for discounted payback (defaults to the configured rate)
    #[arg(long)]
    rate: Option<f64>,
    /// Cash flows for periods 1..=n
    #[arg(allow_hyphen_values = true)]
    flows: Vec<f64>,
}

#[derive(Args)]
struct ReturnsArgs {
    /// Initial value
    #[arg(long)]
    initial: f64,
    /// Final value
    #[arg(long = "final")]
    final_value: f64,
    /// Holding period in years, for the annualized figure
    #[arg(long)]
    years: Option<f64>,
    /// Additional per-period returns to average
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    series: Vec<f64>,
}

#[derive(Args)]
struct PerpetuityArgs {
    /// Cash flow per period
    #[arg(allow_hyphen_values = true)]
    cash_flow: f64,
    #[arg(long)]
    rate: f64,
    /// Growth rate
    #[arg(long, default_value_t = 0.0)]
    growth: f64,
    /// Discount one further period
    #[arg(long)]
    due: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// CSV file of series
    path: PathBuf,
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(p) => EngineConfig::from_json_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display()))?,
        None => EngineConfig::default(),
    };
    let config = config.with_env_overrides();
    config.validate()?;
    Ok(config)
}

fn describe_irr(outcome: &IrrOutcome) -> String {
    match outcome {
        IrrOutcome::Converged { rate, iterations } => {
            format!("{:.6} ({:.4}%) after {} iterations", rate, rate * 100.0, iterations)
        }
        IrrOutcome::NotConverged {
            last_guess,
            iterations,
        } => format!(
            "did not converge after {} iterations (last guess {:.6})",
            iterations, last_guess
        ),
        IrrOutcome::DivisionByZero { guess, iteration } => format!(
            "undefined: zero or non-finite derivative at iteration {} (guess {:.6})",
            iteration, guess
        ),
    }
}

fn describe_period(period: Option<u32>) -> String {
    period.map_or_else(|| "not reached".to_string(), |p| p.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Fv(args) => {
            let value = if args.annuity {
                future_value_annuity(args.amount, args.rate, args.periods)
            } else {
                future_value(args.amount, args.rate, args.periods)
            };
            if cli.json {
                println!("{}", json!({ "future_value": value }));
            } else {
                println!("Future value: {:.6}", value);
            }
        }
        Commands::Pv(args) => {
            if args.annuity {
                bail!("--annuity is only supported by fv");
            }
            let value = present_value(args.amount, args.rate, args.periods);
            if cli.json {
                println!("{}", json!({ "present_value": value }));
            } else {
                println!("Present value: {:.6}", value);
            }
        }
        Commands::Npv(args) => {
            let rate = args.rate.unwrap_or(config.discount_rate);
            let value = net_present_value(rate, &args.flows);
            if cli.json {
                println!("{}", json!({ "rate": rate, "npv": value }));
            } else {
                println!("NPV at {:.4}: {:.6}", rate, value);
            }
        }
        Commands::Irr(args) => {
            let outcome = IrrSolver::new(config.irr.clone()).solve(args.investment, &args.flows);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("IRR: {}", describe_irr(&outcome));
            }
        }
        Commands::Payback(args) => {
            let rate = args.rate.unwrap_or(config.discount_rate);
            let simple = payback_period(args.investment, &args.flows);
            let discounted = discounted_payback_period(args.investment, &args.flows, rate);
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "payback_period": simple,
                        "discounted_payback_period": discounted,
                        "rate": rate,
                    })
                );
            } else {
                println!("Payback period: {}", describe_period(simple));
                println!(
                    "Discounted payback period at {:.4}: {}",
                    rate,
                    describe_period(discounted)
                );
            }
        }
        Commands::Returns(args) => {
            let hpr = holding_period_return(args.initial, args.final_value);
            let annualized = args
                .years
                .map(|y| holding_period_return_annualized(args.initial, args.final_value, y));
            let mut series = args.series;
            series.push(hpr);
            let average = average_return(&series);
            let geometric = geometric_mean_return(&series);

            if cli.json {
                println!(
                    "{}",
                    json!({
                        "holding_period_return": hpr,
                        "annualized": annualized,
                        "average_return": average,
                        "geometric_mean_return": geometric,
                    })
                );
            } else {
                println!("Holding period return: {:.4}%", hpr * 100.0);
                if let Some(a) = annualized {
                    println!("Annualized: {:.4}%", a * 100.0);
                }
                if series.len() > 1 {
                    println!("Average return: {:.4}%", average * 100.0);
                    println!("Geometric mean return: {:.4}%", geometric * 100.0);
                }
            }
        }
        Commands::Perpetuity(args) => {
            let value = match (args.growth != 0.0, args.due) {
                (false, false) => present_value_perpetuity(args.rate, args.cash_flow),
                (false, true) => present_value_perpetuity_due(args.rate, args.cash_flow),
                (true, false) => {
                    present_value_growing_perpetuity(args.rate, args.growth, args.cash_flow)
                }
                (true, true) => {
                    present_value_growing_perpetuity_due(args.rate, args.growth, args.cash_flow)
                }
            };
            if cli.json {
                println!("{}", json!({ "present_value": value }));
            } else {
                match value {
                    Some(v) => println!("Present value: {:.6}", v),
                    None => println!("Present value: undefined at this rate and growth"),
                }
            }
        }
        Commands::Batch(args) => {
            let series = cashflows::load_series(&args.path)
                .with_context(|| format!("Failed to load series from {}", args.path.display()))?;
            let runner = BatchRunner::new(config);
            let reports = runner.run_batch(&series);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                println!(
                    "{:<20} {:>14} {:>8} {:>10} {}",
                    "Series", "NPV", "Payback", "Disc. PB", "IRR"
                );
                println!("{}", "-".repeat(80));
                for r in &reports {
                    println!(
                        "{:<20} {:>14.2} {:>8} {:>10} {}",
                        r.id,
                        r.npv,
                        describe_period(r.payback_period),
                        describe_period(r.discounted_payback_period),
                        describe_irr(&r.irr)
                    );
                }
            }
        }
    }

    Ok(())
}
