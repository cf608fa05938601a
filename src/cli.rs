use anyhow::Context;
use clap::Parser;
use montyhall::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "montyhall")]
#[command(about = "Monty Hall simulation: stick or switch?", long_about = None)]
struct Args {
    /// Rounds to play per policy
    #[arg(short, long, default_value_t = Settings::default().rounds)]
    rounds: u32,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Policies to simulate, in order (stick, switch)
    #[arg(short, long = "policy")]
    policies: Vec<Policy>,

    /// Name of the game show host
    #[arg(long, default_value = "Monty")]
    host: String,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::new(args.rounds, args.seed);
    let policies = if args.policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        args.policies
    };

    // 所有策略共用同一个主持人
    let host = GameShowHost::with_name(args.host);
    tracing::info!(
        host = host.name(),
        host_id = %host.id(),
        ?settings,
        "starting simulation"
    );

    let reports = simulate_policies(&policies, &host, settings)
        .with_context(|| format!("simulating {} rounds per policy", settings.rounds))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
            println!("  Win rate: {:.2}%", report.tally.win_rate() * 100.0);
        }
    }

    Ok(())
}
