//! Particle scenario benchmark CLI
//!
//! Run seeded episodes of the cooperative push and goal navigation scenarios.

use clap::Parser;
use mpe_sim::scenarios::ScenarioId;
use mpe_sim::{MotionKind, ScenarioResult, ScenarioRunner, SimConfig, SimExport};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Particle scenario benchmark CLI
#[derive(Parser, Debug)]
#[command(name = "mpe-sim")]
#[command(about = "Run seeded episodes of multi-agent particle scenarios", long_about = None)]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scenario to run (cooperative_push, goal_navigation, all)
    #[arg(short = 'S', long, default_value = "all")]
    scenario: String,

    /// Number of consecutive seeds to run
    #[arg(long, default_value = "1")]
    seeds: usize,

    /// Episodes per scenario
    #[arg(short, long)]
    episodes: Option<usize>,

    /// Steps per episode
    #[arg(long)]
    steps: Option<u64>,

    /// Navigation agents
    #[arg(long)]
    num_agents: Option<usize>,

    /// Landmarks (both scenarios)
    #[arg(long)]
    num_landmarks: Option<usize>,

    /// Push scenario dummies
    #[arg(long)]
    num_dummies: Option<usize>,

    /// Push scenario pushers
    #[arg(long)]
    num_pushers: Option<usize>,

    /// Steps during which the navigation goal is visible
    #[arg(long)]
    step_unknown: Option<u64>,

    /// Shrink the visibility horizon over resets
    #[arg(long)]
    unknown_decay: bool,

    /// Resets between horizon decrements
    #[arg(long)]
    decay_episode: Option<u64>,

    /// Give the navigation critic the true goal
    #[arg(long)]
    critic_full_obs: bool,

    /// Motion applied between steps
    #[arg(long, value_enum)]
    motion: Option<MotionKind>,

    /// JSON config file; CLI flags override its values
    #[arg(short, long)]
    config: Option<String>,

    /// Export per-episode reports to a JSON file
    #[arg(long)]
    export: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for CI parsing
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Applies CLI overrides on top of a loaded or default config.
    fn apply(&self, config: &mut SimConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(motion) = self.motion {
            config.motion = motion;
        }
        if let Some(n) = self.num_landmarks {
            config.cooperative_push.num_landmarks = n;
            config.goal_navigation.num_landmarks = n;
        }
        if let Some(n) = self.num_dummies {
            config.cooperative_push.num_dummies = n;
        }
        if let Some(n) = self.num_pushers {
            config.cooperative_push.num_push_agents = n;
        }

        let nav = &mut config.goal_navigation;
        if let Some(n) = self.num_agents {
            nav.num_agents = n;
        }
        if let Some(n) = self.step_unknown {
            nav.step_unknown = n;
        }
        if let Some(n) = self.decay_episode {
            nav.decay_episode = n;
        }
        nav.unknown_decay |= self.unknown_decay;
        nav.critic_full_obs |= self.critic_full_obs;
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    if !args.json {
        info!("MPE Scenario Benchmark v0.1.0");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    // Parse scenarios
    let scenarios: Vec<ScenarioId> = if args.scenario == "all" {
        ScenarioId::all()
    } else {
        match args.scenario.parse() {
            Ok(id) => vec![id],
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!("Available scenarios: cooperative_push, goal_navigation, all");
                std::process::exit(1);
            }
        }
    };

    let mut config = match &args.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    args.apply(&mut config);

    // Determine base seed
    let base_seed = if config.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    } else {
        config.seed
    };
    debug!("Config: {:?}", config);

    // Track results
    let mut all_results: Vec<ScenarioResult> = Vec::new();
    let mut export = SimExport::new();
    let mut failed_count = 0;

    for seed_offset in 0..args.seeds {
        let seed = base_seed.wrapping_add(seed_offset as u64);
        let runner = ScenarioRunner::new(config.clone()).with_seed(seed);

        for scenario in &scenarios {
            let result = runner.run(*scenario);

            if !args.json {
                if result.passed {
                    info!(
                        "✓ {} (seed={}) PASSED  mean reward {:.3}",
                        scenario.name(),
                        seed,
                        result.mean_reward()
                    );
                } else {
                    error!(
                        "✗ {} (seed={}) FAILED: {}",
                        scenario.name(),
                        seed,
                        result.failure_reason.as_deref().unwrap_or("unknown")
                    );
                }
            }

            if !result.passed {
                failed_count += 1;
            }

            export.add_run(&result);
            all_results.push(result);
        }
    }

    if let Some(path) = &args.export {
        match export.write_to_file(path) {
            Ok(()) => info!("Exported {} runs to {}", export.runs.len(), path),
            Err(e) => {
                error!("Failed to write export: {}", e);
                failed_count += 1;
            }
        }
    }

    // Summary
    let total = all_results.len();
    let passed = total.saturating_sub(failed_count);

    if args.json {
        let summary = serde_json::json!({
            "total": total,
            "passed": passed,
            "failed": failed_count,
            "results": all_results.iter().map(|r| {
                serde_json::json!({
                    "scenario": r.scenario.name(),
                    "seed": r.seed,
                    "passed": r.passed,
                    "episodes": r.episodes.len(),
                    "mean_reward": r.mean_reward(),
                    "failure_reason": r.failure_reason,
                })
            }).collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to encode summary: {}", e),
        }
    } else {
        info!("");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        if failed_count == 0 {
            info!("✅ All {} scenario runs passed!", total);
        } else {
            error!("❌ {}/{} scenario runs failed!", failed_count, total);

            for result in &all_results {
                if !result.passed {
                    error!(
                        "  - {} seed={}: {}",
                        result.scenario.name(),
                        result.seed,
                        result.failure_reason.as_deref().unwrap_or("unknown")
                    );
                }
            }
        }
    }

    // Exit with proper code for CI
    if failed_count > 0 {
        std::process::exit(1);
    }
}
