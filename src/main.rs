//! Demo driver
//!
//! Walks one player session against an in-memory host: legacy migration on
//! first load, panel rendering, toggles, gated progress grants, save.

use clap::Parser;
use professions::core::config::{load_config, ProfessionConfig};
use professions::core::error::Result;
use professions::host::{MemoryHost, SkillProvider};
use professions::profession::Profession;
use professions::session::{respond, ProfessionSession};
use professions::ui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "professions", about = "Profession selection demo session")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the randomized legacy skill levels
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProfessionConfig::default(),
    };
    tracing::info!(
        "profession session: max {}, unselect {}",
        config.max_allowed,
        if config.allow_unselect { "on" } else { "off" }
    );

    // A legacy player record: random skill levels, no selection blob yet
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut host = MemoryHost::new();
    for profession in Profession::ALL {
        if rng.gen_bool(0.5) {
            host.set_progress(profession, rng.gen_range(0.0..80.0));
        }
    }

    let mut session = ProfessionSession::new(config);
    session.load(&mut host);

    // Single-process demo: we are our own session authority
    let sync = respond(unix_now());
    session.sync_clock(&sync, unix_now());

    let panel = ui::build_panel(session.state(), session.policies(), session.config());
    println!("{}", panel.status_line);
    for row in &panel.rows {
        println!(
            "  [{}] {:<14} {:<16} {}",
            if row.selected { "x" } else { " " },
            row.name,
            row.policy.label(),
            row.description
        );
    }

    // Try to fill up, then go one past capacity
    for profession in [Profession::Mining, Profession::Sailing] {
        let outcome = session.toggle(&mut host, profession, unix_now());
        if let Some(message) = ui::toggle_message(&outcome) {
            println!("{}", message);
        }
    }

    // Simulated progress-grant events through the gate
    for profession in Profession::ALL {
        if session.experience_allowed(&host, profession) {
            let level = host.get_progress(profession);
            host.set_progress(profession, level + rng.gen_range(0.1..1.0));
        }
    }

    session.save(&mut host);
    tracing::info!("selected: {:?}", session.state().selected());

    Ok(())
}
