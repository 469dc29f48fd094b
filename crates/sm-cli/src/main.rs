//! Slot Machine command-line harness
//!
//! Usage:
//!   slot-machine play --seed 7 high spin spin reset
//!   slot-machine play --memory --reels 0,1,2 --reels 4,4,4 spin spin
//!   slot-machine simulate --seed 7 --spins 100000 --ante high
//!   slot-machine info

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use sm_core::{Ante, GameConfig, Symbol};
use sm_engine::{
    Cue, GameEngine, GameEvent, HighScoreStore, MemoryHighScoreStore, RandomSource, ReelSet,
    RngSource, ScriptedSource, cues_for, info_panel_opened, reels_revealed,
};
use sm_state::FileHighScoreStore;

#[derive(Parser)]
#[command(name = "slot-machine", about = "Scripted slot machine harness")]
struct Cli {
    /// Game rules (JSON); default rules when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a sequence of player actions and print every event
    Play {
        /// Seed for reproducible draws (OS entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Script one spin's reels, e.g. `--reels 4,4,4`; repeats cycle
        #[arg(long = "reels", value_parser = parse_reels, conflicts_with = "seed")]
        reels: Vec<[u8; 3]>,

        /// High score file (platform config dir when omitted)
        #[arg(long, conflicts_with = "memory")]
        high_score_file: Option<PathBuf>,

        /// Keep the high score in memory only
        #[arg(long)]
        memory: bool,

        /// Actions to perform in order
        #[arg(required = true)]
        actions: Vec<Action>,
    },
    /// Spin many times, resetting on bust, and report session stats
    Simulate {
        #[arg(long, default_value_t = 1)]
        seed: u64,

        #[arg(long, default_value_t = 10_000)]
        spins: u64,

        /// Ante to play at (low/high)
        #[arg(long, default_value = "low")]
        ante: Ante,
    },
    /// Print the rules
    Info,
}

/// Player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Action {
    /// Select the low ante
    Low,
    /// Select the high ante
    High,
    /// Spin the reels at the active ante
    Spin,
    /// Start a new game with the starting purse
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Play {
            seed,
            reels,
            high_score_file,
            memory,
            actions,
        } => play(config, seed, reels, high_score_file, memory, &actions),
        Commands::Simulate { seed, spins, ante } => simulate(config, seed, spins, ante),
        Commands::Info => {
            print_info(&config);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn parse_reels(s: &str) -> Result<[u8; 3], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| format!("invalid reel index in '{}': {}", s, e))?;

    <[u8; 3]>::try_from(values)
        .map_err(|v| format!("expected 3 reel indices, got {}", v.len()))
}

fn play(
    config: GameConfig,
    seed: Option<u64>,
    reels: Vec<[u8; 3]>,
    high_score_file: Option<PathBuf>,
    memory: bool,
    actions: &[Action],
) -> Result<()> {
    let source = build_source(reels, seed, config.symbol_count)?;
    let store = build_store(memory, high_score_file);

    let mut engine = GameEngine::with_config(config, source, store)?;
    println!(
        "start: purse={} ante={} high={}",
        engine.purse(),
        engine.ante(),
        engine.high_score()
    );
    println!("    cues: {}", format_cues(&reels_revealed()));

    for line in run_actions(&mut engine, actions) {
        println!("{}", line);
    }

    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}

/// Scripted reels when given, otherwise seeded or OS-seeded draws
fn build_source(
    reels: Vec<[u8; 3]>,
    seed: Option<u64>,
    symbol_count: u8,
) -> Result<Box<dyn RandomSource>> {
    if let Some(bad) = reels.iter().flatten().find(|&&i| i >= symbol_count) {
        bail!(
            "Reel index {} out of range (symbol_count = {})",
            bad,
            symbol_count
        );
    }

    if !reels.is_empty() {
        let mut scripted = ScriptedSource::new([]);
        for spin in reels {
            scripted.push_spin(spin);
        }
        return Ok(Box::new(scripted));
    }

    Ok(match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_os_rng()),
    })
}

fn build_store(memory: bool, high_score_file: Option<PathBuf>) -> Box<dyn HighScoreStore> {
    if memory {
        return Box::new(MemoryHighScoreStore::new());
    }
    let path = high_score_file.unwrap_or_else(FileHighScoreStore::default_path);
    log::debug!("High score file: {}", path.display());
    Box::new(FileHighScoreStore::new(path))
}

/// Apply actions in order; one line per event, each followed by its cues
fn run_actions<R: RandomSource, S: HighScoreStore>(
    engine: &mut GameEngine<R, S>,
    actions: &[Action],
) -> Vec<String> {
    let mut lines = Vec::new();

    for action in actions {
        match action {
            Action::Low => {
                engine.select_ante(Ante::Low);
            }
            Action::High => {
                engine.select_ante(Ante::High);
            }
            Action::Spin => {
                engine.spin();
            }
            Action::Reset => {
                engine.reset();
            }
        }

        for event in engine.drain_events() {
            lines.push(describe(&event));
            let cues = cues_for(&event);
            if !cues.is_empty() {
                lines.push(format!("    cues: {}", format_cues(&cues)));
            }
        }
    }

    lines
}

fn simulate(config: GameConfig, seed: u64, spins: u64, ante: Ante) -> Result<()> {
    let mut engine =
        GameEngine::with_config(config, RngSource::seeded(seed), MemoryHighScoreStore::new())?;
    run_simulation(&mut engine, spins, ante);

    let stats = engine.stats();
    let report = json!({
        "seed": seed,
        "ante": ante,
        "high_score": engine.high_score(),
        "hit_rate": stats.hit_rate(),
        "net": stats.net(),
        "stats": stats,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Spin `spins` times at `ante`, starting a new game on every bust
fn run_simulation<R: RandomSource, S: HighScoreStore>(
    engine: &mut GameEngine<R, S>,
    spins: u64,
    ante: Ante,
) {
    engine.select_ante(ante);

    for _ in 0..spins {
        if engine.is_bust() {
            engine.reset();
            engine.select_ante(ante);
        }
        engine.spin();
        engine.drain_events();
    }
}

fn print_info(config: &GameConfig) {
    println!("Slot Machine");
    println!("    cues: {}", format_cues(&info_panel_opened()));
    println!();
    println!("  Starting coins:   {}", config.starting_purse);
    for ante in Ante::ALL {
        println!("  {:<5} ante:       {} coins", ante, ante.wager(config));
    }
    println!(
        "  Three of a kind:  pays {}x the ante, otherwise the ante is lost",
        config.win_multiplier
    );
    println!("  Bust:             coins at or below zero end the game");
    println!();
    println!("  Symbols:");
    for index in 0..config.symbol_count {
        match Symbol::from_index(index) {
            Some(symbol) => println!("    {}  {:<11} {}", index, symbol.name(), symbol.asset_name()),
            None => println!("    {}  (unnamed)", index),
        }
    }
}

fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::AnteChanged(ante) => format!("ante -> {}", ante),
        GameEvent::Spun(result) => format!(
            "spin [{}] {:?} delta={:+} purse={} high={} {:?}",
            reel_names(&result.reels),
            result.outcome,
            result.delta,
            result.purse,
            result.high_score,
            result.status
        ),
        GameEvent::GameReset => "reset".to_string(),
    }
}

fn reel_names(reels: &ReelSet) -> String {
    reels
        .indices()
        .iter()
        .map(|&i| match Symbol::from_index(i) {
            Some(symbol) => symbol.name().to_string(),
            None => format!("#{}", i),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cues(cues: &[Cue]) -> String {
    cues.iter()
        .map(|cue| match cue {
            Cue::Sound(sound) => sound.file_name(),
            Cue::Haptic(haptic) => format!("haptic:{:?}", haptic),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
