//! entspawn - load an entity string and report what it spawns

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use entspawn::fields::encode_pool;
use entspawn::{read_entities, Config, Entity, EntityId, LoadSummary, SpawnTable, Spawner};

/// Level entity loader
#[derive(Parser, Debug)]
#[command(name = "entspawn", version, about = "Load a map entity string")]
struct Args {
    /// Entity string file
    file: PathBuf,

    /// Map name (defaults to the file stem)
    #[arg(short, long)]
    map: Option<String>,

    /// Spawn point players enter at
    #[arg(long, default_value = "")]
    spawnpoint: String,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skill level, overriding the configuration
    #[arg(long)]
    skill: Option<f32>,

    /// Load as a deathmatch level
    #[arg(long)]
    deathmatch: bool,

    /// Load as a cooperative level
    #[arg(long)]
    coop: bool,

    /// Print the summary and live entities as JSON
    #[arg(long)]
    json: bool,

    /// Print the live entities as an entity string
    #[arg(long, conflicts_with = "json")]
    dump: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a LoadSummary,
    entities: Vec<ReportEntity<'a>>,
}

#[derive(Serialize)]
struct ReportEntity<'a> {
    id: EntityId,
    #[serde(flatten)]
    entity: &'a Entity,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing; stdout is reserved for the report
    let json_logs = args
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_logs = (!args.log_json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entspawn=info".into()),
        )
        .with(json_logs)
        .with(text_logs)
        .init();

    let mut config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(skill) = args.skill {
        config.rules.skill = skill;
    }
    config.rules.deathmatch |= args.deathmatch;
    config.rules.coop |= args.coop;

    let entities = read_entities(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let map = match args.map {
        Some(map) => map,
        None => args
            .file
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow::anyhow!("invalid file name: {}", args.file.display()))?
            .to_string(),
    };

    let overrides = config.override_table();
    let mut spawner =
        Spawner::new(Arc::new(SpawnTable::standard()), config.rules).with_overrides(overrides);
    let summary = spawner
        .spawn_entities(&map, &entities, &args.spawnpoint)
        .with_context(|| format!("failed to load {}", map))?;

    if args.dump {
        let dump = encode_pool(spawner.pool(), spawner.fields())
            .context("failed to encode entities")?;
        print!("{}", dump);
        return Ok(());
    }

    if args.json {
        let report = Report {
            summary: &summary,
            entities: spawner
                .pool()
                .live()
                .map(|(id, entity)| ReportEntity { id, entity })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let world = &spawner.level().world;
    info!("level '{}' (sky {}, gravity {})", world.level_name, world.sky, world.gravity);
    println!(
        "{}: {} spawned, {} inhibited, {} unresolved, {} teams ({} members)",
        summary.map,
        summary.spawned,
        summary.inhibited,
        summary.unresolved,
        summary.teams,
        summary.team_members
    );
    for diagnostic in &summary.diagnostics {
        println!("  {}", diagnostic);
    }

    Ok(())
}
