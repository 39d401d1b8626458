//! Punktraster-Zugangssperre: Gate-Server und Werkzeuge.
//!
//! Unterbefehle:
//! - `serve`  - HTTP-Server mit `/api/health` und `/api/verify-password`
//! - `hash`   - Muster-Hash aus Punkt-Indizes oder Rasterkoordinaten berechnen
//! - `verify` - Muster gegen einen laufenden Server prüfen
//! - `init-config` - Standard-Optionen als TOML neben die Binary schreiben

use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use dotgrid_gate::server::{self, ServerConfig, DEFAULT_BIND};
use dotgrid_gate::{GateOptions, HttpVerifier, Lattice, PatternHash, VerifyOutcome};

#[derive(Parser, Debug)]
#[command(name = "dotgrid-gate", version, about = "Punktraster-Zugangssperre")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Startet den Gate-Server (Geheimnis aus `LANDING_PASSWORD`)
    Serve {
        /// Bind-Adresse
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
    /// Berechnet den Muster-Hash
    Hash {
        /// Punkt-Indizes
        indices: Vec<u32>,
        /// Rasterkoordinate `spalte,zeile` relativ zur Mitte (mehrfach möglich)
        #[arg(long = "at", value_parser = parse_cell)]
        cells: Vec<(i32, i32)>,
    },
    /// Prüft ein Muster gegen einen laufenden Server
    Verify {
        /// Basis-URL des Servers
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,
        /// Punkt-Indizes
        indices: Vec<u32>,
    },
    /// Schreibt die Standard-Optionen nach `dotgrid_gate.toml`
    InitConfig {
        /// Vorhandene Datei überschreiben
        #[arg(long)]
        force: bool,
    },
}

fn parse_cell(raw: &str) -> Result<(i32, i32), String> {
    let (column, row) = raw
        .split_once(',')
        .ok_or_else(|| format!("erwartet `spalte,zeile`, erhalten `{raw}`"))?;
    let column = column.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let row = row.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok((column, row))
}

#[tokio::main]
async fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { bind } => run_serve(bind).await,
        Commands::Hash { indices, cells } => run_hash(indices, cells),
        Commands::Verify { url, indices } => run_verify(&url, indices).await,
        Commands::InitConfig { force } => run_init_config(force),
    };

    if let Err(e) = result {
        eprintln!("Fehler: {:#}", e);
        process::exit(1);
    }
}

async fn run_serve(bind: SocketAddr) -> anyhow::Result<()> {
    log::info!("Dotgrid Gate v{} startet...", env!("CARGO_PKG_VERSION"));
    server::serve(ServerConfig::from_env(bind)).await
}

fn run_hash(mut indices: Vec<u32>, cells: Vec<(i32, i32)>) -> anyhow::Result<()> {
    if !cells.is_empty() {
        let options = GateOptions::load_from_file(&GateOptions::config_path());
        let lattice = Lattice::generate(
            options.lattice_half_width,
            options.lattice_half_height,
            options.lattice_spacing,
        )?;
        for (column, row) in cells {
            let index = lattice.index_of(column, row).ok_or_else(|| {
                anyhow::anyhow!("Rasterkoordinate ({}, {}) liegt außerhalb", column, row)
            })?;
            indices.push(index);
        }
    }

    let hash = PatternHash::from_indices(indices);
    println!("{}", hash);
    Ok(())
}

async fn run_verify(url: &str, indices: Vec<u32>) -> anyhow::Result<()> {
    let verifier = HttpVerifier::new(url)?;
    let hash = PatternHash::from_indices(indices);
    log::info!("Prüfe Hash {} gegen {}", hash, verifier.endpoint());

    match verifier.verify(hash).await {
        VerifyOutcome::Accepted => println!("akzeptiert"),
        VerifyOutcome::Rejected => println!("abgelehnt"),
        VerifyOutcome::Failed(failure) => anyhow::bail!(failure.user_message()),
    }
    Ok(())
}

fn run_init_config(force: bool) -> anyhow::Result<()> {
    let path = GateOptions::config_path();
    if path.exists() && !force {
        anyhow::bail!("{} existiert bereits (--force zum Überschreiben)", path.display());
    }
    GateOptions::default().save_to_file(&path)
}
