// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use skyroster_client::{InMemoryService, RosterPayload, RosterReconciler, Session};
use skyroster_domain::{FlightNumber, StorageKind};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_log::AsTrace;

/// `SkyRoster` - flight roster inspection and crew management from the
/// terminal, driven by a fixture-backed roster service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a roster fixture file (a JSON roster payload).
    #[arg(short, long)]
    fixture: PathBuf,

    /// Bearer credential presented to the roster service.
    #[arg(short, long, default_value = "offline-demo")]
    token: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a flight and render its roster and seat map.
    Open {
        /// The flight number to open.
        flight: String,
    },
    /// List the replacement candidates for a flight.
    Candidates {
        /// The flight number to query.
        flight: String,
    },
    /// Archive the flight's current roster selection.
    Save {
        /// The flight number to archive.
        flight: String,

        /// Storage kind tag (`SQL` or `NOSQL`).
        #[arg(long, default_value = "NOSQL")]
        storage: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    let payload: RosterPayload =
        serde_json::from_str(&std::fs::read_to_string(&args.fixture)?)?;
    tracing::debug!(fixture = %args.fixture.display(), "seeding offline roster service");
    let service: InMemoryService = InMemoryService::new();
    service.seed_roster(payload);

    let reconciler: RosterReconciler<InMemoryService> = RosterReconciler::new(service);
    let session: Session = Session::new(args.token);

    match args.command {
        Command::Open { flight } => {
            let flight: FlightNumber = FlightNumber::new(&flight)?;
            reconciler.open_flight(&session, &flight).await?;
            if let Some(snapshot) = reconciler.snapshot() {
                print!("{}", render::render_roster(&snapshot));
            }
        }
        Command::Candidates { flight } => {
            let flight: FlightNumber = FlightNumber::new(&flight)?;
            reconciler.open_flight(&session, &flight).await?;
            let pools = reconciler.available_candidates(&session).await?;
            print!("{}", render::render_candidates(&reconciler, &pools)?);
        }
        Command::Save { flight, storage } => {
            let flight: FlightNumber = FlightNumber::new(&flight)?;
            let storage_kind: StorageKind = StorageKind::from_str(&storage)?;
            reconciler.open_flight(&session, &flight).await?;
            let message: String = reconciler.save_selection(&session, storage_kind).await?;
            println!("{message}");
        }
    }
    Ok(())
}
