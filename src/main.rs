mod config;
mod services;
mod utils;

use config::{load_config, VERSION};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use services::{leaderboard::LeaderboardClient, simulator::Simulator};
use std::io;
use tokio::{select, signal};

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = load_config().unwrap_or_default();

    utils::logging::setup(config.logging);

    info!(
        "Starting leaderboard simulator v{} against {}",
        VERSION, config.base_url
    );

    let client = LeaderboardClient::new(&config.base_url, config.request_timeout())
        .map_err(io::Error::other)?;
    let mut simulator = Simulator::new(client, StdRng::from_entropy(), &config);

    select! {
        _ = simulator.run() => {},
        _ = signal::ctrl_c() => {
            info!("Stopping load simulation");
        }
    }

    Ok(())
}
