use anyhow::Result;
use gridstats::{core::config, Fetcher, RateLimiter, StatsService};
use serde::Serialize;
use std::sync::Arc;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "gridstats-cli", about = "Fetch pro-football-reference tables as JSON")]
enum Command {
    /// Season summary row from a franchise's history table
    History {
        #[structopt(short, long)]
        team: String,
        #[structopt(short, long)]
        year: i64,
    },
    /// Team and opponent totals plus league ranks for one season
    Stats {
        #[structopt(short, long)]
        team: String,
        #[structopt(short, long)]
        year: i64,
    },
    /// Every pick a franchise made in one draft
    Draft {
        #[structopt(short, long)]
        team: String,
        #[structopt(short, long)]
        year: i64,
    },
    /// Conference and division standings
    Standings {
        #[structopt(short, long)]
        year: i64,
    },
    /// Playoff games and champion
    Playoffs {
        #[structopt(short, long)]
        year: i64,
    },
    /// Season award winners
    Awards {
        #[structopt(short, long)]
        year: i64,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let command = Command::from_args();
    let base = config::base_url_from_env()?;
    let fetcher = Fetcher::new(Arc::new(RateLimiter::default()))?;
    let service = StatsService::new(fetcher, base);

    match command {
        Command::History { team, year } => print_json(&service.season_overview(&team, year).await?),
        Command::Stats { team, year } => print_json(&service.team_stats(&team, year).await?),
        Command::Draft { team, year } => print_json(&service.draft_year(&team, year).await?),
        Command::Standings { year } => print_json(&service.standings(year).await?),
        Command::Playoffs { year } => print_json(&service.playoffs(year).await?),
        Command::Awards { year } => print_json(&service.award_winners(year).await?),
    }
}
