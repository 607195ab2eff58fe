use anyhow::Result;
use boxscore::cli::{Cli, Command, LeagueTable};
use boxscore::collector::collect_team_games;
use boxscore::export::{render, Format, ScheduleRow};
use boxscore::game::Schedule;
use boxscore::ident::TeamId;
use boxscore::league::{load_league, LeagueSnapshot};
use boxscore::source::{GameSource, Snapshot};
use boxscore::team::compute_stats;
use boxscore::ResultExt;
use chrono::Utc;
use clap::Parser;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let snapshot = Snapshot::load(&cli.snapshot)?;
    let now = Utc::now();

    let output = match cli.command {
        Command::Team { team_id } => {
            let team = TeamId::new(team_id);
            let roster = snapshot.roster(&team).log_err().unwrap_or_default();
            if roster.is_empty() {
                println!("No players found for team {}", team);
                return Ok(());
            }
            let games = collect_team_games(&snapshot, &team);
            log::info!("team {}: {} players, {} games", team, roster.len(), games.len());
            let stats = compute_stats(&roster, &games, &team);
            render(cli.format, stats.accumulators.values())?
        }
        Command::Schedule { team_id } => {
            let team = TeamId::new(team_id);
            let schedule = Schedule::split(collect_team_games(&snapshot, &team), now);
            if schedule.is_empty() {
                println!("No games found for team {}", team);
                return Ok(());
            }
            render(cli.format, ScheduleRow::from_schedule(&schedule, &team))?
        }
        Command::League {
            competition_id,
            table,
        } => {
            let league = match load_league(&snapshot, &competition_id, now) {
                Some(league) => league,
                None => {
                    println!("League not found: {}", competition_id);
                    return Ok(());
                }
            };
            log::info!(
                "league {}: {} teams, {} games",
                league.competition.name,
                league.standings.len(),
                league.games.len()
            );
            render_league_table(cli.format, &league, table)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn render_league_table(
    format: Format,
    league: &LeagueSnapshot,
    table: LeagueTable,
) -> Result<String> {
    match table {
        LeagueTable::Standings => render(format, &league.standings),
        LeagueTable::Players => render(format, &league.players),
        LeagueTable::Leaders => render(format, &league.leaders),
        LeagueTable::TopBatters => render(format, &league.top_batters),
        LeagueTable::Games => render(format, &league.games),
    }
}
