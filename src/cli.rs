use crate::export::Format;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "season stats from recorded box scores")]
pub struct Cli {
    /// JSON export of the league database
    #[arg(long, env = "BOXSCORE_SNAPSHOT")]
    pub snapshot: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Per-player season stats for a team
    Team { team_id: String },
    /// A team's upcoming and past games
    Schedule { team_id: String },
    /// Standings, leaders and player stats for a competition
    League {
        competition_id: String,

        /// Which table to print
        #[arg(long, value_enum, default_value_t = LeagueTable::Standings)]
        table: LeagueTable,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LeagueTable {
    Standings,
    Players,
    Leaders,
    TopBatters,
    Games,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["boxscore", "--snapshot", "db.json", "team", "7"]).unwrap();
        assert_eq!(cli.format, Format::Csv);
        assert_eq!(cli.snapshot, PathBuf::from("db.json"));
        assert_eq!(cli.command, Command::Team { team_id: "7".into() });

        let cli = Cli::try_parse_from([
            "boxscore",
            "--snapshot",
            "db.json",
            "--format",
            "json",
            "league",
            "c1",
            "--table",
            "top-batters",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(
            cli.command,
            Command::League {
                competition_id: "c1".into(),
                table: LeagueTable::TopBatters,
            }
        );
    }

    #[test]
    fn requires_a_command() {
        assert!(Cli::try_parse_from(["boxscore", "--snapshot", "db.json"]).is_err());
    }
}
