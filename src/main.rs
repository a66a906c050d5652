//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nfl_stats::{
    cli::{Commands, NflStats},
    commands::{
        player::{handle_player, PlayerViewParams},
        resolve_api_url,
        team::handle_team,
        teams::handle_teams,
    },
    NflApi, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NflStats::parse();
    let api = NflApi::new(resolve_api_url(app.api_url)?)?.with_debug(app.debug);

    match app.command {
        Commands::Teams { search, json } => handle_teams(&api, search, json).await?,

        Commands::Team {
            team_id,
            position,
            search,
            json,
        } => handle_team(&api, team_id, position, search, json).await?,

        Commands::Player {
            player_id,
            tab,
            season,
            json,
        } => {
            handle_player(
                &api,
                PlayerViewParams {
                    player_id,
                    tab,
                    season,
                    as_json: json,
                },
            )
            .await?
        }
    }

    Ok(())
}
