use super::*;
use serde_json::json;

#[test]
fn test_team_summary_deserialization() {
    let value = json!({
        "id": 1,
        "name": "Green Bay Packers",
        "abbreviation": "GB",
        "logoUrl": "https://cdn.example.com/gb.png"
    });

    let team: TeamSummary = serde_json::from_value(value).unwrap();
    assert_eq!(team.id, TeamId::new(1));
    assert_eq!(team.name, "Green Bay Packers");
    assert_eq!(team.abbreviation, "GB");
    assert_eq!(team.logo_url.as_deref(), Some("https://cdn.example.com/gb.png"));
}

#[test]
fn test_team_detail_deserialization_with_roster() {
    let value = json!({
        "id": 9,
        "name": "Chicago Bears",
        "abbreviation": "CHI",
        "record": "7-10",
        "divisionStanding": "3rd in NFC North",
        "venue": "Soldier Field",
        "roster": [
            {
                "id": 4046,
                "name": "Example Player",
                "jersey": 18,
                "position": "QB",
                "age": 25,
                "height": "6-4",
                "weight": 230,
                "experience": 0,
                "college": "Southern California",
                "status": "Active",
                "headshotUrl": "https://cdn.example.com/4046.png"
            }
        ]
    });

    let team: Team = serde_json::from_value(value).unwrap();
    assert_eq!(team.record.as_deref(), Some("7-10"));
    assert_eq!(team.division_standing.as_deref(), Some("3rd in NFC North"));
    assert_eq!(team.venue.as_deref(), Some("Soldier Field"));
    assert_eq!(team.roster.len(), 1);

    let player = &team.roster[0];
    assert_eq!(player.id, PlayerId::new(4046));
    assert_eq!(player.position, "QB");
    assert_eq!(player.experience, Some(0));
}

#[test]
fn test_team_detail_missing_optional_fields() {
    // Record, standing, venue, and roster may all be absent
    let value = json!({
        "id": 2,
        "name": "New York Jets",
        "abbreviation": "NYJ"
    });

    let team: Team = serde_json::from_value(value).unwrap();
    assert!(team.record.is_none());
    assert!(team.venue.is_none());
    assert!(team.roster.is_empty());
}

#[test]
fn test_roster_player_null_experience() {
    let value = json!({
        "id": 77,
        "name": "Veteran Unknown",
        "position": "OT",
        "experience": null
    });

    let player: RosterPlayer = serde_json::from_value(value).unwrap();
    assert_eq!(player.experience, None);
    assert!(player.college.is_none());
    assert!(player.status.is_none());
}

#[test]
fn test_player_profile_deserialization() {
    let value = json!({
        "id": 4046,
        "name": "Example Player",
        "position": "QB",
        "team": "CHI",
        "jersey": 18,
        "age": 25,
        "height": "6-4",
        "weight": 230,
        "college": "Southern California",
        "careerStats": {
            "passing": {
                "completions": 896,
                "attempts": 1388,
                "yards": 9763,
                "touchdowns": 58,
                "interceptions": 30,
                "rating": 85.9
            },
            "rushing": {
                "attempts": 191,
                "yards": 1048,
                "touchdowns": 14
            }
        },
        "availableSeasons": [2023, 2022, 2021]
    });

    let profile: PlayerProfile = serde_json::from_value(value).unwrap();
    assert_eq!(profile.id, PlayerId::new(4046));
    assert_eq!(
        profile.available_seasons,
        vec![Season::new(2023), Season::new(2022), Season::new(2021)]
    );

    let passing = profile.career_stats.passing.as_ref().unwrap();
    assert_eq!(passing.attempts, Some(1388.0));
    assert_eq!(passing.rating, Some(85.9));
    // Absent field stays absent, not zero
    assert_eq!(passing.completion_pct, None);

    assert!(profile.career_stats.receiving.is_none());
    assert!(profile.career_stats.defensive.is_none());
}

#[test]
fn test_player_profile_without_stats() {
    let value = json!({
        "id": 1,
        "name": "Practice Squad Player"
    });

    let profile: PlayerProfile = serde_json::from_value(value).unwrap();
    assert!(profile.available_seasons.is_empty());
    assert!(profile.career_stats.categories().is_empty());
}

#[test]
fn test_season_stats_flattened_categories() {
    let value = json!({
        "season": 2023,
        "passing": { "yards": 2562, "touchdowns": 20 },
        "fumbles": { "fumbles": 4, "fumblesLost": 2 }
    });

    let stats: SeasonStats = serde_json::from_value(value).unwrap();
    assert_eq!(stats.season, Some(Season::new(2023)));
    assert_eq!(stats.stats.passing.as_ref().unwrap().yards, Some(2562.0));
    assert_eq!(stats.stats.fumbles.as_ref().unwrap().fumbles_lost, Some(2.0));
    assert!(stats.stats.rushing.is_none());
}

#[test]
fn test_game_log_entry_deserialization() {
    let value = json!({
        "week": 5,
        "date": "2023-10-05",
        "opponent": "WSH",
        "won": true,
        "passing": {
            "completions": 21,
            "attempts": 29,
            "yards": 282,
            "touchdowns": 1,
            "rating": 108.4
        }
    });

    let game: GameLogEntry = serde_json::from_value(value).unwrap();
    assert_eq!(game.week, Some(5));
    assert_eq!(game.opponent.as_deref(), Some("WSH"));
    assert!(game.won);
    assert_eq!(game.stats.passing.as_ref().unwrap().attempts, Some(29.0));
    assert!(game.stats.defensive.is_none());
}

#[test]
fn test_game_log_entry_missing_won_defaults_to_loss() {
    let value = json!({ "week": 1, "opponent": "DET" });

    let game: GameLogEntry = serde_json::from_value(value).unwrap();
    assert!(!game.won);
}

#[test]
fn test_stat_groups_categories_order_and_presence() {
    let groups = StatGroups {
        passing: Some(PassingStats::default()),
        rushing: None,
        receiving: Some(ReceivingStats {
            receptions: Some(10.0),
            ..Default::default()
        }),
        defensive: None,
        fumbles: Some(FumbleStats::default()),
    };

    let titles: Vec<&str> = groups.categories().iter().map(|(t, _)| *t).collect();
    assert_eq!(titles, vec!["Passing", "Receiving", "Fumbles"]);
}

#[test]
fn test_category_entries_use_camel_case_keys() {
    let defensive = DefensiveStats {
        total_tackles: Some(88.0),
        ..Default::default()
    };
    let keys: Vec<&str> = defensive.entries().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec![
            "totalTackles",
            "soloTackles",
            "sacks",
            "tacklesForLoss",
            "passesDefended",
            "interceptions",
            "forcedFumbles"
        ]
    );
}
