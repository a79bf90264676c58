use chaos_core::{
    compute_chaos_score, compute_collapse_risk, compute_flop_meter, compute_spread_band,
    compute_total_band, generate_notes, generate_tags, Archetype, EngineConfig, GameContext,
    Matchup, ScoringEngine, TagScope, TeamProfile,
};

fn quiet(name: &str) -> TeamProfile {
    TeamProfile::new(name, name).with_rates(0.0, 0.0)
}

#[test]
fn test_total_band_reference_line() {
    let band = compute_total_band(220.0, 50.0);
    assert_eq!(band.low, (207.0, 211.0));
    assert_eq!(band.mid, (217.0, 223.0));
    assert_eq!(band.high, (229.0, 235.0));
    assert_eq!(band.insane, (236.0, 247.0));
}

#[test]
fn test_quiet_profiles_score_zero() {
    let home = quiet("H");
    let away = quiet("A");
    assert_eq!(compute_chaos_score(&home, &away), 0.0);
    assert_eq!(compute_collapse_risk(&home, &away), 0.0);
}

#[test]
fn test_spread_band_home_shooting_and_variance() {
    let home = quiet("H")
        .with_archetype(Archetype::PoorShootingFloor)
        .with_archetype(Archetype::HighVariance);
    let away = quiet("A");

    let band = compute_spread_band(3.0, &home, &away);
    assert_eq!(band.min, -1.0);
    assert_eq!(band.max, 9.0);
}

#[test]
fn test_spread_band_mixed_sides() {
    let home = quiet("H").with_archetype(Archetype::ComebackEquity);
    let away = quiet("A")
        .with_archetype(Archetype::PoorShootingFloor)
        .with_archetype(Archetype::HighVariance);

    // Away shooting floor drags min, away variance pushes max.
    let band = compute_spread_band(0.0, &home, &away);
    assert_eq!(band.min, -9.0);
    assert_eq!(band.max, 4.0);
}

#[test]
fn test_spread_band_reports_raw_edges() {
    // Every min-side shift at once against a single max-side shift. The pair
    // is returned exactly as computed, never reordered.
    let home = quiet("H")
        .with_archetype(Archetype::HighVariance)
        .with_archetype(Archetype::ComebackEquity);
    let away = quiet("A").with_archetype(Archetype::PoorShootingFloor);

    let band = compute_spread_band(-2.5, &home, &away);
    assert_eq!(band.min, -2.5 - 4.0 - 3.0 - 6.0);
    assert_eq!(band.max, -2.5);
    assert_eq!(band.width(), 13.0);
}

#[test]
fn test_notes_empty_and_unknown() {
    let empty: Vec<String> = Vec::new();
    assert!(generate_notes(&empty).is_empty());

    let notes = generate_notes(&["Stepperz", "NotATag", "Fortified"]);
    assert_eq!(
        notes,
        vec![
            "Stepperz team detected: blowout + over-smash risk",
            "Fortified team: real comeback equity from +15",
        ]
    );
}

#[test]
fn test_tags_notes_one_to_one() {
    let mut home = quiet("H");
    let mut away = quiet("A");
    for archetype in Archetype::ALL {
        home.set(archetype, true);
        away.set(archetype, true);
    }

    let tags = generate_tags(&home, &away, 0.0, 0.0, TagScope::BothTeams);
    assert_eq!(
        tags,
        vec!["Stepperz", "Scrubs", "Headaches", "Fortified", "OMA", "Bricksquad", "Hitterz-Ballerz"]
    );
    assert_eq!(generate_notes(&tags).len(), tags.len());
}

#[test]
fn test_default_rates_and_pace() {
    let home = TeamProfile::default();
    let away = TeamProfile::default();

    // (14 + 14) / 4 + (15 + 15) / 4
    assert_eq!(compute_chaos_score(&home, &away), 14.5);
    // (14 + 14) / 5
    assert!((compute_collapse_risk(&home, &away) - 5.6).abs() < 1e-10);
    assert_eq!(compute_flop_meter(&home, &away, &GameContext::default()), 14.5);
}

#[test]
fn test_ticket_json_roundtrip_shape() {
    let matchup = Matchup::from_json(
        r#"{
            "home": {"teamId": "GSW", "isStepperz": true, "isBricksquad": true,
                     "last3Grade": "trash", "q4Grade": "trash",
                     "foulRate": 18, "turnoverRate": 12},
            "away": {"teamId": "PHX", "isHeadaches": true, "q4Grade": "elite",
                     "foulRate": 20, "turnoverRate": 16},
            "game": {"pace": 90, "momentum": 55, "quarter": 4,
                     "timeRemaining": "2:10"},
            "ticket": {"houseTotal": 230.5, "houseSpread": -2.5,
                       "pickSide": "home", "pickType": "total"}
        }"#,
    )
    .unwrap();

    let result = ScoringEngine::new(EngineConfig::new(TagScope::BothTeams)).score(&matchup);

    // 15 + 8 + 10 + 5 (home) + 12 - 3 (away) + 28 / 4 + 38 / 4
    assert!((result.chaos_score - 63.5).abs() < 1e-10, "chaos {}", result.chaos_score);
    // 15 + 28 / 5
    assert!((result.collapse_risk - 20.6).abs() < 1e-10, "collapse {}", result.collapse_risk);
    // 15 (pace) + 12 + 28 / 4 + 38 / 4 + 10 (momentum)
    assert!((result.flop_risk - 53.5).abs() < 1e-10, "flop {}", result.flop_risk);
    assert_eq!(result.tags, vec!["Stepperz", "Bricksquad", "Headaches"]);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["totalBand"]["mid"], serde_json::json!([227.5, 233.5]));
    assert_eq!(json["spreadBand"]["min"], -6.5);
    assert_eq!(json["spreadBand"]["max"], 3.5);
    assert_eq!(json["notes"].as_array().unwrap().len(), 3);
    assert!(json.get("chaosScore").is_some());
}
