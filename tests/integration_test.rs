use leaderboard_engine::providers::{FlatFileSource, RecordProvider};
use leaderboard_engine::{
    format, DistanceKey, FlatRecord, LeaderboardEngine, LeaderboardQuery, Rank, RawRecord,
    SortConfig, SortDirection,
};

fn flat(name: &str, columns: &[(&str, &str)]) -> RawRecord {
    RawRecord::Flat(FlatRecord {
        id: name.to_string(),
        name: name.to_string(),
        columns: columns
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..Default::default()
    })
}

#[test]
fn test_marathon_round_trip_scenario() {
    // Records: Bob 7320s, Amy absent, Cat 7200s at the marathon.
    let mut engine = LeaderboardEngine::new().with_primary_distance(DistanceKey::Marathon);
    engine.load_records(vec![
        flat("Bob", &[("Marathon", "7320")]),
        flat("Amy", &[]),
        flat("Cat", &[("Marathon", "7200")]),
    ]);

    let view = engine.view();
    let rank_of = |name: &str| view.iter().find(|r| r.name == name).unwrap().rank;

    assert_eq!(rank_of("Cat"), Rank::Ranked(1));
    assert_eq!(rank_of("Bob"), Rank::Ranked(2));
    assert_eq!(rank_of("Amy"), Rank::Unranked);

    let cat = view.iter().find(|r| r.name == "Cat").unwrap();
    assert_eq!(engine.format_cell(cat, DistanceKey::Marathon), "02:00:00");
}

#[test]
fn test_missing_last_in_both_directions() {
    let records = vec![
        flat("NoTime", &[]),
        flat("HasTime", &[("10K", "2400")]),
    ];

    let mut engine = LeaderboardEngine::new();
    engine.load_records(records);

    engine.set_sort(SortConfig::ascending(DistanceKey::TenK));
    let ascending: Vec<String> = engine.view().iter().map(|r| r.name.clone()).collect();
    assert_eq!(ascending, vec!["HasTime", "NoTime"]);

    engine.set_sort(SortConfig::new(DistanceKey::TenK, SortDirection::Descending));
    let descending: Vec<String> = engine.view().iter().map(|r| r.name.clone()).collect();
    assert_eq!(descending, vec!["HasTime", "NoTime"]);
}

#[test]
fn test_sort_toggle_and_filter_compose() {
    let mut engine = LeaderboardEngine::new();
    engine.load_records(vec![
        flat("Anna", &[("5K", "1200"), ("Half-Marathon", "5400")]),
        flat("Bob", &[("5K", "1100")]),
        flat("Hannah", &[("5K", "1300"), ("Half-Marathon", "5300")]),
    ]);

    engine.set_sort_key(DistanceKey::FiveK);
    let names: Vec<String> = engine.view().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["Bob", "Anna", "Hannah"]);

    // Same key again: descending.
    engine.set_sort_key(DistanceKey::FiveK);
    let names: Vec<String> = engine.view().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["Hannah", "Anna", "Bob"]);

    // Filtering is a view: order and ranks survive.
    engine.set_search("ANN");
    let filtered = engine.view();
    let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Hannah", "Anna"]);
    // Rank still pinned to the half-marathon: Hannah 5300 beats Anna 5400.
    assert_eq!(filtered[0].rank, Rank::Ranked(1));
    assert_eq!(filtered[1].rank, Rank::Ranked(2));

    // New key resets to ascending.
    engine.reset_search();
    engine.set_sort_key(DistanceKey::HalfMarathon);
    let view = engine.view();
    assert_eq!(view[0].name, "Hannah");
    assert_eq!(view.last().unwrap().name, "Bob"); // no half-marathon time
}

#[test]
fn test_format_properties() {
    assert_eq!(format::format_time(None), "");
    assert_eq!(format::format_time(Some(0)), "");
    assert_eq!(format::format_time(Some(65)), "01:05");
    assert_eq!(format::format_time(Some(3661)), "01:01:01");
}

#[tokio::test]
async fn test_file_source_pipeline_end_to_end() {
    let path = std::env::temp_dir().join("leaderboard_engine_integration.tsv");
    tokio::fs::write(
        &path,
        "id\tname\tstrava_id\tHalf-Marathon\tMarathon\n\
         1\tAnna\t100\t5400\t13200\n\
         2\tBob\t101\t5500\tnot-a-number\n\
         3\tCat\t102\t\t12900\n",
    )
    .await
    .unwrap();

    let source = FlatFileSource::new(&path);
    assert!(!source.delegates_sorting());

    let mut engine = LeaderboardEngine::new();
    engine.refresh(&source).await.unwrap();
    tokio::fs::remove_file(&path).await.ok();

    assert_eq!(engine.len(), 3);

    // Rank by half-marathon: Anna 1, Bob 2, Cat unranked.
    let view = engine.view();
    let rank_of = |name: &str| view.iter().find(|r| r.name == name).unwrap().rank;
    assert_eq!(rank_of("Anna"), Rank::Ranked(1));
    assert_eq!(rank_of("Bob"), Rank::Ranked(2));
    assert_eq!(rank_of("Cat"), Rank::Unranked);

    // Malformed marathon cell is absent, so Bob sorts last by marathon.
    let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cat", "Anna", "Bob"]);
}

#[test]
fn test_query_codec_matches_engine_state() {
    let mut engine = LeaderboardEngine::new();
    engine.set_sort_key(DistanceKey::HalfMarathon);
    engine.set_search("ann");

    let query = engine.current_query();
    let pairs = query.to_query_pairs();
    let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();

    let decoded = LeaderboardQuery::from_query_pairs(borrowed).unwrap();
    assert_eq!(decoded, query);
    assert_eq!(decoded.sort.key, DistanceKey::HalfMarathon);
    assert_eq!(decoded.name_contains.as_deref(), Some("ann"));
}
