use mainsboard::bst::BstTable;
use mainsboard::core::calculator::ordering::{after, sorted_most_recent_first};
use mainsboard::core::calculator::time_since::time_since;
use mainsboard::core::logic::Core;
use mainsboard::models::LogRow;

mod common;
use common::{rows, ymd};

fn builtin() -> BstTable {
    BstTable::builtin().expect("built-in BST table")
}

// ---------------------------
// ordering
// ---------------------------

#[test]
fn test_after_uses_sequence_on_same_day() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Pikachu", "Route 1", "1/1/2024"),
    ]);

    assert!(after(&log[1], &log[0]));
    assert!(!after(&log[0], &log[1]));
    assert!(!after(&log[0], &log[0]));
}

#[test]
fn test_after_ranks_malformed_date_lowest() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Missingno", "Cinnabar", "someday"),
    ]);

    assert!(after(&log[0], &log[1]));
    assert!(!after(&log[1], &log[0]));
}

#[test]
fn test_sorting_ignores_input_order() {
    let log = rows(&[
        ("A", "X", "1/3/2024"),
        ("B", "X", "1/1/2024"),
        ("C", "X", "1/3/2024"),
        ("D", "X", "1/2/2024"),
    ]);
    let mut shuffled = log.clone();
    shuffled.reverse();

    let a: Vec<&str> = sorted_most_recent_first(&log).iter().map(|r| r.pokemon.as_str()).collect();
    let b: Vec<&str> = sorted_most_recent_first(&shuffled).iter().map(|r| r.pokemon.as_str()).collect();

    assert_eq!(a, vec!["C", "A", "D", "B"]);
    assert_eq!(a, b);
}

// ---------------------------
// time since
// ---------------------------

#[test]
fn test_time_since_same_day() {
    let d = Some(ymd(2024, 1, 1));
    assert_eq!(time_since(d, d), "0 days");
}

#[test]
fn test_time_since_years_months_days() {
    // 400 days apart
    let a = Some(ymd(2023, 1, 1));
    let b = Some(ymd(2024, 2, 5));
    assert_eq!(time_since(a, b), "1 yr, 1 mo, 4 days");
}

#[test]
fn test_time_since_is_symmetric() {
    let a = Some(ymd(2023, 1, 1));
    let b = Some(ymd(2024, 2, 5));
    assert_eq!(time_since(a, b), time_since(b, a));
}

#[test]
fn test_time_since_singular_units() {
    assert_eq!(
        time_since(Some(ymd(2024, 1, 1)), Some(ymd(2025, 2, 2))),
        "1 yr, 1 mo, 1 day"
    );
}

#[test]
fn test_time_since_borrows_days_from_previous_month() {
    assert_eq!(
        time_since(Some(ymd(2024, 3, 15)), Some(ymd(2024, 4, 10))),
        "26 days"
    );
}

#[test]
fn test_time_since_end_of_month_never_negative() {
    assert_eq!(
        time_since(Some(ymd(2024, 1, 31)), Some(ymd(2024, 3, 1))),
        "30 days"
    );
}

#[test]
fn test_time_since_missing_date_is_never() {
    assert_eq!(time_since(None, Some(ymd(2024, 1, 1))), "Never");
    assert_eq!(time_since(Some(ymd(2024, 1, 1)), None), "Never");
}

// ---------------------------
// leaderboard
// ---------------------------

#[test]
fn test_leaderboard_counts_and_recency() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Pikachu", "Route 2", "1/1/2024"),
        ("Charmander", "Route 3", "1/2/2024"),
    ]);

    let board = Core::leaderboard(&log, &builtin(), ymd(2024, 1, 2));
    assert_eq!(board.len(), 2);

    let pika = &board[0];
    assert_eq!(pika.pokemon, "Pikachu");
    assert_eq!(pika.count, 2);
    assert_eq!(pika.last_sequence, 1);
    assert_eq!(pika.runs_since_last, Some(1));
    assert_eq!(pika.time_since_last, "1 day");
    assert_eq!(pika.bst, 320);

    let charm = &board[1];
    assert_eq!(charm.pokemon, "Charmander");
    assert_eq!(charm.runs_since_last, Some(0));
    assert_eq!(charm.time_since_last, "0 days");
    assert_eq!(charm.bst, 309);
}

#[test]
fn test_leaderboard_ties_least_recent_first() {
    let log = rows(&[
        ("Bulbasaur", "Route 1", "1/1/2024"),
        ("Squirtle", "Route 1", "1/3/2024"),
        ("Charmander", "Route 1", "1/2/2024"),
    ]);

    let board = Core::leaderboard(&log, &builtin(), ymd(2024, 1, 3));
    let order: Vec<&str> = board.iter().map(|e| e.pokemon.as_str()).collect();
    assert_eq!(order, vec!["Bulbasaur", "Charmander", "Squirtle"]);
}

#[test]
fn test_leaderboard_same_last_day_keeps_first_seen_order() {
    // Bulbasaur's last run is appended after Oddish's, on the same day
    let log = rows(&[
        ("Bulbasaur", "Route 1", "1/1/2024"),
        ("Oddish", "Route 2", "1/2/2024"),
        ("Bulbasaur", "Route 1", "1/2/2024"),
        ("Oddish", "Route 2", "1/1/2024"),
    ]);

    let board = Core::leaderboard(&log, &builtin(), ymd(2024, 1, 2));
    assert_eq!(board[0].pokemon, "Bulbasaur");
    assert_eq!(board[0].last_sequence, 2);
    assert_eq!(board[1].pokemon, "Oddish");
    assert_eq!(board[1].last_sequence, 1);
}

#[test]
fn test_leaderboard_counts_sum_to_total() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Eevee", "Goldenrod", "1/2/2024"),
        ("Pikachu", "Route 1", "1/3/2024"),
        ("Missingno", "Cinnabar", "not a date"),
        ("Eevee", "Goldenrod", "1/4/2024"),
    ]);

    let board = Core::leaderboard(&log, &builtin(), ymd(2024, 1, 4));
    let total: usize = board.iter().map(|e| e.count).sum();
    assert_eq!(total, log.len());
}

#[test]
fn test_leaderboard_malformed_only_is_never() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Missingno", "Cinnabar", "garbage"),
    ]);

    let board = Core::leaderboard(&log, &builtin(), ymd(2024, 1, 1));
    let missingno = board
        .iter()
        .find(|e| e.pokemon == "Missingno")
        .expect("Missingno on the board");

    assert_eq!(missingno.last_date, None);
    assert_eq!(missingno.runs_since_last, None);
    assert_eq!(missingno.time_since_last, "Never");
    assert_eq!(missingno.bst, 0);
    // no date sorts ahead of any real date among equal counts
    assert_eq!(board[0].pokemon, "Missingno");
}

#[test]
fn test_leaderboard_json_field_names() {
    let log = rows(&[("Pikachu", "Route 1", "1/1/2024")]);
    let board = Core::leaderboard(&log, &builtin(), ymd(2024, 1, 1));

    let json = serde_json::to_value(&board).expect("serialize");
    let first = &json[0];
    assert_eq!(first["Pokemon"], "Pikachu");
    assert_eq!(first["Count"], 1);
    assert_eq!(first["Last Time Ran"], "1/1/2024");
    assert_eq!(first["BST"], 320);
    assert_eq!(first["Time Since Last Ran"], "0 days");
    assert_eq!(first["Runs Since Last Ran"], "0");
}

// ---------------------------
// recent
// ---------------------------

fn pikachu_sandwich() -> Vec<LogRow> {
    rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Bulbasaur", "Route 2", "1/2/2024"),
        ("Charmander", "Route 3", "1/3/2024"),
        ("Squirtle", "Route 4", "1/4/2024"),
        ("Eevee", "Route 5", "1/5/2024"),
        ("Pikachu", "Route 6", "1/6/2024"),
    ])
}

#[test]
fn test_recent_runs_since_previous_occurrence() {
    let recent = Core::recent(&pikachu_sandwich(), 10);

    assert_eq!(recent.len(), 6);
    assert_eq!(recent[0].pokemon, "Pikachu");
    assert_eq!(recent[0].runs_since_last, Some(5));
    assert_eq!(recent[0].time_since_last, "5 days");

    for e in &recent[1..] {
        assert_eq!(e.runs_since_last, None);
        assert_eq!(e.time_since_last, "Never");
    }
}

#[test]
fn test_recent_looks_past_the_window() {
    let recent = Core::recent(&pikachu_sandwich(), 1);

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].runs_since_last, Some(5));
}

#[test]
fn test_recent_limit_and_order() {
    let recent = Core::recent(&pikachu_sandwich(), 2);

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].pokemon, "Pikachu");
    assert_eq!(recent[1].pokemon, "Eevee");
    assert_eq!(recent[1].date, "1/5/2024");
}

#[test]
fn test_recent_same_day_latest_appended_first() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Eevee", "Route 2", "1/1/2024"),
    ]);

    let recent = Core::recent(&log, 10);
    assert_eq!(recent[0].pokemon, "Eevee");
    assert_eq!(recent[1].pokemon, "Pikachu");
}

#[test]
fn test_recent_empty_log() {
    assert!(Core::recent(&[], 10).is_empty());
}

// ---------------------------
// streaks
// ---------------------------

fn three_day_run() -> Vec<LogRow> {
    rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Eevee", "Route 2", "1/2/2024"),
        ("Eevee", "Route 2", "1/2/2024"),
        ("Togepi", "Route 3", "1/3/2024"),
    ])
}

#[test]
fn test_current_streak_today() {
    let s = Core::current_streak(&three_day_run(), ymd(2024, 1, 3));
    assert_eq!(s.current_streak, 3);
}

#[test]
fn test_current_streak_still_alive_yesterday() {
    let s = Core::current_streak(&three_day_run(), ymd(2024, 1, 4));
    assert_eq!(s.current_streak, 3);
}

#[test]
fn test_current_streak_broken() {
    let s = Core::current_streak(&three_day_run(), ymd(2024, 1, 5));
    assert_eq!(s.current_streak, 0);
}

#[test]
fn test_current_streak_stops_at_gap() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Pikachu", "Route 1", "1/3/2024"),
        ("Pikachu", "Route 1", "1/4/2024"),
    ]);
    assert_eq!(Core::current_streak(&log, ymd(2024, 1, 4)).current_streak, 2);
}

#[test]
fn test_current_streak_empty_log() {
    assert_eq!(Core::current_streak(&[], ymd(2024, 1, 4)).current_streak, 0);
}

#[test]
fn test_longest_streak_with_span() {
    let log = rows(&[
        ("A", "X", "1/1/2024"),
        ("A", "X", "1/2/2024"),
        ("A", "X", "1/5/2024"),
        ("A", "X", "1/6/2024"),
        ("A", "X", "1/7/2024"),
        ("A", "X", "1/10/2024"),
    ]);

    let s = Core::longest_streak(&log);
    assert_eq!(s.longest_streak, 3);
    assert_eq!(s.start_date, Some(ymd(2024, 1, 5)));
    assert_eq!(s.end_date, Some(ymd(2024, 1, 7)));

    let json = serde_json::to_value(s).expect("serialize");
    assert_eq!(json["start_date"], "1/5/2024");
    assert_eq!(json["end_date"], "1/7/2024");
}

#[test]
fn test_longest_streak_earliest_wins_ties() {
    let log = rows(&[
        ("A", "X", "1/5/2024"),
        ("A", "X", "1/6/2024"),
        ("A", "X", "1/1/2024"),
        ("A", "X", "1/2/2024"),
    ]);

    let s = Core::longest_streak(&log);
    assert_eq!(s.longest_streak, 2);
    assert_eq!(s.start_date, Some(ymd(2024, 1, 1)));
    assert_eq!(s.end_date, Some(ymd(2024, 1, 2)));
}

#[test]
fn test_longest_streak_empty_log() {
    let s = Core::longest_streak(&[]);
    assert_eq!(s.longest_streak, 0);
    assert_eq!(s.start_date, None);

    let json = serde_json::to_value(s).expect("serialize");
    assert!(json["start_date"].is_null());
}

#[test]
fn test_max_runs_per_day() {
    let log = rows(&[
        ("A", "X", "3/1/2024"),
        ("B", "X", "03/01/2024"),
        ("C", "X", "3/1/2024"),
        ("D", "X", "3/2/2024"),
    ]);

    let m = Core::max_runs_per_day(&log);
    assert_eq!(m.max_runs, 3);
    assert_eq!(m.dates, vec!["3/1/2024".to_string()]);
}

#[test]
fn test_max_runs_per_day_ties_in_log_order() {
    let log = rows(&[
        ("A", "X", "3/2/2024"),
        ("B", "X", "3/1/2024"),
        ("C", "X", "3/2/2024"),
        ("D", "X", "3/1/2024"),
    ]);

    let m = Core::max_runs_per_day(&log);
    assert_eq!(m.max_runs, 2);
    assert_eq!(m.dates, vec!["3/2/2024".to_string(), "3/1/2024".to_string()]);
}

#[test]
fn test_streaks_skip_malformed_dates() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Missingno", "Cinnabar", "garbage"),
        ("Eevee", "Route 2", "1/2/2024"),
        ("Togepi", "Route 3", "1/3/2024"),
    ]);

    assert_eq!(Core::current_streak(&log, ymd(2024, 1, 3)).current_streak, 3);

    let longest = Core::longest_streak(&log);
    assert_eq!(longest.longest_streak, 3);
    assert_eq!(longest.start_date, Some(ymd(2024, 1, 1)));
    assert_eq!(longest.end_date, Some(ymd(2024, 1, 3)));
}

#[test]
fn test_max_runs_per_day_skips_malformed_dates() {
    let log = rows(&[
        ("A", "X", "1/1/2024"),
        ("B", "X", "garbage"),
        ("C", "X", "garbage"),
        ("D", "X", "1/2/2024"),
    ]);

    let m = Core::max_runs_per_day(&log);
    assert_eq!(m.max_runs, 1);
    assert_eq!(m.dates, vec!["1/1/2024".to_string(), "1/2/2024".to_string()]);
    assert!(!m.dates.iter().any(|d| d == "garbage"));
}

#[test]
fn test_all_malformed_log_has_no_streaks() {
    let log = rows(&[("A", "X", "garbage"), ("B", "X", "13/45/2024")]);

    let m = Core::max_runs_per_day(&log);
    assert_eq!(m.max_runs, 0);
    assert!(m.dates.is_empty());

    let longest = Core::longest_streak(&log);
    assert_eq!(longest.longest_streak, 0);
    assert_eq!(longest.start_date, None);

    assert_eq!(Core::current_streak(&log, ymd(2024, 1, 1)).current_streak, 0);
}

#[test]
fn test_recent_prior_with_malformed_date() {
    let log = rows(&[
        ("Pikachu", "Route 1", "garbage"),
        ("Eevee", "Route 2", "1/1/2024"),
        ("Pikachu", "Route 3", "1/2/2024"),
    ]);

    let recent = Core::recent(&log, 10);
    assert_eq!(recent[0].pokemon, "Pikachu");
    assert_eq!(recent[0].time_since_last, "Never");
    assert_eq!(recent[0].runs_since_last, Some(2));
    assert_eq!(recent[2].date, "garbage");
}

// ---------------------------
// locations and summary
// ---------------------------

#[test]
fn test_location_breakdown_ties_keep_first_seen() {
    let log = rows(&[
        ("A", "Route 29", "1/1/2024"),
        ("B", "Route 30", "1/1/2024"),
        ("C", "Route 31", "1/1/2024"),
        ("D", "Route 31", "1/1/2024"),
        ("E", "Route 29", "1/1/2024"),
    ]);

    let shares = Core::location_breakdown(&log, None);
    let names: Vec<&str> = shares.iter().map(|s| s.location.as_str()).collect();
    assert_eq!(names, vec!["Route 29", "Route 31", "Route 30"]);
    assert_eq!(shares[0].count, 2);
    assert!((shares[0].percentage - 40.0).abs() < 1e-9);
    assert!((shares[2].percentage - 20.0).abs() < 1e-9);

    let sum: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_location_breakdown_for_one_pokemon() {
    let log = rows(&[
        ("Pikachu", "Viridian Forest", "1/1/2024"),
        ("Eevee", "Goldenrod", "1/2/2024"),
        ("pikachu", "Power Plant", "1/3/2024"),
    ]);

    let shares = Core::location_breakdown(&log, Some("PIKACHU"));
    assert_eq!(shares.len(), 2);
    assert!(shares.iter().all(|s| s.location != "Goldenrod"));
    assert!(Core::location_breakdown(&log, Some("Mew")).is_empty());
}

#[test]
fn test_summary() {
    let log = rows(&[
        ("Pikachu", "Route 1", "1/1/2024"),
        ("Charmander", "Route 2", "1/2/2024"),
        ("Fakemon", "Route 3", "1/3/2024"),
    ]);

    let s = Core::summary(&log, &builtin());
    assert_eq!(s.total_runs, 3);
    assert_eq!(s.unique_pokemon, 3);
    assert_eq!(s.average_bst, (320 + 309) / 3);
    assert_eq!(s.lowest_bst, 0);
}

#[test]
fn test_summary_empty_log() {
    let s = Core::summary(&[], &builtin());
    assert_eq!(s.total_runs, 0);
    assert_eq!(s.average_bst, 0);
    assert_eq!(s.lowest_bst, 0);
}

#[test]
fn test_pokemon_detail_case_insensitive() {
    let log = rows(&[
        ("Pikachu", "Viridian Forest", "1/1/2024"),
        ("Eevee", "Goldenrod", "1/2/2024"),
        ("Pikachu", "Power Plant", "1/3/2024"),
    ]);

    let d = Core::pokemon_detail(&log, "pIkAcHu");
    assert_eq!(d.total_entries, 2);
    assert_eq!(d.entries[0].location, "Power Plant");
    assert_eq!(d.entries[1].location, "Viridian Forest");
    assert_eq!(d.location_percentages[0].location, "Viridian Forest");
}

#[test]
fn test_last_run() {
    let log = pikachu_sandwich();
    let last = Core::last_run(&log).expect("a last run");
    assert_eq!(last.location, "Route 6");
    assert!(Core::last_run(&[]).is_none());
}

// ---------------------------
// BST table
// ---------------------------

#[test]
fn test_bst_lookup() {
    let table = builtin();
    assert_eq!(table.lookup("Pikachu"), Some(320));
    assert_eq!(table.lookup("pikachu"), Some(320));
    assert_eq!(table.lookup("Agumon"), None);
    assert_eq!(table.bst_of("Agumon"), 0);
    assert_eq!(table.len(), 251);
}

#[test]
fn test_bst_exact_spelling_preferred() {
    let csv = "Pokemon,BST\nMr. Mime,460\nmr. mime,999\n";
    let table = BstTable::from_reader(csv.as_bytes()).expect("parse table");

    assert_eq!(table.lookup("mr. mime"), Some(999));
    assert_eq!(table.lookup("MR. MIME"), Some(460));
}

#[test]
fn test_bst_listing_sorted() {
    let csv = "Pokemon,BST\nZubat,245\nAbra,310\n";
    let table = BstTable::from_reader(csv.as_bytes()).expect("parse table");

    let names: Vec<String> = table.listing().into_iter().map(|e| e.pokemon).collect();
    assert_eq!(names, vec!["Abra".to_string(), "Zubat".to_string()]);
}

#[test]
fn test_bst_empty_table_rejected() {
    assert!(BstTable::from_reader("Pokemon,BST\n".as_bytes()).is_err());
}
