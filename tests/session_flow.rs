// tests/session_flow.rs
use drug_finder::{store, Mode, Session};

#[test]
fn type_pick_refine() {
    let c = store::bundled().unwrap();
    let mut s = Session::default();

    s.set_query(&c, "노바");
    let sugg: Vec<&str> = s.suggestions(&c).iter().map(|r| r.name.as_str()).collect();
    assert_eq!(sugg, ["노바스크정5mg", "노바스크정10mg"]);
    assert!(s.results(&c).is_empty());

    assert!(s.pick_suggestion(&c, 1));
    assert_eq!(s.query(), "노바스크정10mg");
    assert!(s.suggestion_indices().is_empty());
    assert_eq!(s.selected(&c).unwrap().name, "노바스크정10mg");
    assert_eq!(s.results(&c).len(), 3);

    s.set_same_dose_only(true);
    assert_eq!(s.results(&c).names(), ["노바스크정10mg"]);

    s.toggle_same_dose_only();
    assert_eq!(s.results(&c).len(), 3);
}

#[test]
fn pick_out_of_range_is_ignored() {
    let c = store::bundled().unwrap();
    let mut s = Session::default();
    s.set_query(&c, "지르");
    assert!(!s.pick_suggestion(&c, 5));
    assert!(s.selected_index().is_none());
}

#[test]
fn submit_exact_and_miss() {
    let c = store::bundled().unwrap();
    let mut s = Session::default();

    s.set_query(&c, "리피토정10mg");
    assert!(s.submit(&c));
    assert_eq!(s.results(&c).names(), ["리피토정10mg", "리피토정20mg", "아토르바정10mg"]);

    // a miss keeps the previous selection
    s.set_query(&c, "리피토");
    assert!(!s.submit(&c));
    assert_eq!(s.selected(&c).unwrap().name, "리피토정10mg");
    assert_eq!(s.results(&c).len(), 3);
}

#[test]
fn new_selection_resets_same_dose() {
    let c = store::bundled().unwrap();
    let mut s = Session::default();
    s.set_query(&c, "알레그라정120mg");
    s.submit(&c);
    s.set_same_dose_only(true);

    s.set_query(&c, "알레그라정180mg");
    s.submit(&c);
    assert!(!s.same_dose_only());
    assert_eq!(s.results(&c).len(), 2);
}

#[test]
fn category_mode_round_trip() {
    let c = store::bundled().unwrap();
    let mut s = Session::default();
    s.set_query(&c, "넥시움정20mg");
    s.submit(&c);

    s.select_category(" 당뇨약 ");
    assert_eq!(s.mode(), Mode::Category);
    assert_eq!(s.category(), Some("당뇨약"));
    assert_eq!(s.results(&c).len(), 4);

    s.clear_category();
    assert_eq!(s.mode(), Mode::Search);
    assert_eq!(s.results(&c).names(), ["넥시움정20mg", "넥시움정40mg"]);

    s.clear();
    assert!(s.results(&c).is_empty());
    assert_eq!(s.query(), "");
}

#[test]
fn cleared_category_screen_stays_empty() {
    let c = store::bundled().unwrap();
    let mut s = Session::default();
    s.set_query(&c, "넥시움정20mg");
    s.submit(&c);

    s.select_category("당뇨약");
    assert_eq!(s.results_in(&c, Mode::Category).len(), 4);
    assert!(s.results_in(&c, Mode::Search).is_empty());

    s.clear_category();
    assert!(s.results_in(&c, Mode::Category).is_empty());
    assert_eq!(s.results_in(&c, Mode::Search).names(), ["넥시움정20mg", "넥시움정40mg"]);
}

#[test]
fn limit_caps_suggestions() {
    let c = store::bundled().unwrap();
    let mut s = Session::with_limit(1);
    s.set_query(&c, "디오반");
    assert_eq!(s.suggestion_indices().len(), 1);
}
