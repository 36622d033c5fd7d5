use super::*;
use catalog::{CatalogRecords, ReferencePolicy};
use serde_json::{json, Value};

fn singles(id: &str, name: &str, country: &str, event: &str) -> Value {
    json!({ "id": id, "name": name, "country": country, "event": event, "event_name": event })
}

fn catalog_with(athletes: Vec<Value>) -> Arc<Catalog> {
    let records: CatalogRecords = serde_json::from_value(json!({
        "countries": [
            { "code": "USA", "name": "United States", "flag": "🇺🇸", "avatar_color": "3C3B6E", "accent_color": "#3C3B6E" },
            { "code": "JPN", "name": "Japan", "flag": "🇯🇵", "avatar_color": "BC002D", "accent_color": "#BC002D" },
            { "code": "GEO", "name": "Georgia", "flag": "🇬🇪", "avatar_color": "FF0000", "accent_color": "#FF0000" }
        ],
        "events": [
            { "id": "mens", "name": "Men's Singles", "icon": "⭐", "dates": "Feb 10 & 13", "description": "", "color": "#3b82f6" },
            { "id": "womens", "name": "Women's Singles", "icon": "✨", "dates": "Feb 17 & 19", "description": "", "color": "#a855f7" },
            { "id": "pairs", "name": "Pairs", "icon": "❤️", "dates": "Feb 15-16", "description": "", "color": "#f43f5e" }
        ],
        "elements": { "3A": "Triple Axel - 3.5 rotations, most difficult triple" },
        "athletes": athletes
    }))
    .expect("records");
    Arc::new(Catalog::from_records(records, ReferencePolicy::Lenient).expect("catalog"))
}

fn small_catalog() -> Arc<Catalog> {
    catalog_with(vec![
        singles("malinin", "Ilia Malinin", "USA", "mens"),
        singles("kagiyama", "Yuma Kagiyama", "JPN", "mens"),
        singles("sakamoto", "Kaori Sakamoto", "JPN", "womens"),
        singles("liu", "Alysa Liu", "USA", "womens"),
        singles("gubanova", "Anastasiia Gubanova", "GEO", "womens"),
    ])
}

fn ids<'a>(athletes: &[&'a Athlete]) -> Vec<&'a str> {
    athletes.iter().map(|athlete| athlete.id.as_str()).collect()
}

#[test]
fn starts_on_home_with_empty_state() {
    let vm = CatalogViewModel::new(small_catalog());
    assert_eq!(vm.current_view(), View::Home);
    assert!(vm.selected_event().is_none());
    assert!(vm.selected_athlete().is_none());
    assert!(vm.favorite_ids().is_empty());
    assert_eq!(vm.search_query(), "");
    assert!(vm.element_info().is_none());
}

#[test]
fn back_from_athlete_detail_always_lands_on_athletes() {
    let mut vm = CatalogViewModel::new(small_catalog());

    vm.select_athlete(&"liu".into()).expect("from home");
    assert_eq!(vm.back(), View::Athletes);

    vm.select_tab(Tab::Saved);
    vm.select_athlete(&"liu".into()).expect("from favorites");
    assert_eq!(vm.go_back(View::AthleteDetail), View::Athletes);

    vm.select_event(&"womens".into()).expect("event");
    vm.select_athlete(&"sakamoto".into()).expect("from event roster");
    assert_eq!(vm.back(), View::Athletes);
    assert!(vm.selected_athlete().is_none());
    assert!(vm.selected_event().is_none());
}

#[test]
fn back_from_event_detail_lands_on_events() {
    let mut vm = CatalogViewModel::new(small_catalog());

    vm.select_event(&"pairs".into()).expect("from home");
    assert_eq!(vm.back(), View::Events);
    assert!(vm.selected_event().is_none());

    vm.select_tab(Tab::Schedule);
    vm.select_event(&"mens".into()).expect("from schedule");
    assert_eq!(vm.go_back(View::EventDetail), View::Events);
}

#[test]
fn back_from_list_screens_goes_home() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.select_tab(Tab::Saved);
    assert_eq!(vm.back(), View::Home);
    vm.select_tab(Tab::Athletes);
    assert_eq!(vm.go_back(View::Athletes), View::Home);
}

#[test]
fn tab_navigation_clears_stale_selection() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.select_event(&"mens".into()).expect("event");
    vm.select_athlete(&"malinin".into()).expect("athlete");
    assert_eq!(vm.selected_athlete().map(|a| a.id.as_str()), Some("malinin"));

    vm.select_tab(Tab::Home);
    assert_eq!(vm.current_view(), View::Home);
    assert!(vm.selected_athlete().is_none());
    assert!(vm.selected_event().is_none());
}

#[test]
fn navigate_to_keeps_selections_not_given() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.select_event(&"mens".into()).expect("event");

    vm.navigate_to(View::AthleteDetail, None, Some(&"kagiyama".into()))
        .expect("navigate");
    assert_eq!(vm.current_view(), View::AthleteDetail);
    assert_eq!(vm.selected_event().map(|e| e.id.as_str()), Some("mens"));
    assert_eq!(
        vm.selected_athlete().map(|a| a.id.as_str()),
        Some("kagiyama")
    );
}

#[test]
fn unknown_selection_is_rejected_without_state_change() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.select_tab(Tab::Athletes);
    let before = vm.navigation().clone();

    let err = vm.select_athlete(&"nobody".into()).expect_err("unknown athlete");
    assert_eq!(err, CatalogError::UnknownAthlete("nobody".into()));
    let err = vm.select_event(&"curling".into()).expect_err("unknown event");
    assert_eq!(err, CatalogError::UnknownEvent("curling".into()));
    vm.navigate_to(
        View::AthleteDetail,
        Some(&"mens".into()),
        Some(&"nobody".into()),
    )
    .expect_err("partial unknown");

    assert_eq!(vm.navigation(), &before);
}

#[test]
fn toggling_twice_restores_favorites() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.toggle_favorite(&"liu".into());
    let before = vm.favorite_ids().clone();

    assert!(vm.toggle_favorite(&"malinin".into()));
    assert!(!vm.toggle_favorite(&"malinin".into()));
    assert_eq!(vm.favorite_ids(), &before);

    assert!(!vm.toggle_favorite(&"liu".into()));
    assert!(vm.favorite_ids().is_empty());
}

#[test]
fn favorites_follow_master_order() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.toggle_favorite(&"liu".into());
    vm.toggle_favorite(&"malinin".into());

    assert_eq!(ids(&vm.favorite_athletes()), ["malinin", "liu"]);
    assert!(vm.is_favorite(&"liu".into()));
}

#[test]
fn dangling_favorite_ids_never_surface() {
    let mut vm = CatalogViewModel::new(small_catalog());
    assert!(vm.toggle_favorite(&"retired-skater".into()));
    vm.toggle_favorite(&"kagiyama".into());

    assert_eq!(vm.favorite_ids().len(), 2);
    assert_eq!(ids(&vm.favorite_athletes()), ["kagiyama"]);
}

#[test]
fn empty_query_and_all_category_is_identity() {
    let vm = CatalogViewModel::new(small_catalog());
    assert_eq!(
        ids(&vm.visible_athletes(&CategoryFilter::All)),
        ["malinin", "kagiyama", "sakamoto", "liu", "gubanova"]
    );
}

#[test]
fn search_finds_single_name_among_many() {
    let mut athletes: Vec<Value> = (0..100)
        .map(|n| {
            singles(
                &format!("skater-{n}"),
                &format!("Skater Number{n}"),
                if n % 2 == 0 { "USA" } else { "GEO" },
                "mens",
            )
        })
        .collect();
    athletes.insert(
        37,
        singles("kagiyama", "Yuma Kagiyama", "JPN", "mens"),
    );
    let mut vm = CatalogViewModel::new(catalog_with(athletes));

    vm.set_search_query("kagiyama");
    assert_eq!(ids(&vm.visible_athletes(&CategoryFilter::All)), ["kagiyama"]);

    vm.set_search_query("KAGIYAMA");
    assert_eq!(ids(&vm.visible_athletes(&CategoryFilter::All)), ["kagiyama"]);
}

#[test]
fn search_matches_country_code_and_country_name() {
    let mut vm = CatalogViewModel::new(small_catalog());

    vm.set_search_query("jpn");
    assert_eq!(
        ids(&vm.visible_athletes(&CategoryFilter::All)),
        ["kagiyama", "sakamoto"]
    );

    vm.set_search_query("georgia");
    assert_eq!(ids(&vm.visible_athletes(&CategoryFilter::All)), ["gubanova"]);

    vm.set_search_query("united");
    assert_eq!(
        ids(&vm.visible_athletes(&CategoryFilter::All)),
        ["malinin", "liu"]
    );
}

#[test]
fn search_query_is_stored_verbatim() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.set_search_query("  Liu ");
    assert_eq!(vm.search_query(), "  Liu ");
    assert!(vm.visible_athletes(&CategoryFilter::All).is_empty());
}

#[test]
fn category_filter_keeps_order() {
    let athletes = vec![
        singles("a1", "Skater One", "USA", "mens"),
        json!({ "id": "p1", "name": "Anna One & Ben One", "country": "USA", "event": "pairs", "event_name": "Pairs" }),
        singles("a2", "Skater Two", "JPN", "womens"),
        singles("a3", "Skater Three", "JPN", "mens"),
        json!({ "id": "p2", "name": "Cara Two & Dan Two", "country": "JPN", "event": "pairs", "event_name": "Pairs" }),
        singles("a4", "Skater Four", "GEO", "womens"),
        singles("a5", "Skater Five", "GEO", "mens"),
        singles("a6", "Skater Six", "USA", "womens"),
        json!({ "id": "p3", "name": "Eve Three & Finn Three", "country": "GEO", "event": "pairs", "event_name": "Pairs" }),
        singles("a7", "Skater Seven", "USA", "mens"),
    ];
    let vm = CatalogViewModel::new(catalog_with(athletes));
    let pairs: CategoryFilter = "pairs".parse().expect("category");

    assert_eq!(ids(&vm.visible_athletes(&pairs)), ["p1", "p2", "p3"]);
}

#[test]
fn search_and_category_combine() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.set_search_query("jpn");
    let womens = CategoryFilter::Event("womens".into());
    assert_eq!(ids(&vm.visible_athletes(&womens)), ["sakamoto"]);
}

#[test]
fn visible_among_filters_caller_supplied_list() {
    let catalog = small_catalog();
    let mut vm = CatalogViewModel::new(catalog.clone());
    vm.set_search_query("a");
    let subset = &catalog.athletes()[3..];
    assert_eq!(
        ids(&vm.visible_among(subset, &CategoryFilter::All)),
        ["liu", "gubanova"]
    );
}

#[test]
fn element_card_explains_known_and_unknown_codes() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.select_athlete(&"malinin".into()).expect("athlete");

    vm.show_element_info("3A");
    let info = vm.element_info().expect("card open");
    assert_eq!(info.explanation, "Triple Axel - 3.5 rotations, most difficult triple");

    vm.show_element_info("4Lz+1Eu+3F");
    let info = vm.element_info().expect("card open");
    assert_eq!(info.explanation, "4Lz+1Eu+3F - Technical skating element");

    vm.dismiss_element_info();
    assert!(vm.element_info().is_none());
}

#[test]
fn leaving_a_screen_closes_element_card() {
    let mut vm = CatalogViewModel::new(small_catalog());
    vm.select_athlete(&"malinin".into()).expect("athlete");
    vm.show_element_info("3A");
    vm.back();
    assert!(vm.element_info().is_none());
}
