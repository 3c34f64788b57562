//! Home screen: listing, search, delete, refresh and logout

use pretty_assertions::assert_eq;

use product_catalog::egui_app::Screen;

use crate::common::*;

fn logged_in_with(products: Vec<product_catalog::shared::Product>) -> TestApp {
    let mut app = TestApp::builder().logged_in().with_products(products).build();
    app.settle();
    app
}

#[test]
fn test_launch_lists_products_in_insertion_order() {
    let app = logged_in_with(vec![
        product(3, "Chair", "40"),
        product(1, "Apple", "1.5"),
        product(2, "Bread", "3"),
    ]);

    assert_eq!(app.state.current_screen(), Screen::Home);
    assert_eq!(app.names(), vec!["Chair", "Apple", "Bread"]);
    assert!(!app.state.home.is_loading());
    assert!(app.toasts().is_empty());
}

#[test]
fn test_empty_store_shows_no_products() {
    let app = logged_in_with(Vec::new());
    assert!(app.state.home.products().is_empty());
    assert!(app.toasts().is_empty());
}

#[test]
fn test_search_filters_then_clear_reloads() {
    let mut app = logged_in_with(vec![product(1, "A", "10"), product(2, "B", "20")]);

    app.search("a");
    assert_eq!(app.names(), vec!["A"]);

    app.search("");
    app.settle();
    assert_eq!(app.names(), vec!["A", "B"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut app = logged_in_with(vec![
        product(1, "Desk Lamp", "30"),
        product(2, "LAMPSHADE", "12"),
        product(3, "Chair", "45"),
    ]);

    app.search("lAmP");
    assert_eq!(app.names(), vec!["Desk Lamp", "LAMPSHADE"]);
}

#[test]
fn test_search_narrows_held_snapshot_only() {
    let mut app = logged_in_with(vec![product(1, "Apple", "1"), product(2, "Apricot", "2")]);

    app.search("apr");
    assert_eq!(app.names(), vec!["Apricot"]);

    // Widening the query does not bring back what was filtered out
    app.search("ap");
    assert_eq!(app.names(), vec!["Apricot"]);

    // Products written elsewhere are not picked up by a non-empty query
    let store = app.store.clone();
    app.block_on(async move { store.save_product(product(3, "Apricot Jam", "5")).await })
        .unwrap();
    app.search("apri");
    assert_eq!(app.names(), vec!["Apricot"]);

    app.search("");
    app.settle();
    assert_eq!(app.names(), vec!["Apple", "Apricot", "Apricot Jam"]);
}

#[test]
fn test_search_without_matches_is_empty() {
    let mut app = logged_in_with(vec![product(1, "Apple", "1")]);
    app.search("zzz");
    assert!(app.state.home.products().is_empty());
}

#[test]
fn test_delete_removes_and_reloads_full_list() {
    let mut app = logged_in_with(vec![
        product(1, "Apple", "1"),
        product(2, "Bread", "3"),
        product(3, "Avocado", "2"),
    ]);

    app.search("a");
    assert_eq!(app.names(), vec!["Apple", "Bread", "Avocado"]);
    app.search("av");
    assert_eq!(app.names(), vec!["Avocado"]);

    app.delete(3);
    app.settle();

    // Reload ignores the active query
    assert_eq!(app.names(), vec!["Apple", "Bread"]);
    assert_eq!(
        app.stored_products().iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_delete_missing_id_keeps_collection() {
    let mut app = logged_in_with(vec![product(1, "Apple", "1")]);
    app.delete(42);
    app.settle();
    assert_eq!(app.names(), vec!["Apple"]);
    assert!(app.toasts().is_empty());
}

#[test]
fn test_refresh_uses_its_own_indicator() {
    let mut app = logged_in_with(vec![product(1, "Apple", "1")]);

    let store = app.store.clone();
    app.block_on(async move { store.save_product(product(2, "Bread", "3")).await })
        .unwrap();

    app.state.home.refresh(&app.state.runner);
    assert!(app.state.home.is_refreshing());
    assert!(!app.state.home.is_loading());
    app.settle();

    assert!(!app.state.home.is_refreshing());
    assert_eq!(app.names(), vec!["Apple", "Bread"]);
}

#[test]
fn test_corrupt_collection_reports_fetch_error() {
    let mut app = TestApp::builder()
        .logged_in()
        .with_raw_products("{not json")
        .build();
    app.settle();

    assert_eq!(app.toasts(), vec!["Error fetching products".to_string()]);
    assert!(app.state.home.products().is_empty());
    // Nothing overwrote the stored text
    assert_eq!(app.raw_products().as_deref(), Some("{not json"));
}

#[test]
fn test_logout_clears_session_and_shows_login() {
    let mut app = logged_in_with(vec![product(1, "Apple", "1")]);

    app.logout();
    app.settle();

    assert_eq!(app.state.current_screen(), Screen::Login2);
    assert_eq!(app.session_flag(), None);
    assert!(!app.state.session.is_logged_in());
    assert!(app.state.home.products().is_empty());
    // Products survive logout
    assert_eq!(app.stored_products().len(), 1);
}

#[test]
fn test_home_without_session_redirects_to_login2() {
    let mut app = TestApp::builder().build();
    app.settle();
    assert_eq!(app.state.current_screen(), Screen::Login);

    app.state.nav.navigate(Screen::Home).unwrap();
    app.settle();

    assert_eq!(app.state.current_screen(), Screen::Login2);
}

#[test]
fn test_back_to_back_deletes_all_apply() {
    let mut app = logged_in_with(vec![
        product(1, "A", "1"),
        product(2, "B", "2"),
        product(3, "C", "3"),
    ]);

    app.delete(1);
    app.delete(2);
    app.settle();

    assert_eq!(app.names(), vec!["C"]);
    assert_eq!(
        app.stored_products().iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![3]
    );
    assert!(app.toasts().is_empty());
}

#[test]
fn test_delete_on_corrupt_collection_reports_error() {
    let mut app = TestApp::builder()
        .logged_in()
        .with_raw_products("{not json")
        .build();
    app.settle();

    app.delete(1);
    app.settle();

    assert_eq!(
        app.toasts(),
        vec![
            "Error fetching products".to_string(),
            "Error deleting product".to_string()
        ]
    );
    assert_eq!(app.raw_products().as_deref(), Some("{not json"));
}

#[test]
fn test_logout_failure_keeps_session() {
    let mut app = logged_in_with(vec![product(1, "Apple", "1")]);
    let db = app.db.clone();
    app.block_on(async move { db.pool().close().await });

    app.logout();
    app.settle();

    assert_eq!(app.toasts(), vec!["Error logging out".to_string()]);
    assert_eq!(app.state.current_screen(), Screen::Home);
    assert!(app.state.session.is_logged_in());
    assert_eq!(app.names(), vec!["Apple"]);
}
