//! Add product flow: validation order, image selection, saving

use pretty_assertions::assert_eq;

use product_catalog::egui_app::screens::AddProductPhase;
use product_catalog::egui_app::Screen;
use product_catalog::shared::MediaPickerError;

use crate::common::*;

fn on_add_product(products: Vec<product_catalog::shared::Product>) -> TestApp {
    let mut app = TestApp::builder().logged_in().with_products(products).build();
    app.settle();
    app.open_add_product();
    app.settle();
    assert_eq!(app.state.current_screen(), Screen::AddProductPage);
    app
}

fn pick_image(app: &mut TestApp, uri: &str) {
    app.picker.push_image(uri);
    app.select_image();
    app.settle();
    assert_eq!(app.state.add_product.image(), Some(uri));
}

#[test]
fn test_valid_product_is_saved_and_screen_closes() {
    let mut app = on_add_product(vec![product(1, "Lamp", "12")]);
    pick_image(&mut app, "file:///photos/chair.jpg");

    app.submit_product("Chair", "45.00");
    assert!(app.state.add_product.is_submitting());
    app.settle();

    let stored = app.stored_products();
    assert_eq!(stored.len(), 2);
    let chair = &stored[1];
    assert_eq!(chair.id, FIXED_NOW_MS);
    assert_eq!(chair.name, "Chair");
    assert_eq!(chair.price, "45.00");
    assert_eq!(chair.image_reference, "file:///photos/chair.jpg");

    // Back on Home, which reloaded on focus
    assert_eq!(app.state.current_screen(), Screen::Home);
    assert_eq!(app.names(), vec!["Lamp", "Chair"]);
    assert_eq!(app.state.add_product.phase(), AddProductPhase::Done);
    assert!(app.state.add_product.name.is_empty());
    assert_eq!(app.state.add_product.image(), None);
    assert!(app.toasts().is_empty());
}

#[test]
fn test_missing_fields_rejected_before_anything_else() {
    let mut app = on_add_product(Vec::new());

    app.submit_product("", "");
    app.settle();

    assert_eq!(app.toasts(), vec!["Name and Price are required".to_string()]);
    assert_eq!(app.state.add_product.phase(), AddProductPhase::Editing);
    assert_eq!(app.raw_products(), None);
    assert_eq!(app.state.current_screen(), Screen::AddProductPage);
}

#[test]
fn test_invalid_price_rejected() {
    let mut app = on_add_product(Vec::new());
    pick_image(&mut app, "file:///photos/a.png");

    for price in ["abc", "0", "-3"] {
        app.submit_product("Chair", price);
        app.settle();
    }

    assert_eq!(
        app.toasts(),
        vec!["Price must be a positive number".to_string(); 3]
    );
    assert_eq!(app.raw_products(), None);
}

#[test]
fn test_duplicate_name_rejected_without_write() {
    let mut app = on_add_product(vec![product(1, "Widget", "9.99")]);
    let before = app.raw_products();

    // Duplicate is reported ahead of the missing image
    app.submit_product("Widget", "5");
    app.settle();

    assert_eq!(app.toasts(), vec!["Product already exists".to_string()]);
    assert_eq!(app.raw_products(), before);
    assert_eq!(app.state.current_screen(), Screen::AddProductPage);
}

#[test]
fn test_duplicate_check_is_case_sensitive() {
    let mut app = on_add_product(vec![product(1, "Widget", "9.99")]);
    pick_image(&mut app, "file:///photos/w.png");

    app.submit_product("widget", "5");
    app.settle();

    assert!(app.toasts().is_empty());
    assert_eq!(app.stored_products().len(), 2);
}

#[test]
fn test_missing_image_rejected() {
    let mut app = on_add_product(Vec::new());

    app.submit_product("Chair", "45");
    app.settle();

    assert_eq!(app.toasts(), vec!["Please select an image for the product".to_string()]);
    assert_eq!(app.raw_products(), None);
    // Form kept for another attempt
    assert_eq!(app.state.add_product.name, "Chair");
}

#[test]
fn test_cancelled_picker_leaves_image_unset() {
    let mut app = on_add_product(Vec::new());
    app.picker.push(Err(MediaPickerError::Cancelled));

    app.select_image();
    app.settle();

    assert_eq!(app.toasts(), vec!["Image selection cancelled".to_string()]);
    assert_eq!(app.state.add_product.image(), None);
}

#[test]
fn test_picker_error_is_reported() {
    let mut app = on_add_product(Vec::new());
    app.picker.push(Err(MediaPickerError::Failed {
        code: "permission".to_string(),
        message: "Photo library access denied".to_string(),
    }));

    app.select_image();
    app.settle();

    assert_eq!(
        app.toasts(),
        vec!["Error: Photo library access denied".to_string()]
    );
    assert_eq!(app.state.add_product.image(), None);
}

#[test]
fn test_second_selection_replaces_image() {
    let mut app = on_add_product(Vec::new());
    pick_image(&mut app, "file:///photos/one.png");
    pick_image(&mut app, "file:///photos/two.png");
}

#[test]
fn test_ids_come_from_clock() {
    let mut app = on_add_product(Vec::new());
    pick_image(&mut app, "file:///photos/a.png");
    app.clock.set(1_000);
    app.submit_product("First", "1");
    app.settle();

    app.open_add_product();
    app.settle();
    assert_eq!(app.state.add_product.image(), None);
    pick_image(&mut app, "file:///photos/b.png");
    app.clock.set(2_000);
    app.submit_product("Second", "2");
    app.settle();

    assert_eq!(
        app.stored_products().iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1_000, 2_000]
    );
}

#[test]
fn test_corrupt_collection_reports_save_error() {
    let mut app = TestApp::builder()
        .logged_in()
        .with_raw_products("{not json")
        .build();
    app.settle();
    app.open_add_product();
    app.settle();
    pick_image(&mut app, "file:///photos/chair.jpg");

    app.submit_product("Chair", "5");
    app.settle();

    assert_eq!(app.state.notices.latest_toast(), Some("Error saving product"));
    assert_eq!(app.state.add_product.phase(), AddProductPhase::Editing);
    assert_eq!(app.state.add_product.name, "Chair");
    assert_eq!(app.state.add_product.price, "5");
    assert_eq!(app.state.add_product.image(), Some("file:///photos/chair.jpg"));
    assert_eq!(app.raw_products().as_deref(), Some("{not json"));
    assert_eq!(app.state.current_screen(), Screen::AddProductPage);
}

#[test]
fn test_leaving_form_while_saving_keeps_current_screen() {
    let auth = MockAuth::start();
    auth.respond_json(200, serde_json::json!({"token": "t"}));
    let mut app = TestApp::builder().auth_url(auth.login_url()).build();
    app.settle();
    app.submit_login("eve.holt@reqres.in", "cityslicka");
    app.settle();

    app.open_add_product();
    app.settle();
    pick_image(&mut app, "file:///photos/chair.jpg");
    app.submit_product("Chair", "5");
    // Back arrow pressed before the save completes
    assert!(app.state.nav.go_back());
    app.settle();

    assert_eq!(app.state.nav.stack(), &[Screen::Login, Screen::Home]);
    assert_eq!(
        app.stored_products().iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Chair"]
    );
    assert!(app.state.session.is_logged_in());
}
