use actix_web_flash_messages::Level;
use storefront_admin::domain::customer::Customer;
use storefront_admin::domain::types::{CustomerId, Email};
use storefront_admin::dto::listing::ListPage;
use storefront_admin::listing::CollectionView;
use storefront_admin::listing::collections::CUSTOMERS;
use storefront_admin::routes::alert_level_to_str;
use tera::{Context, Tera};

fn tera() -> Tera {
    Tera::new("templates/**/*").unwrap()
}

#[test]
fn every_template_parses() {
    let tera = tera();
    for name in [
        "base.html",
        "error.html",
        "auth/login.html",
        "main/not_found.html",
        "dashboard/index.html",
        "products/index.html",
        "variants/index.html",
        "orders/index.html",
        "customers/index.html",
        "reviews/index.html",
    ] {
        assert!(
            tera.get_template_names().any(|loaded| loaded == name),
            "missing template {name}"
        );
    }
}

#[test]
fn login_page_renders_alerts() {
    let mut context = Context::new();
    context.insert(
        "alerts",
        &vec![("Invalid email or password", alert_level_to_str(&Level::Error))],
    );

    let body = tera().render("auth/login.html", &context).unwrap();

    assert!(body.contains("alert-danger"));
    assert!(body.contains("Invalid email or password"));
    assert!(!body.contains("Log out"));
}

#[test]
fn customer_delete_posts_back_with_the_list_state() {
    let mut view = CollectionView::mount(CUSTOMERS);
    view.on_record_set_changed(vec![Customer {
        id: CustomerId::new(3).unwrap(),
        name: "Alice".to_string(),
        email: Email::new("alice@example.com").unwrap(),
        created_at: None,
    }]);
    view.set_search_text("al");

    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_page", "customers");
    context.insert("customers", &ListPage::from_view(view, |customer| customer));

    let body = tera().render("customers/index.html", &context).unwrap();

    assert!(body.contains(r#"action="/customers/3/delete?q=al&amp;page=1""#));
}
