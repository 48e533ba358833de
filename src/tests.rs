use rocket::fs::FileServer;
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use rocket::{Build, Rocket};
use scraper::{Html, Selector};

use crate::utils::config;

fn rocket() -> Rocket<Build> {
    rocket::build()
        .mount("/", crate::routes())
        .mount("/static", FileServer::from(config::static_dir()))
        .register(
            "/",
            catchers![
                crate::catchers::error_catcher,
                crate::catchers::not_found_handler
            ],
        )
        .attach(crate::fairings::RequestMonitor::new())
}

async fn body_of(client: &Client, path: &str) -> String {
    let response = client.get(path).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    response.into_string().await.unwrap()
}

fn breadcrumb_anchors(body: &str) -> Vec<(String, String)> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(".breadcrumb-item a").unwrap();

    document
        .select(&selector)
        .map(|element| {
            (
                element.value().attr("href").unwrap().to_string(),
                element.text().collect::<String>().trim().to_string(),
            )
        })
        .collect()
}

fn active_breadcrumb(body: &str) -> String {
    let document = Html::parse_document(body);
    let selector = Selector::parse(".breadcrumb-item.active").unwrap();
    let item = document.select(&selector).next().expect("active crumb");

    let anchors = Selector::parse("a").unwrap();
    assert!(item.select(&anchors).next().is_none());

    item.text().collect::<String>().trim().to_string()
}

fn has_filter_widget(body: &str) -> bool {
    let document = Html::parse_document(body);
    let selector = Selector::parse("form.filter-widget").unwrap();
    document.select(&selector).next().is_some()
}

#[rocket::async_test]
async fn test_mobileapp_page() {
    let client = Client::tracked(rocket()).await.unwrap();
    let body = body_of(&client, "/project/acme/mobileapp/checkout-ios").await;

    let anchors = breadcrumb_anchors(&body);
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0].0, "project/acme/overview");
    assert_eq!(anchors[0].1, "Overview");

    assert_eq!(active_breadcrumb(&body), "checkout-ios");
    assert!(!has_filter_widget(&body));
}

#[rocket::async_test]
async fn test_mobileservice_page() {
    let client = Client::tracked(rocket()).await.unwrap();
    let body = body_of(&client, "/project/acme/service/payments-api").await;

    let anchors = breadcrumb_anchors(&body);
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0].0, "project/acme/overview");

    assert_eq!(active_breadcrumb(&body), "payments-api");
    assert!(has_filter_widget(&body));
}

#[rocket::async_test]
async fn test_overview_page() {
    let client = Client::tracked(rocket()).await.unwrap();
    let body = body_of(&client, "/project/acme/overview").await;

    assert_eq!(active_breadcrumb(&body), "Overview");
    assert!(has_filter_widget(&body));
    assert!(body.contains("Project acme"));
}

#[rocket::async_test]
async fn test_index_redirects_to_default_project() {
    let client = Client::tracked(rocket()).await.unwrap();
    let response = client.get("/").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(
        response.headers().get_one("Location").unwrap(),
        format!("/project/{}/overview", config::default_project())
    );
}

#[rocket::async_test]
async fn test_unknown_route_renders_not_found() {
    let client = Client::tracked(rocket()).await.unwrap();
    let response = client.get("/project/acme/nonsense").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Not Found"));
}

#[rocket::async_test]
async fn test_dismiss_sets_session_cookie() {
    let client = Client::tracked(rocket()).await.unwrap();
    let response = client.get("/alerts/dismiss?id=abc123").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
    let session = response
        .cookies()
        .get_private("session")
        .expect("session cookie");
    assert!(session.value().contains("abc123"));
}

#[rocket::async_test]
async fn test_dismiss_is_idempotent() {
    let client = Client::tracked(rocket()).await.unwrap();
    client.get("/alerts/dismiss?id=abc123").dispatch().await;
    let response = client.get("/alerts/dismiss?id=abc123").dispatch().await;

    assert_eq!(response.status(), Status::SeeOther);
}

#[rocket::async_test]
async fn test_error_route() {
    let client = Client::tracked(rocket()).await.unwrap();
    let response = client.get("/error").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
}

#[rocket::async_test]
async fn test_static_css() {
    let client = Client::tracked(rocket()).await.unwrap();
    let response = client.get("/static/css/style.css").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
}
