#[macro_use]
extern crate rocket;

use rocket::http::CookieJar;
use rocket::response::Redirect;
use rocket::route::Route;

pub mod alerts;
pub mod catchers;
pub mod context;
pub mod fairings;
pub mod guards;
pub mod models;
pub mod responses;
pub mod templates;
pub mod utils;

#[cfg(test)]
mod tests;

use alerts::Alerts;
use context::{PageViewModel, ResourceKind, ViewContext};
use guards::Panel;
use responses::{Error, ResponseOk};
use templates::components::NavLink;
use utils::cookies::{DismissedAlert, Dismissals};
use utils::{config, urls};

#[get("/")]
pub async fn index() -> Redirect {
    Redirect::to(urls::project_overview_rooted(config::default_project()))
}

#[get("/project/<project>/overview")]
pub async fn overview_get(
    project: &str,
    panel: &Panel,
    cookies: &CookieJar<'_>,
) -> Result<ResponseOk, Error> {
    let mut alerts = Alerts::new();
    if let Some(feed) = &panel.alerts {
        alerts.extend(feed.iter().cloned());
    }
    let dismissed = Dismissals::get(cookies);

    let mut layout = templates::Layout::new("Overview");
    layout
        .breadcrumbs(vec![NavLink::new("Overview").active()])
        .alert(alerts.next_alert(&dismissed).cloned());

    Ok(ResponseOk(layout.render(templates::Overview {
        project: models::Project::new(project),
    })))
}

#[get("/project/<project>/mobileapp/<mobileapp>")]
pub async fn mobileapp_get(
    project: &str,
    mobileapp: &str,
    panel: &Panel,
    cookies: &CookieJar<'_>,
) -> Result<ResponseOk, Error> {
    let context = ViewContext::new(project, mobileapp);
    let mut view_model = PageViewModel::build(&context, ResourceKind::App);
    if let Some(feed) = &panel.alerts {
        view_model.alerts.extend(feed.iter().cloned());
    }
    let dismissed = Dismissals::get(cookies);

    let mut layout = templates::Layout::new(&context.resource_name);
    layout
        .breadcrumbs(view_model.breadcrumbs)
        .render_options(view_model.render_options)
        .alert(view_model.alerts.next_alert(&dismissed).cloned());

    Ok(ResponseOk(layout.render(templates::MobileApp {
        app: models::MobileApp::new(project, mobileapp),
    })))
}

#[get("/project/<project>/service/<service>")]
pub async fn mobileservice_get(
    project: &str,
    service: &str,
    panel: &Panel,
    cookies: &CookieJar<'_>,
) -> Result<ResponseOk, Error> {
    let context = ViewContext::new(project, service);
    let mut view_model = PageViewModel::build(&context, ResourceKind::Service);
    if let Some(feed) = &panel.alerts {
        view_model.alerts.extend(feed.iter().cloned());
    }
    let dismissed = Dismissals::get(cookies);

    let mut layout = templates::Layout::new(&context.resource_name);
    layout
        .breadcrumbs(view_model.breadcrumbs)
        .render_options(view_model.render_options)
        .alert(view_model.alerts.next_alert(&dismissed).cloned());

    Ok(ResponseOk(layout.render(templates::MobileService {
        service: models::MobileService::new(project, service),
    })))
}

// Remember a dismissed alert in the session cookie so it stays hidden.
#[get("/alerts/dismiss?<id>")]
pub fn dismiss_alert(id: String, cookies: &CookieJar<'_>) -> Redirect {
    let mut dismissed = Dismissals::get(cookies);

    if !dismissed.iter().any(|d| d.id == id) {
        dismissed.push(DismissedAlert {
            id,
            time_dismissed: Some(chrono::Utc::now()),
        });
        Dismissals::update(&dismissed, cookies);
    }

    Redirect::to("/")
}

// Deliberate failure, kept wired up to exercise the default catcher.
#[get("/error")]
pub async fn error() -> Result<ResponseOk, Error> {
    Err(Error(anyhow::anyhow!("deliberate error for testing")))
}

pub fn routes() -> Vec<Route> {
    routes![
        index,
        overview_get,
        mobileapp_get,
        mobileservice_get,
        dismiss_alert,
        error,
    ]
}
