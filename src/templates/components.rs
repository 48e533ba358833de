use sailfish::TemplateOnce;

use crate::alerts::Alert;
use crate::utils::{config, urls};

/// One entry of a navigation trail. The terminal entry of a breadcrumb trail
/// carries no href, it represents the page being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub href: Option<String>,
    pub active: bool,
}

impl NavLink {
    pub fn new(name: &str) -> NavLink {
        NavLink {
            name: name.to_owned(),
            href: None,
            active: false,
        }
    }

    pub fn href(mut self, href: &str) -> NavLink {
        self.href = Some(href.to_owned());
        self
    }

    pub fn active(mut self) -> NavLink {
        self.active = true;
        self
    }
}

#[derive(TemplateOnce)]
#[template(path = "components/breadcrumbs.html")]
pub struct Breadcrumbs {
    pub links: Vec<NavLink>,
}

impl Breadcrumbs {
    pub fn render(links: Vec<NavLink>) -> String {
        Breadcrumbs { links }.render_once().unwrap()
    }
}

#[derive(TemplateOnce)]
#[template(path = "layout/nav/top.html")]
pub struct Navbar {
    pub home: String,
}

impl Navbar {
    pub fn render() -> String {
        Navbar {
            home: urls::project_overview_rooted(config::default_project()),
        }
        .render_once()
        .unwrap()
    }
}

#[derive(TemplateOnce)]
#[template(path = "components/filter_widget.html")]
pub struct FilterWidget {
    pub placeholder: String,
}

impl Default for FilterWidget {
    fn default() -> Self {
        FilterWidget {
            placeholder: "Filter by name".to_owned(),
        }
    }
}

#[derive(TemplateOnce)]
#[template(path = "components/alert_banner.html")]
pub struct AlertBanner {
    pub alert: Alert,
}

impl AlertBanner {
    pub fn render(alert: Alert) -> String {
        AlertBanner { alert }.render_once().unwrap()
    }
}
