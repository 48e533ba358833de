use sailfish::TemplateOnce;

use crate::alerts::Alert;
use crate::context::RenderOptions;
use crate::models;
use crate::templates::components::NavLink;

pub mod components;
pub mod head;

pub use head::*;

#[derive(TemplateOnce, Default)]
#[template(path = "content/not_found.html")]
pub struct NotFound {}

#[derive(TemplateOnce, Default)]
#[template(path = "content/error.html")]
pub struct Error {
    pub error: String,
}

/// Page chrome. Holds everything the base template needs around a page body:
/// head, breadcrumb trail, the alert to surface, render options.
#[derive(TemplateOnce, Clone, Default)]
#[template(path = "layout/base.html")]
pub struct Layout {
    pub head: Head,
    pub content: Option<String>,
    pub breadcrumbs: Vec<NavLink>,
    pub alert: Option<Alert>,
    pub render_options: RenderOptions,
}

impl Layout {
    pub fn new(title: &str) -> Self {
        Layout {
            head: Head::new().title(title),
            ..Default::default()
        }
    }

    pub fn description(&mut self, description: &str) -> &mut Self {
        self.head.description = Some(description.to_owned());
        self
    }

    pub fn breadcrumbs(&mut self, breadcrumbs: Vec<NavLink>) -> &mut Self {
        self.breadcrumbs = breadcrumbs;
        self
    }

    pub fn alert(&mut self, alert: Option<Alert>) -> &mut Self {
        self.alert = alert;
        self
    }

    pub fn render_options(&mut self, render_options: RenderOptions) -> &mut Self {
        self.render_options = render_options;
        self
    }

    pub fn render<T>(&mut self, template: T) -> String
    where
        T: sailfish::TemplateOnce,
    {
        self.content = Some(template.render_once().unwrap());
        (*self).clone().into()
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> String {
        layout.render_once().unwrap()
    }
}

#[derive(TemplateOnce)]
#[template(path = "content/overview.html")]
pub struct Overview {
    pub project: models::Project,
}

#[derive(TemplateOnce)]
#[template(path = "content/mobile_app.html")]
pub struct MobileApp {
    pub app: models::MobileApp,
}

#[derive(TemplateOnce)]
#[template(path = "content/mobile_service.html")]
pub struct MobileService {
    pub service: models::MobileService,
}
