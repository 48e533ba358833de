//! Per-page view state, derived once from route parameters when a page is
//! requested and dropped when the response has been rendered.

use crate::alerts::Alerts;
use crate::templates::components::NavLink;
use crate::utils::urls;

/// Which kind of resource a page is displaying. Selects the app-only render
/// option, not the structure of the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    App,
    Service,
}

/// Route parameters bound by the routing boundary, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    pub project: String,
    pub resource_name: String,
}

impl ViewContext {
    pub fn new(project: &str, resource_name: &str) -> ViewContext {
        ViewContext {
            project: project.to_owned(),
            resource_name: resource_name.to_owned(),
        }
    }
}

/// Optional UI affordances a page can toggle off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub hide_filter_widget: bool,
    pub hide_breadcrumbs: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PageViewModel {
    pub alerts: Alerts,
    pub render_options: RenderOptions,
    pub breadcrumbs: Vec<NavLink>,
}

impl PageViewModel {
    pub fn build(context: &ViewContext, kind: ResourceKind) -> PageViewModel {
        Self::with_render_options(context, kind, RenderOptions::default())
    }

    /// Existing options are kept as found; the app variant overwrites
    /// `hide_filter_widget` and leaves every other flag alone.
    pub fn with_render_options(
        context: &ViewContext,
        kind: ResourceKind,
        mut render_options: RenderOptions,
    ) -> PageViewModel {
        if let ResourceKind::App = kind {
            render_options.hide_filter_widget = true;
        }

        PageViewModel {
            alerts: Alerts::new(),
            render_options,
            breadcrumbs: breadcrumbs(context),
        }
    }
}

/// Two entries, root to current page. Identifiers are not validated here:
/// an empty project still produces a structurally complete trail.
pub fn breadcrumbs(context: &ViewContext) -> Vec<NavLink> {
    vec![
        NavLink::new("Overview").href(&urls::project_overview(&context.project)),
        NavLink::new(&context.resource_name).active(),
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn app_trail_has_exactly_two_entries() {
        let context = ViewContext::new("acme", "checkout-ios");
        let trail = breadcrumbs(&context);

        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].name, "Overview");
        assert_eq!(trail[0].href.as_deref(), Some("project/acme/overview"));
        assert_eq!(trail[1].name, "checkout-ios");
        assert_eq!(trail[1].href, None);
    }

    #[test]
    fn service_trail_matches_app_trail_shape() {
        let context = ViewContext::new("acme", "payments-api");
        let view_model = PageViewModel::build(&context, ResourceKind::Service);

        assert_eq!(view_model.breadcrumbs.len(), 2);
        assert_eq!(view_model.breadcrumbs[0].name, "Overview");
        assert_eq!(
            view_model.breadcrumbs[0].href.as_deref(),
            Some("project/acme/overview")
        );
        assert_eq!(view_model.breadcrumbs[1].name, "payments-api");
        assert_eq!(view_model.breadcrumbs[1].href, None);
    }

    #[test]
    fn overview_link_keeps_its_shape_for_degenerate_input() {
        for project in ["", "a", "weird/project", "acme"] {
            let context = ViewContext::new(project, "");
            let trail = breadcrumbs(&context);

            let href = trail[0].href.as_deref().unwrap();
            assert!(href.starts_with("project/"));
            assert!(href.ends_with("/overview"));
            assert_eq!(trail[1].href, None);
        }
    }

    #[test]
    fn terminal_entry_is_marked_active() {
        let context = ViewContext::new("acme", "checkout-ios");
        let trail = breadcrumbs(&context);

        assert!(!trail[0].active);
        assert!(trail[1].active);
    }

    #[test]
    fn alerts_start_empty_on_every_build() {
        let context = ViewContext::new("acme", "checkout-ios");

        for kind in [ResourceKind::App, ResourceKind::Service] {
            let view_model = PageViewModel::build(&context, kind);
            assert!(view_model.alerts.is_empty());
        }
    }

    #[test]
    fn app_variant_forces_hide_filter_widget() {
        let context = ViewContext::new("acme", "checkout-ios");
        let view_model = PageViewModel::build(&context, ResourceKind::App);

        assert!(view_model.render_options.hide_filter_widget);
    }

    #[test]
    fn app_variant_merges_into_existing_options() {
        let context = ViewContext::new("acme", "checkout-ios");
        let existing = RenderOptions {
            hide_filter_widget: false,
            hide_breadcrumbs: true,
        };
        let view_model =
            PageViewModel::with_render_options(&context, ResourceKind::App, existing);

        assert!(view_model.render_options.hide_filter_widget);
        assert!(view_model.render_options.hide_breadcrumbs);
    }

    #[test]
    fn service_variant_leaves_options_as_found() {
        let context = ViewContext::new("acme", "payments-api");
        let existing = RenderOptions {
            hide_filter_widget: false,
            hide_breadcrumbs: true,
        };
        let view_model =
            PageViewModel::with_render_options(&context, ResourceKind::Service, existing.clone());

        assert_eq!(view_model.render_options, existing);
    }

    #[test]
    fn end_to_end_examples() {
        let app = PageViewModel::build(
            &ViewContext::new("acme", "checkout-ios"),
            ResourceKind::App,
        );
        assert_eq!(
            app.breadcrumbs[0].href.as_deref(),
            Some("project/acme/overview")
        );
        assert_eq!(app.breadcrumbs[1].name, "checkout-ios");
        assert!(app.render_options.hide_filter_widget);

        let service = PageViewModel::build(
            &ViewContext::new("acme", "payments-api"),
            ResourceKind::Service,
        );
        assert_eq!(
            service.breadcrumbs[0].href.as_deref(),
            Some("project/acme/overview")
        );
        assert_eq!(service.breadcrumbs[1].name, "payments-api");
        assert!(!service.render_options.hide_filter_widget);
    }
}
