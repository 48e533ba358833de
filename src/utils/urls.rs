// Link to a project's overview page, as emitted in breadcrumb trails. Kept
// relative so the panel can be served under a path prefix.
pub fn project_overview(project: &str) -> String {
    format!("project/{}/overview", project)
}

// Rooted form, used for redirects and the navbar home link.
pub fn project_overview_rooted(project: &str) -> String {
    format!("/{}", project_overview(project))
}

// Link that marks an alert as dismissed.
pub fn alerts_dismiss(id: &str) -> String {
    format!("/alerts/dismiss?id={}", id)
}
