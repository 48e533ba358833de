use rocket::request::{self, FromRequest, Request};

use crate::alerts::{Alert, AlertLevel};
use crate::utils::config;

/// Per-request panel state. The server itself is stateless; this carries the
/// ambient alert feed shown at the top of every page, when there is one.
#[derive(Debug)]
pub struct Panel {
    pub alerts: Option<Vec<Alert>>,
}

impl Default for Panel {
    fn default() -> Self {
        let alerts = if config::dev_mode() {
            Some(vec![Alert::new(
                "This control panel is running in development mode.",
            )
            .set_level(AlertLevel::Warning)])
        } else {
            None
        };

        Panel { alerts }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r Panel {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        request::Outcome::Success(request.local_cache(Panel::default))
    }
}
