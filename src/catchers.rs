use rocket::{catch, http::Status, request::Request};

use crate::responses::{self, BadRequest, Response};

#[catch(404)]
pub async fn not_found_handler(_status: Status, _request: &Request<'_>) -> Response {
    Response::not_found()
}

#[catch(default)]
pub async fn error_catcher(
    status: Status,
    request: &Request<'_>,
) -> Result<BadRequest, responses::Error> {
    Err(responses::Error(anyhow::anyhow!(
        "{} {}\n{:?}",
        status.code,
        status.reason().unwrap_or("Unknown"),
        request
    )))
}
