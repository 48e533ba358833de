use log::error;
use rocket::{
    http::{ContentType, Header, Status},
    request, response,
};

use crate::context::RenderOptions;
use crate::{templates, utils::config};

#[derive(Responder)]
#[response(status = 200, content_type = "text/html")]
pub struct ResponseOk(pub String);

#[derive(Responder)]
#[response(status = 400, content_type = "text/html")]
pub struct BadRequest(pub String);

#[derive(Responder)]
#[response(status = 404, content_type = "text/html")]
pub struct NotFound(pub String);

/// A response that doesn't crash and can be returned from any route.
pub struct Response {
    pub status: Status,
    pub body: Option<String>,
    pub location: Option<String>,
}

impl Response {
    fn new(status: Status) -> Response {
        Response {
            status,
            body: None,
            location: None,
        }
    }

    /// Create a 303.
    pub fn redirect(to: String) -> Response {
        Self::new(Status::SeeOther).location(to)
    }

    /// Create a 200.
    pub fn ok(body: String) -> Response {
        Self::new(Status::Ok).body(body)
    }

    /// Create a 400.
    pub fn bad_request(body: String) -> Response {
        Self::new(Status::BadRequest).body(body)
    }

    /// Create a 404.
    pub fn not_found() -> Response {
        Self::new(Status::NotFound)
    }

    pub fn body(mut self, body: String) -> Response {
        self.body = Some(body);
        self
    }

    fn location(mut self, location: String) -> Response {
        self.location = Some(location);
        self
    }
}

impl<'r> response::Responder<'r, 'r> for Response {
    fn respond_to(self, request: &request::Request<'_>) -> response::Result<'r> {
        let body = match self.body {
            Some(body) => body,
            None => match self.status.code {
                404 => not_found_page(),
                _ => "".into(),
            },
        };

        let mut binding = response::Response::build_from(body.respond_to(request)?);
        let mut response = binding.header(ContentType::new("text", "html"));

        if self.location.is_some() {
            response = response.header(Header::new("Location", self.location.unwrap()));
        }

        response.status(self.status).ok()
    }
}

#[derive(Debug)]
pub struct Error(pub anyhow::Error);

impl<E> From<E> for Error
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Error(error.into())
    }
}

impl<'r> response::Responder<'r, 'r> for Error {
    fn respond_to(self, request: &request::Request<'_>) -> response::Result<'r> {
        error!("{}", self.0);

        let error = if config::render_errors() {
            self.0.to_string()
        } else {
            "".into()
        };

        let mut layout = templates::Layout::new("Internal Server Error");
        layout.render_options(RenderOptions {
            hide_filter_widget: true,
            hide_breadcrumbs: true,
        });
        let body = layout.render(templates::Error { error });

        response::Response::build_from(body.respond_to(request)?)
            .header(ContentType::new("text", "html"))
            .status(Status::InternalServerError)
            .ok()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn not_found_page() -> String {
    let mut layout = templates::Layout::new("Not Found");
    layout.render_options(RenderOptions {
        hide_filter_widget: true,
        hide_breadcrumbs: true,
    });
    layout.render(templates::NotFound {})
}
