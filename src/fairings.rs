use log::info;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};

/// Times requests and responses, reported through the standard logger.
struct RequestMonitorStart(std::time::Instant);

#[derive(Default)]
pub struct RequestMonitor;

impl RequestMonitor {
    pub fn new() -> RequestMonitor {
        Self
    }
}

#[rocket::async_trait]
impl Fairing for RequestMonitor {
    fn info(&self) -> Info {
        Info {
            name: "Request Monitor",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        let _ = request.local_cache(|| RequestMonitorStart(std::time::Instant::now()));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let start = request
            .local_cache(|| RequestMonitorStart(std::time::Instant::now()))
            .0;
        let elapsed = start.elapsed().as_micros() as f32 / 1000.0;
        let status = response.status().code;
        let method = request.method().as_str();
        // Collapse redirects and misses so scrapers can't flood the log
        // with one line per probed path.
        let path = match status {
            300..=399 => "redirect".to_string(),
            404 => "not_found".to_string(),
            _ => request.uri().path().to_string(),
        };

        info!("{} {} {} {:.3}ms", method, path, status, elapsed);
    }
}
