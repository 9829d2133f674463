use super::{HTTP_COUNTER, HTTP_REQ_HISTOGRAM};

use macros_rs::string;
use std::time::Instant;

use rocket::{
    async_trait,
    fairing::{Fairing, Info, Kind},
    http::{ContentType, Header},
    Data, Orbit, Request, Response, Rocket,
};

#[derive(Copy, Clone)]
struct RequestTimer(Option<Instant>);

#[async_trait]
impl Fairing for super::Logger {
    fn info(&self) -> Info {
        Info {
            name: "Logger Fairing",
            kind: Kind::Liftoff | Kind::Request | Kind::Response,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let config = rocket.config();

        log!("[rocket] launched",
            "keep_alive" => config.keep_alive,
            "workers" => config.workers,
            "profile" => config.profile.to_string(),
        );

        log!("[api] server started", "port" => config.port, "host" => config.address);
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        HTTP_COUNTER.inc();
        request.local_cache(|| RequestTimer(Some(Instant::now())));

        log!("[api] req",
           "method" => request.method(),
           "uri" => request.uri(),
           "content_type" => request.content_type().unwrap_or(&ContentType::Plain),
        );
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let RequestTimer(started) = *request.local_cache(|| RequestTimer(None));

        if let Some(started) = started {
            let route = request.route().map(|route| route.uri.to_string()).unwrap_or_else(|| string!("unmatched"));
            HTTP_REQ_HISTOGRAM.with_label_values(&[route.as_str()]).observe(started.elapsed().as_secs_f64());
        }

        log!("[api] res",
           "status" => response.status(),
           "size" => response.body_mut().size().await.unwrap_or(0),
           "content_type" => response.content_type().unwrap_or(ContentType::Plain),
        );
    }
}

#[async_trait]
impl Fairing for super::AddCORS {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "token, Content-Type, Accept"));
        response.set_header(Header::new("Access-Control-Expose-Headers", "Content-Encoding, Content-Type"));
    }
}
