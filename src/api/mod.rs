mod docs;
mod fairing;
mod routes;
mod structs;

use crate::config::structs::Config;
use crate::helpers;

use lazy_static::lazy_static;
use macros_rs::crashln;
use prometheus::{opts, register_counter, register_histogram_vec, Counter, HistogramVec};
use rocket::{catchers, routes, Build, Rocket};

pub struct Logger;
pub struct AddCORS;

lazy_static! {
    pub static ref HTTP_COUNTER: Counter = register_counter!(opts!("http_requests_total", "Number of HTTP requests made.")).unwrap();
    pub static ref HTTP_REQ_HISTOGRAM: HistogramVec = register_histogram_vec!("http_request_duration_seconds", "The HTTP request latencies in seconds.", &["route"]).unwrap();
}

pub fn rocket(config: Config) -> Rocket<Build> {
    let address = config.get_address();

    let figment = rocket::Config::figment()
        .merge(("ident", "pmg"))
        .merge(("address", address.ip()))
        .merge(("port", address.port()))
        .merge(("log_level", "critical"));

    rocket::custom(figment)
        .manage(config)
        .attach(Logger)
        .attach(AddCORS)
        .mount(
            "/",
            routes![
                routes::base_handler,
                routes::list_handler,
                routes::start_handler,
                routes::delete_handler,
                routes::stop_handler,
                routes::restart_handler,
                routes::status_handler,
                routes::prometheus_handler,
                routes::docs_json,
                routes::docs_handler,
            ],
        )
        .register("/", catchers![routes::fallback_catcher])
}

#[tokio::main]
pub async fn serve(config: Config) {
    if let Err(err) = rocket(config).launch().await {
        crashln!("{} Failed to launch API server\nError: {:#?}", *helpers::FAIL, err);
    }
}
