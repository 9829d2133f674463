use super::docs;
use super::structs::{ActionResponse, DataResponse, ErrorMessage, StartBody, StartResponse, TargetBody};

use crate::config::structs::Config;
use crate::manager::{self, Manager};

use prometheus::{Encoder, TextEncoder};
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::serde::json::{json, Json, Value};
use rocket::{catch, get, post, Request, State};
use utoipa::OpenApi;

const CONNECT_ERROR: &str = "Error connecting to process manager";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PMG API",
        description = "REST gateway to manage processes through a process manager daemon"
    ),
    paths(list_handler, start_handler, delete_handler, stop_handler, restart_handler, status_handler),
    components(schemas(StartBody, TargetBody, DataResponse, StartResponse, ActionResponse, ErrorMessage))
)]
struct ApiDoc;

#[inline]
fn success(data: Value) -> (Status, Json<Value>) { (Status::Ok, Json(json!({ "status": "success", "data": data }))) }

#[inline]
fn done(message: &str) -> (Status, Json<Value>) { (Status::Ok, Json(json!({ "status": "success", "message": message }))) }

#[inline]
fn fail(err: anyhow::Error, message: &str) -> (Status, Json<Value>) {
    log!("[api] delegate failure", "reason" => err);
    (Status::InternalServerError, Json(json!({ "status": "error", "message": message })))
}

#[get("/")]
pub async fn base_handler() -> Json<Value> { Json(json!({ "healthy": true })) }

#[utoipa::path(
    get,
    path = "/processes",
    responses(
        (status = 200, description = "List of processes managed by the daemon", body = DataResponse),
        (status = 500, description = "Connection or delegate failure", body = ErrorMessage)
    )
)]
#[get("/processes")]
pub async fn list_handler(config: &State<Config>) -> (Status, Json<Value>) {
    let manager = match Manager::connect(&config.upstream).await {
        Ok(manager) => manager,
        Err(err) => return fail(err, CONNECT_ERROR),
    };

    match manager.list().await {
        Ok(data) => success(data),
        Err(err) => fail(err, "Error listing processes"),
    }
}

#[utoipa::path(
    post,
    path = "/start",
    request_body = StartBody,
    responses(
        (status = 200, description = "Process started successfully", body = StartResponse),
        (status = 500, description = "Connection or delegate failure", body = ErrorMessage)
    )
)]
#[post("/start", format = "json", data = "<body>")]
pub async fn start_handler(config: &State<Config>, body: Json<StartBody>) -> (Status, Json<Value>) {
    let StartBody { script, params, name } = body.into_inner();

    let name = name.unwrap_or_else(manager::default_name);
    let params = params.unwrap_or_default();

    let manager = match Manager::connect(&config.upstream).await {
        Ok(manager) => manager,
        Err(err) => return fail(err, CONNECT_ERROR),
    };

    match manager.create(&name, &script, &params).await {
        Ok(data) => (Status::Ok, Json(json!({ "status": "success", "message": "Process started successfully", "data": data }))),
        Err(err) => fail(err, "Error starting process"),
    }
}

#[utoipa::path(
    post,
    path = "/delete",
    request_body = TargetBody,
    responses(
        (status = 200, description = "Process deleted successfully", body = ActionResponse),
        (status = 500, description = "Connection or delegate failure", body = ErrorMessage)
    )
)]
#[post("/delete", format = "json", data = "<body>")]
pub async fn delete_handler(config: &State<Config>, body: Json<TargetBody>) -> (Status, Json<Value>) {
    let manager = match Manager::connect(&config.upstream).await {
        Ok(manager) => manager,
        Err(err) => return fail(err, CONNECT_ERROR),
    };

    match manager.remove(&body.uuid).await {
        Ok(_) => done("Process deleted successfully"),
        Err(err) => fail(err, "Error deleting process"),
    }
}

#[utoipa::path(
    post,
    path = "/stop",
    request_body = TargetBody,
    responses(
        (status = 200, description = "Process stopped successfully", body = ActionResponse),
        (status = 500, description = "Connection or delegate failure", body = ErrorMessage)
    )
)]
#[post("/stop", format = "json", data = "<body>")]
pub async fn stop_handler(config: &State<Config>, body: Json<TargetBody>) -> (Status, Json<Value>) {
    let manager = match Manager::connect(&config.upstream).await {
        Ok(manager) => manager,
        Err(err) => return fail(err, CONNECT_ERROR),
    };

    match manager.stop(&body.uuid).await {
        Ok(_) => done("Process stopped successfully"),
        Err(err) => fail(err, "Error stopping process"),
    }
}

#[utoipa::path(
    post,
    path = "/restart",
    request_body = TargetBody,
    responses(
        (status = 200, description = "Process restarted successfully", body = ActionResponse),
        (status = 500, description = "Connection or delegate failure", body = ErrorMessage)
    )
)]
#[post("/restart", format = "json", data = "<body>")]
pub async fn restart_handler(config: &State<Config>, body: Json<TargetBody>) -> (Status, Json<Value>) {
    let manager = match Manager::connect(&config.upstream).await {
        Ok(manager) => manager,
        Err(err) => return fail(err, CONNECT_ERROR),
    };

    match manager.restart(&body.uuid).await {
        Ok(_) => done("Process restarted successfully"),
        Err(err) => fail(err, "Error restarting process"),
    }
}

#[utoipa::path(
    get,
    path = "/status/{uuid}",
    params(("uuid" = String, Path, description = "Process identity assigned at start time")),
    responses(
        (status = 200, description = "Process description from the daemon", body = DataResponse),
        (status = 500, description = "Connection or delegate failure", body = ErrorMessage)
    )
)]
#[get("/status/<uuid>")]
pub async fn status_handler(config: &State<Config>, uuid: &str) -> (Status, Json<Value>) {
    let manager = match Manager::connect(&config.upstream).await {
        Ok(manager) => manager,
        Err(err) => return fail(err, CONNECT_ERROR),
    };

    match manager.describe(uuid).await {
        Ok(data) => success(data),
        Err(err) => fail(err, "Error retrieving process status"),
    }
}

#[get("/prometheus")]
pub async fn prometheus_handler() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::<u8>::new();
    let metric_families = prometheus::gather();

    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[get("/docs.json")]
pub fn docs_json(config: &State<Config>) -> Json<Value> {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![utoipa::openapi::Server::new(format!("http://{}", config.get_address()))]);

    Json(json!(doc))
}

#[get("/docs")]
pub fn docs_handler() -> RawHtml<String> { RawHtml(docs::render()) }

#[catch(default)]
pub fn fallback_catcher(status: Status, request: &Request) -> (Status, Json<Value>) {
    log!("[api] fallback", "status" => status, "uri" => request.uri());
    (status, Json(json!({ "status": "error", "message": status.reason_lossy() })))
}
