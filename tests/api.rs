use httpmock::prelude::*;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};

use pmg::api;
use pmg::config::structs::{Config, Server, Upstream};

fn gateway(upstream: &str) -> Client {
    pmg::globals::init();

    let config = Config {
        server: Server {
            address: "127.0.0.1".into(),
            port: 0,
        },
        upstream: Upstream {
            address: upstream.into(),
            token: None,
        },
    };

    Client::tracked(api::rocket(config)).expect("valid rocket instance")
}

fn healthy_daemon() -> MockServer {
    let daemon = MockServer::start();

    daemon.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({ "healthy": true }));
    });

    daemon
}

#[test]
fn processes_wraps_daemon_list_verbatim() {
    let daemon = healthy_daemon();

    let list = daemon.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200).json_body(json!([
            { "name": "srv-one", "status": "online", "pid": 4242 }
        ]));
    });

    let client = gateway(&daemon.base_url());
    let response = client.get("/processes").dispatch();

    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"][0]["name"], "srv-one");
    assert_eq!(body["data"][0]["pid"], 4242);

    list.assert();
}

#[test]
fn connection_failure_yields_standard_error_envelope() {
    // nothing listens here
    let client = gateway("http://127.0.0.1:9");
    let response = client.get("/processes").dispatch();

    assert_eq!(response.status(), Status::InternalServerError);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Error connecting to process manager");
}

#[test]
fn unhealthy_daemon_counts_as_connection_failure() {
    let daemon = MockServer::start();

    daemon.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(json!({ "healthy": false }));
    });

    let client = gateway(&daemon.base_url());
    let response = client.post("/stop").header(ContentType::JSON).body(r#"{"uuid": "srv-main"}"#).dispatch();

    assert_eq!(response.status(), Status::InternalServerError);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["message"], "Error connecting to process manager");
}

#[test]
fn delegate_failure_yields_standard_error_envelope() {
    let daemon = healthy_daemon();

    daemon.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(500).json_body(json!({ "error": "dump unreadable" }));
    });

    let client = gateway(&daemon.base_url());
    let response = client.get("/processes").dispatch();

    assert_eq!(response.status(), Status::InternalServerError);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Error listing processes");
}

#[test]
fn start_generates_default_name_for_daemon() {
    let daemon = healthy_daemon();

    let create = daemon.mock(|when, then| {
        when.method(POST).path("/process/create").body_contains("srv-");
        then.status(200).json_body(json!({ "name": "created", "pid": 100 }));
    });

    let client = gateway(&daemon.base_url());
    let response = client.post("/start").header(ContentType::JSON).body(r#"{"script": "sleep 100"}"#).dispatch();

    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Process started successfully");
    assert_eq!(body["data"]["pid"], 100);

    create.assert();
}

#[test]
fn start_forwards_supplied_name_and_params() {
    let daemon = healthy_daemon();

    let create = daemon.mock(|when, then| {
        when.method(POST).path("/process/create").json_body(json!({
            "name": "srv-main",
            "script": "worker.sh",
            "args": ["--queue", "default"]
        }));
        then.status(200).json_body(json!({ "name": "srv-main" }));
    });

    let client = gateway(&daemon.base_url());
    let response = client
        .post("/start")
        .header(ContentType::JSON)
        .body(r#"{"script": "worker.sh", "params": ["--queue", "default"], "name": "srv-main"}"#)
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    create.assert();
}

#[test]
fn lifecycle_actions_delegate_by_uuid() {
    let daemon = healthy_daemon();

    let stop = daemon.mock(|when, then| {
        when.method(POST).path("/process/srv-main/action").json_body(json!({ "method": "stop" }));
        then.status(200).json_body(json!({ "done": true }));
    });

    let remove = daemon.mock(|when, then| {
        when.method(POST).path("/process/srv-main/action").json_body(json!({ "method": "remove" }));
        then.status(200).json_body(json!({ "done": true }));
    });

    let restart = daemon.mock(|when, then| {
        when.method(POST).path("/process/srv-main/action").json_body(json!({ "method": "restart" }));
        then.status(200).json_body(json!({ "done": true }));
    });

    let client = gateway(&daemon.base_url());
    let body = r#"{"uuid": "srv-main"}"#;

    let response = client.post("/stop").header(ContentType::JSON).body(body).dispatch();
    assert_eq!(response.into_json::<Value>().unwrap()["message"], "Process stopped successfully");

    let response = client.post("/delete").header(ContentType::JSON).body(body).dispatch();
    assert_eq!(response.into_json::<Value>().unwrap()["message"], "Process deleted successfully");

    let response = client.post("/restart").header(ContentType::JSON).body(body).dispatch();
    assert_eq!(response.into_json::<Value>().unwrap()["message"], "Process restarted successfully");

    stop.assert();
    remove.assert();
    restart.assert();
}

#[test]
fn status_passes_description_through() {
    let daemon = healthy_daemon();

    let info = daemon.mock(|when, then| {
        when.method(GET).path("/process/srv-main/info");
        then.status(200).json_body(json!({
            "info": { "name": "srv-main", "status": "online" },
            "stats": { "restarts": 2 }
        }));
    });

    let client = gateway(&daemon.base_url());
    let response = client.get("/status/srv-main").dispatch();

    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["info"]["name"], "srv-main");
    assert_eq!(body["data"]["stats"]["restarts"], 2);

    info.assert();
}

#[test]
fn base_route_reports_healthy() {
    let client = gateway("http://127.0.0.1:9");
    let response = client.get("/").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_json::<Value>().unwrap()["healthy"], true);
}

#[test]
fn docs_describe_every_operation() {
    let client = gateway("http://127.0.0.1:9");
    let response = client.get("/docs.json").dispatch();

    assert_eq!(response.status(), Status::Ok);

    let doc: Value = response.into_json().unwrap();
    let paths = doc["paths"].as_object().unwrap();

    for path in ["/processes", "/start", "/delete", "/stop", "/restart", "/status/{uuid}"] {
        assert!(paths.contains_key(path), "missing {path}");
    }

    assert!(doc["servers"][0]["url"].as_str().unwrap().starts_with("http://127.0.0.1"));

    let response = client.get("/docs").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().unwrap().contains("rapi-doc"));
}

#[test]
fn unknown_routes_use_error_envelope() {
    let client = gateway("http://127.0.0.1:9");
    let response = client.get("/missing").dispatch();

    assert_eq!(response.status(), Status::NotFound);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["status"], "error");
}

#[test]
fn prometheus_exposes_request_metrics() {
    let client = gateway("http://127.0.0.1:9");
    client.get("/").dispatch();

    let response = client.get("/prometheus").dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert!(response.into_string().unwrap().contains("http_requests_total"));
}
