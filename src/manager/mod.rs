use crate::config::structs::Upstream;

use anyhow::{anyhow, Result};
use macros_rs::string;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Serialize)]
struct CreateBody<'c> {
    pub name: &'c str,
    pub script: &'c str,
    pub args: &'c [String],
}

#[derive(Serialize)]
struct ActionBody {
    pub method: String,
}

/// Connection to a process manager daemon, held for a single delegated call.
pub struct Manager {
    address: String,
    client: Client,
    headers: HeaderMap,
}

pub fn default_name() -> String { format!("srv-{}", Uuid::new_v4()) }

impl Manager {
    /// Handshakes against the daemon base route before any operation is
    /// delegated. Dropping the value is the disconnect.
    pub async fn connect(upstream: &Upstream) -> Result<Self> {
        let Upstream { address, token } = upstream.get();
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("token {token}"))?);
        }

        let manager = Manager {
            address,
            headers,
            client: Client::new(),
        };

        let health = manager.get("/").await?;

        match health["healthy"].as_bool() {
            Some(true) => Ok(manager),
            _ => Err(anyhow!("process manager at {} did not report healthy", manager.address)),
        }
    }

    pub async fn list(&self) -> Result<Value> { self.get("/list").await }
    pub async fn describe(&self, name: &str) -> Result<Value> { self.get(&format!("/process/{name}/info")).await }

    pub async fn create(&self, name: &str, script: &str, args: &[String]) -> Result<Value> {
        log::debug!("delegating create (name={name})");
        self.post("/process/create", &CreateBody { name, script, args }).await
    }

    pub async fn restart(&self, name: &str) -> Result<Value> { self.action(name, "restart").await }
    pub async fn stop(&self, name: &str) -> Result<Value> { self.action(name, "stop").await }
    pub async fn remove(&self, name: &str) -> Result<Value> { self.action(name, "remove").await }

    async fn action(&self, name: &str, method: &str) -> Result<Value> {
        log::debug!("delegating {method} (name={name})");
        self.post(&format!("/process/{name}/action"), &ActionBody { method: string!(method) }).await
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let response = self.client.get(format!("{}{path}", self.address)).headers(self.headers.clone()).send().await?;
        Self::parse(response).await
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value> {
        let response = self.client.post(format!("{}{path}", self.address)).json(body).headers(self.headers.clone()).send().await?;
        Self::parse(response).await
    }

    async fn parse(response: Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            return Err(anyhow!("process manager returned {status}"));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_names_are_unique_and_prefixed() {
        let first = default_name();
        let second = default_name();

        assert!(first.starts_with("srv-"));
        assert!(second.starts_with("srv-"));
        assert_ne!(first, second);
    }

    #[test]
    fn create_body_matches_daemon_shape() {
        let args = vec![string!("--once")];
        let body = CreateBody {
            name: "srv-main",
            script: "worker.sh",
            args: &args,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "name": "srv-main", "script": "worker.sh", "args": ["--once"] })
        );
    }
}
