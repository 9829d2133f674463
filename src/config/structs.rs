use crate::helpers;
use macros_rs::crashln;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub server: Server,
    pub upstream: Upstream,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Upstream {
    pub address: String,
    pub token: Option<String>,
}

impl Config {
    /// Environment variables win over file values.
    pub fn with_env(mut self) -> Self {
        if let Ok(port) = env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => crashln!("{} Invalid PORT value (port={port})", *helpers::FAIL),
            }
        }

        if let Ok(address) = env::var("SERVER_ADDRESS") {
            self.server.address = address;
        }

        if let Ok(address) = env::var("UPSTREAM_ADDRESS") {
            self.upstream.address = address;
        }

        if let Ok(token) = env::var("UPSTREAM_TOKEN") {
            self.upstream.token = Some(token);
        }

        self
    }

    pub fn get_address(&self) -> SocketAddr {
        let ip = match self.server.address.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => crashln!("{} Invalid server address (address={})", *helpers::FAIL, self.server.address),
        };

        SocketAddr::new(ip, self.server.port)
    }
}

impl Upstream {
    pub fn get(&self) -> Self {
        Self {
            token: self.token.clone(),
            address: self.address.trim_end_matches('/').to_string(),
        }
    }
}
