pub mod structs;

use crate::file::{self, Exists};
use crate::helpers;

use colored::Colorize;
use global_placeholders::global;
use macros_rs::{crashln, string};
use std::fs;
use structs::{Config, Server, Upstream};

fn defaults() -> Config {
    Config {
        server: Server {
            address: string!("0.0.0.0"),
            port: 3000,
        },
        upstream: Upstream {
            address: string!("http://127.0.0.1:5630"),
            token: None,
        },
    }
}

pub fn read() -> Config {
    let config_path = global!("pmg.config");

    if !Exists::check(&config_path).file() {
        let config = defaults();

        let contents = match toml::to_string(&config) {
            Ok(contents) => contents,
            Err(err) => crashln!("{} Cannot parse config.\n{}", *helpers::FAIL, string!(err).white()),
        };

        if let Err(err) = fs::write(&config_path, contents) {
            crashln!("{} Error writing config.\n{}", *helpers::FAIL, string!(err).white())
        }
        log::info!("created config file");
    }

    file::read::<Config>(config_path).with_env()
}
