use crate::file::Exists;
use crate::helpers;

use global_placeholders::init;
use macros_rs::crashln;
use std::{fs, sync::Once};

static INIT: Once = Once::new();

// Entered from main and from test harnesses.
pub fn init() {
    INIT.call_once(|| match home::home_dir() {
        Some(path) => {
            let path = path.display();

            if !Exists::check(&format!("{path}/.pmg/")).folder() {
                fs::create_dir_all(format!("{path}/.pmg/")).unwrap();
                log::info!("created pmg base dir");
            }

            init!("pmg.base", format!("{path}/.pmg/"));
            init!("pmg.log", format!("{path}/.pmg/pmg.log"));
            init!("pmg.config", format!("{path}/.pmg/config.toml"));
        }
        None => crashln!("{} Impossible to get your home directory", *helpers::FAIL),
    });
}
