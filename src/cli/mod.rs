use colored::Colorize;
use macros_rs::string;
use serde::Serialize;
use serde_json::json;

use pmg::{
    api, config,
    helpers::{self, ColoredString},
    manager::Manager,
};

use tabled::{
    settings::{
        object::Columns,
        style::{BorderColor, Style},
        themes::Colorization,
        Color, Rotate,
    },
    Table, Tabled,
};

pub fn get_version(short: bool) -> String {
    return match short {
        true => format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        false => match env!("GIT_HASH") {
            "" => format!("{} ({}) [{}]", env!("CARGO_PKG_VERSION"), env!("BUILD_DATE"), env!("PROFILE")),
            hash => format!("{} ({} {hash}) [{}]", env!("CARGO_PKG_VERSION"), env!("BUILD_DATE"), env!("PROFILE")),
        },
    };
}

pub fn serve() {
    let config = config::read();
    let address = config.get_address();

    println!("{} Starting API server (address={address})", *helpers::SUCCESS);
    println!("{} Docs served at http://{address}/docs", *helpers::SUCCESS);

    api::serve(config);
}

#[tokio::main]
pub async fn health(format: &String) {
    let config = config::read();

    #[derive(Clone, Debug, Tabled)]
    struct Info {
        #[tabled(rename = "gateway address")]
        address: String,
        #[tabled(rename = "upstream address")]
        upstream: String,
        #[tabled(rename = "process count")]
        process_count: String,
        version: String,
        status: ColoredString,
    }

    impl Serialize for Info {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let trimmed_json = json!({
             "address": &self.address.trim(),
             "upstream": &self.upstream.trim(),
             "process_count": &self.process_count.trim(),
             "version": &self.version.trim(),
             "status": &self.status.0.trim(),
            });

            trimmed_json.serialize(serializer)
        }
    }

    let (status, process_count) = match Manager::connect(&config.upstream).await {
        Ok(manager) => match manager.list().await {
            Ok(list) => (
                ColoredString("online".green().bold()),
                string!(list.as_array().map(|list| list.len()).unwrap_or(0)),
            ),
            Err(_) => (ColoredString("degraded".yellow().bold()), string!("n/a")),
        },
        Err(_) => (ColoredString("unreachable".red().bold()), string!("n/a")),
    };

    let data = vec![Info {
        status,
        process_count,
        version: get_version(true),
        address: string!(config.get_address()),
        upstream: config.upstream.get().address,
    }];

    let table = Table::new(data.clone())
        .with(Rotate::Left)
        .with(Style::rounded().remove_horizontals())
        .with(Colorization::exact([Color::FG_CYAN], Columns::first()))
        .with(BorderColor::filled(Color::FG_BRIGHT_BLACK))
        .to_string();

    if let Ok(json) = serde_json::to_string(&data[0]) {
        match format.as_str() {
            "raw" => println!("{:?}", data[0]),
            "json" => println!("{json}"),
            "default" => {
                println!("{}\n{table}\n", format!("PMG gateway information").on_bright_white().black());
                println!(" {}", format!("Use `pmg serve` to start the API server").white());
            }
            _ => {}
        };
    };
}
