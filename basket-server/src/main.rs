use anyhow::{anyhow, Result};
use basket_algorithms::dispatch;
use basket_challenges::Challenge;
use basket_server::{load_catalog, serve};
use basket_structs::{
    api::{Algorithm, OptimizeReq},
    config::ServerConfig,
};
use basket_utils::{jsonify_pretty, Price};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .help("(Optional) Path to a json catalog. Defaults to the built-in grocery table")
        .value_parser(value_parser!(PathBuf))
}

fn cli() -> Command {
    Command::new("basket")
        .about("Picks grocery items under a weight and a price budget")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Runs the http service")
                .arg(
                    Arg::new("host")
                        .long("host")
                        .help("(Optional) Address to bind. Defaults to 127.0.0.1")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("port")
                        .long("port")
                        .help("(Optional) Port to listen on. Defaults to 5000")
                        .value_parser(value_parser!(u16)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("(Optional) Server config json file")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("optimize")
                .about("Runs one search and prints the ranked selections")
                .arg(
                    Arg::new("max_weight")
                        .long("max-weight")
                        .default_value("10")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("max_price")
                        .long("max-price")
                        .default_value("20.0")
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("algorithm")
                        .long("algorithm")
                        .help("bfs, dfs, or knapsack (any other name runs knapsack)")
                        .default_value("knapsack")
                        .value_parser(value_parser!(String)),
                )
                .arg(catalog_arg()),
        )
        .subcommand(
            Command::new("item")
                .about("Prints a single catalog item")
                .arg(
                    Arg::new("ID")
                        .help("Item id")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                )
                .arg(catalog_arg()),
        )
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("serve", sub_m)) => match server_config(sub_m) {
            Ok(config) => serve(config).await,
            Err(e) => Err(e),
        },
        Some(("optimize", sub_m)) => optimize(sub_m),
        Some(("item", sub_m)) => item(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn server_config(sub_m: &ArgMatches) -> Result<ServerConfig> {
    let mut config = match sub_m.get_one::<PathBuf>("config") {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = sub_m.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = sub_m.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(catalog) = sub_m.get_one::<PathBuf>("catalog") {
        config.catalog_path = Some(catalog.clone());
    }
    Ok(config)
}

fn optimize(sub_m: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(sub_m.get_one::<PathBuf>("catalog").map(|p| p.as_path()))?;
    let req = OptimizeReq {
        max_weight: *sub_m.get_one::<u32>("max_weight").unwrap(),
        max_price: Price::from_f64(*sub_m.get_one::<f64>("max_price").unwrap()),
        algorithm: Algorithm::from_name(sub_m.get_one::<String>("algorithm").unwrap()),
    };
    let selections = dispatch(&catalog, &req);

    let challenge = Challenge::new(&catalog, req.max_weight, req.max_price);
    for selection in &selections {
        challenge.verify_selection(selection)?;
    }
    println!("{}", jsonify_pretty(&selections));
    Ok(())
}

fn item(sub_m: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(sub_m.get_one::<PathBuf>("catalog").map(|p| p.as_path()))?;
    let item = catalog.get(*sub_m.get_one::<u32>("ID").unwrap())?;
    println!("{}", jsonify_pretty(item));
    Ok(())
}
