use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use staffview_report::config::{load_config, DashboardConfig};
use staffview_report::dashboard::render_dashboard;
use staffview_report::io::read_employee_csv;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("STAFFVIEW_LOG", "error,staffview=info"))
        .init();

    let matches = Command::new("staffview")
        .version(clap::crate_version!())
        .about("Staffview - Employee insights dashboard generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render the dashboard HTML from an employee CSV")
                .arg(
                    Arg::new("data")
                        .help(
                            "Path to the employee CSV. Overrides the input path \
                             specified in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("File path the dashboard HTML will be written to.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value("dashboard.html")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON dashboard configuration file.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub_matches)) => run_render(sub_matches),
        _ => unreachable!("subcommand is required"),
    }
}

fn run_render(matches: &ArgMatches) -> Result<()> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };

    let input = matches
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| config.input_path.clone());
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("dashboard.html"));

    log::info!("Loading employee data from {}", input.display());
    let data = read_employee_csv(&input)?;
    data.log_summary();

    let report = render_dashboard(&data, &config)?;
    report.write_html(&output)?;
    log::info!("Dashboard written to {}", output.display());

    Ok(())
}
