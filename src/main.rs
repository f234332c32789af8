use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use content_wizard_state::{
    catalog, config::Config, logger, snapshot, state, AppError, AppResult,
};
use log::*;

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = Config::load(matches.value_of("config"))?;
    logger::init(config.level_filter())?;
    debug!("Using configuration {:?}", config);

    let output = run(&config, &matches)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Define the command line interface.
///
fn cli() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .bin_name("wizard-inspect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect a content wizard state snapshot")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("snapshot")
                .short("s")
                .long("snapshot")
                .value_name("FILE")
                .help("State snapshot (.json, .yml or .yaml), overrides config")
                .takes_value(true),
        )
        .subcommand(SubCommand::with_name("selected").about("List selected node ids"))
        .subcommand(
            SubCommand::with_name("available").about("List channels offered by the remote source"),
        )
        .subcommand(SubCommand::with_name("installed").about("List locally installed channels"))
        .subcommand(
            SubCommand::with_name("drive")
                .about("List channels on a drive")
                .arg(Arg::with_name("ID").required(true).help("Drive id")),
        )
        .subcommand(
            SubCommand::with_name("catalog")
                .about("List the tokens of a catalog")
                .arg(
                    Arg::with_name("NAME")
                        .required(true)
                        .possible_values(&catalog::CATALOG_NAMES)
                        .help("Catalog name"),
                ),
        )
}

/// Execute the requested subcommand and return its output.
///
fn run(config: &Config, matches: &ArgMatches) -> AppResult<serde_json::Value> {
    if let ("catalog", Some(sub)) = matches.subcommand() {
        // Required by clap
        let name = sub.value_of("NAME").unwrap_or_default();
        return Ok(serde_json::to_value(catalog::tokens_of(name)?)?);
    }

    let path = config.resolve_snapshot_path(matches.value_of("snapshot"))?;
    let snapshot = snapshot::load(&path)?;
    info!("Inspecting snapshot {}", path.display());

    let output = match matches.subcommand() {
        ("selected", _) => serde_json::to_value(state::selected_nodes(&snapshot))?,
        ("available", _) => serde_json::to_value(state::available_channels(&snapshot))?,
        ("installed", _) => serde_json::to_value(state::installed_channel_list(&snapshot))?,
        ("drive", Some(sub)) => {
            let drive_id = sub.value_of("ID").unwrap_or_default();
            if state::find_drive(&snapshot, drive_id).is_none() {
                warn!("No drive with id {} in snapshot", drive_id);
            }
            serde_json::to_value(state::drive_channel_list(&snapshot)(drive_id))?
        }
        (other, _) => return Err(AppError::UnknownCommand(other.to_string())),
    };
    Ok(output)
}
