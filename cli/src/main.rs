mod argparse;
mod commands;
mod utils;

use argparse::parse_args;

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let catalog = odata_filter_cli::load_catalog(cli.catalog.as_deref())?;
    commands::handle_command(cli.command, &catalog)
}
