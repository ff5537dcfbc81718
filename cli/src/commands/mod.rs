mod fields;
mod query;

use crate::argparse::Commands;
pub use fields::{handle_fields_command, handle_sets_command};
use odata_filter::Catalog;
pub use query::handle_query_command;

pub fn handle_command(command: Commands, catalog: &Catalog) -> anyhow::Result<()> {
    match command {
        Commands::Query(args) => handle_query_command(args, catalog),
        Commands::Fields(args) => handle_fields_command(args, catalog),
        Commands::Sets => handle_sets_command(catalog),
    }
}
