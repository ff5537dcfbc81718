use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "odata-filter",
    about = "Run OData $filter expressions against in-memory entity sets",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Catalog file (.yaml or .json) declaring the entity sets. Defaults to the built-in sample
    #[arg(long, global = true, env = "ODATA_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter an entity set and print the matching records as an OData collection
    Query(QueryArgs),
    /// List the filterable fields of an entity set
    Fields(FieldsArgs),
    /// List the entity sets in the catalog
    Sets,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Entity set name, e.g. Productos
    pub entity_set: String,

    /// Raw $filter value, percent-encoded or not, e.g. "Precio gt 100"
    #[arg(long)]
    pub filter: Option<String>,

    /// Override the service root used for @odata.context
    #[arg(long)]
    pub service_root: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// Entity set name, e.g. Personas
    pub entity_set: String,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
