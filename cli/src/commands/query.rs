use crate::argparse::QueryArgs;
use anyhow::Context;
use odata_filter::{context_url_for, Catalog};
use odata_filter_cli::{collection_response, find_entity_set};

pub fn handle_query_command(args: QueryArgs, catalog: &Catalog) -> anyhow::Result<()> {
    let entity_set = find_entity_set(catalog, &args.entity_set)?;
    let filter = args.filter.as_deref().unwrap_or_default();

    let records = entity_set.filter(filter);
    tracing::info!(
        "{} of {} {} record(s) match \"{}\"",
        records.len(),
        entity_set.records.len(),
        entity_set.name,
        filter
    );

    let context_url = match args.service_root {
        Some(root) => context_url_for(&root, &entity_set.name),
        None => catalog.context_url(&entity_set.name),
    };
    let response = collection_response(&context_url, &records);

    if args.pretty {
        let pretty =
            serde_json::to_string_pretty(&response).context("Failed to render response")?;
        println!("{}", pretty);
    } else {
        println!("{}", response);
    }
    Ok(())
}
