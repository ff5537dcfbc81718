use crate::argparse::FieldsArgs;
use odata_filter::Catalog;
use odata_filter_cli::find_entity_set;
use tabular::{Row, Table};

pub fn handle_fields_command(args: FieldsArgs, catalog: &Catalog) -> anyhow::Result<()> {
    let entity_set = find_entity_set(catalog, &args.entity_set)?;

    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}")
        .with_row(Row::from_cells(["Field", "Type", "EDM type"].iter().cloned()));
    for (name, field_type) in entity_set.schema.iter() {
        let label = if name == entity_set.key {
            format!("{} (key)", name)
        } else {
            name.to_string()
        };
        table.add_row(
            Row::new()
                .with_cell(label)
                .with_cell(field_type)
                .with_cell(field_type.edm_name()),
        );
    }
    print!("{}", table);
    Ok(())
}

pub fn handle_sets_command(catalog: &Catalog) -> anyhow::Result<()> {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:>}")
        .with_row(Row::from_cells(["Entity set", "Key", "Records"].iter().cloned()));
    for entity_set in catalog.entity_sets() {
        table.add_row(
            Row::new()
                .with_cell(&entity_set.name)
                .with_cell(&entity_set.key)
                .with_cell(entity_set.records.len()),
        );
    }
    print!("{}", table);
    Ok(())
}
