use aztagpolicy::{ServiceTag, ServiceTags};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Service Tag Names
--------------------------------------------------------------------------------------*/

pub fn service_tag_names(service_tags: &ServiceTags) {
    for name in service_tags.names() {
        println!("{name}");
    }
}

/*--------------------------------------------------------------------------------------
  Prefix Table
--------------------------------------------------------------------------------------*/

pub fn prefix_table(tag: &ServiceTag) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Address Prefix")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Type")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for prefix in &tag.prefixes {
        let prefix_type = if prefix.is_ipv4() { "IPv4" } else { "IPv6" };
        table.add_row(vec![
            Cell::new(prefix).add_attribute(Attribute::Bold),
            Cell::new(prefix_type),
        ]);
    }

    // Right-align the Address Prefix column
    let column = table.column_mut(0).expect("The first column exists");
    column.set_cell_alignment(CellAlignment::Right);

    println!("{table}");

    // Print tag summary
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new("Service Tag"), Cell::new(&tag.name)]);
    if let Some(system_service) = &tag.system_service {
        summary_table.add_row(vec![Cell::new("System Service"), Cell::new(system_service)]);
    }
    if let Some(region) = tag.region.as_ref().filter(|region| !region.is_empty()) {
        summary_table.add_row(vec![Cell::new("Region"), Cell::new(region)]);
    }
    summary_table.add_row(vec![
        Cell::new("Address Prefixes"),
        Cell::new(tag.prefixes.len()),
    ]);

    println!("{summary_table}");
}
