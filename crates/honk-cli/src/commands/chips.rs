use comfy_table::{ContentArrangement, Table};

use honk_core::ChipCollection;

pub fn run() -> Result<(), String> {
    let chips = ChipCollection::new();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Colour", "Value"]);
    for (i, chip) in chips.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), chip.colour.clone(), chip.value.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} chips", chips.len());

    Ok(())
}
