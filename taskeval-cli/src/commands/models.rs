//! `taskeval models` — print the provider registry.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use taskeval_core::available_models;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["name", "kind"]);

    for (name, config) in available_models() {
        table.add_row([name, config.kind.to_string()]);
    }

    println!("{table}");
    Ok(())
}
