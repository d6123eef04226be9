use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use shell_navigation::JournalEntry;
use shell_window::WindowSettings;

use shell_cli::session::SessionReport;

pub fn print_settings(path: &Path, settings: &WindowSettings) {
    println!("Settings: {}", path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec!["Height".to_string(), format_length(settings.height)]);
    table.add_row(vec!["Width".to_string(), format_length(settings.width)]);
    table.add_row(vec!["Left".to_string(), format_length(settings.left)]);
    table.add_row(vec!["Top".to_string(), format_length(settings.top)]);
    table.add_row(vec![
        "Normal state".to_string(),
        settings.is_normal_state.to_string(),
    ]);
    println!("{table}");
}

pub fn print_session(report: &SessionReport, persisted_to: Option<&Path>) {
    println!("Route: {}", report.route.join(" -> "));
    println!(
        "Back: {} step(s), forward: {} step(s)",
        report.back_taken, report.forward_taken
    );
    println!("Window: {}", report.window_state.label());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Destination"),
        header_cell("Position"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    let journal = &report.journal;
    let rows = journal
        .back
        .iter()
        .map(|entry| (entry, "back"))
        .chain(journal.current.iter().map(|entry| (entry, "current")))
        .chain(journal.forward.iter().map(|entry| (entry, "forward")));
    for (index, (entry, position)) in rows.enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            destination_cell(entry, position),
            Cell::new(position),
        ]);
    }
    println!("{table}");

    match persisted_to {
        Some(path) => println!("Saved window settings to {}", path.display()),
        None => println!("Window settings not persisted"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn destination_cell(entry: &JournalEntry, position: &str) -> Cell {
    let cell = Cell::new(&entry.destination);
    if position == "current" {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_length(value: f64) -> String {
    format!("{value:.1}")
}
