use rollcall_core::StudentRow;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RosterLine {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Class Group")]
    group: String,
}

pub fn roster_table(rows: &[StudentRow]) -> String {
    let lines = rows.iter().map(|row| RosterLine {
        position: row.position,
        name: row.name.clone(),
        group: row.group.clone(),
    });

    let mut table = Table::new(lines);
    table.with(Style::modern());
    table.to_string()
}
