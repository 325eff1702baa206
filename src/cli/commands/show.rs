use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::TableExport;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// First column left aligned (week / person), numbers right aligned.
fn to_table(export: &TableExport) -> Table {
    let columns = export
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { Column::left(h) } else { Column::right(h) })
        .collect();

    let mut table = Table::new(columns);
    for row in export.to_text_rows() {
        table.add_row(row);
    }
    table
}

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Show { config, infile } = cmd {
        let analysis = Core::analyze(&expand_tilde(config), &expand_tilde(infile))?;
        let cfg = &analysis.config;

        let average = TableExport::average_time(&analysis.report.average, &cfg.output);
        println!("{}\n", cfg.plot.avg_time_title);
        print!("{}", to_table(&average).render());
        println!();

        let overtime = TableExport::overtime(&analysis.report.overtime, &cfg.output);
        println!("{}\n", cfg.plot.overtime_title);
        if overtime.rows.is_empty() {
            info("No overtime found.");
        } else {
            print!("{}", to_table(&overtime).render());
        }
    }
    Ok(())
}
