use crate::cli::commands::open_vault;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::TimecardFilter;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{currency, duration, time_of};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timecard { filter } = cmd {
        let filter: TimecardFilter = filter.parse()?;

        let vault = open_vault(cfg);
        let settings = &vault.state().settings;
        let card = vault.timecard(filter);

        if card.entries.is_empty() {
            info(format!("No time entries ({filter})."));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("ID", 14),
            Column::left("DATE", 10),
            Column::right("START", 8),
            Column::right("END", 8),
            Column::right("HOURS", 8),
            Column::right("EARNED", 12),
        ]);

        for e in &card.entries {
            table.add_row(vec![
                e.id.to_string(),
                e.date.format("%Y-%m-%d").to_string(),
                time_of(e.start_time, settings.time_format),
                time_of(e.end_time, settings.time_format),
                duration(e.duration),
                currency(e.earnings, settings),
            ]);
        }

        println!("🗓️  Timecard ({filter})\n");
        print!("{}", table.render());
        println!(
            "\nTotal: {} · {} · {} entries",
            duration(card.total_hours),
            currency(card.total_earnings, settings),
            card.entries.len()
        );
    }

    Ok(())
}
