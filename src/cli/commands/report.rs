use crate::cli::commands::open_vault;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{currency, duration, hours1};
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let vault = open_vault(cfg);
    let s = &vault.state().settings;
    let r = vault.report();

    header("Reports");

    println!("Total hours       {}", duration(r.total_hours));
    println!("Total earnings    {}", currency(r.total_earnings, s));
    println!("Days worked (30d) {}", r.days_worked_30);
    println!("Avg hours (30d)   {}", hours1(r.avg_hours_30));
    println!("Avg daily hours   {}", hours1(r.avg_daily_hours));
    println!();

    let mut table = Table::new(vec![
        Column::left("MONTH", 10),
        Column::right("HOURS", 8),
        Column::right("EARNED", 12),
    ]);
    for m in &r.monthly {
        table.add_row(vec![
            format!("{} {}", m.label, m.year),
            hours1(m.hours),
            currency(m.earnings, s),
        ]);
    }
    print!("{}", table.render());

    Ok(())
}
