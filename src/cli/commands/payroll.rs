use crate::cli::commands::open_vault;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::PayrollPeriod;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_overtime, colorize};
use crate::utils::formatting::{bold, currency, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Payroll { period } = cmd {
        let period: PayrollPeriod = period.parse()?;

        let vault = open_vault(cfg);
        let s = &vault.state().settings;
        let p = vault.payroll(period);

        header(format!("Payroll · {}", p.period));

        if let Some((from, to)) = p.bounds {
            println!("{}{} → {}", pad_right("Period", 18), from, to);
        }
        println!("{}{}", pad_right("Entries", 18), p.entries.len());
        println!(
            "{}{:.2}h × {} = {}",
            pad_right("Regular", 18),
            p.split.regular,
            currency(p.hourly_rate, s),
            currency(p.regular_pay, s)
        );
        println!(
            "{}{} × {} = {}",
            pad_right("Overtime", 18),
            colorize(&format!("{:.2}h", p.split.overtime), color_for_overtime(p.split.overtime)),
            currency(p.overtime_rate, s),
            currency(p.overtime_pay, s)
        );
        println!("{}{:.2}h", pad_right("Total hours", 18), p.total_hours());
        println!("{}{}", pad_right("Gross pay", 18), bold(&currency(p.gross_pay, s)));
    }

    Ok(())
}
