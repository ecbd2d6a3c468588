use crate::cli::commands::open_vault;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::bold;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut vault = open_vault(cfg);
    let list = vault.suggestions();

    if list.is_empty() {
        info("No suggestions right now.");
        return Ok(());
    }

    println!("💡 Suggestions\n");
    for s in &list {
        println!("{} {}", s.icon, bold(s.title));
        println!("   {}", s.text);
        println!("   {GREY}→ {}{RESET}\n", s.action.command_hint());
    }

    Ok(())
}
