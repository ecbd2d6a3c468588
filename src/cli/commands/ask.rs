use crate::assistant::{ChatBackend, OllamaBackend, ReplySource};
use crate::cli::commands::{open_vault, report_unsaved};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::bold;
use regex::Regex;
use std::sync::OnceLock;

const WRAP_WIDTH: usize = 88;

fn bold_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").ok()).as_ref()
}

/// Turn `**text**` markers into terminal bold.
fn render(text: &str) -> String {
    match bold_re() {
        Some(re) => re.replace_all(text, |c: &regex::Captures<'_>| bold(&c[1])).into_owned(),
        None => text.to_string(),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask { message, offline } = cmd {
        let message = message.join(" ");

        let mut vault = open_vault(cfg);
        let backend = OllamaBackend::from_config(&vault.state().ai_config);
        let backend: Option<&dyn ChatBackend> = if *offline { None } else { Some(&backend) };

        let reply = vault.ask(&message, backend);

        println!("{}", render(&textwrap::fill(&reply.text, WRAP_WIDTH)));
        let source = match reply.source {
            ReplySource::Backend(status) => format!("ollama ({})", status.label()),
            ReplySource::Rules => "local rules".to_string(),
        };
        println!("{GREY}via {source}{RESET}");

        if let Some(action) = reply.action {
            audit(&cfg.database, "ask", &format!("{action:?}"), &message);
        }
        report_unsaved(&vault);
    }

    Ok(())
}
