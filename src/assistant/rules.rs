//! Keyword-driven responder. Deterministic: the same message against the
//! same context always yields the same reply.

use regex::Regex;
use std::sync::OnceLock;

use crate::assistant::{AssistantAction, AssistantContext, Reply, Responder};
use crate::utils::formatting::time_of;

const GREETINGS: [&str; 4] = ["Hello!", "Hey there!", "Hi!", "Greetings!"];

fn rate_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$?(\d+\.?\d*)").ok()).as_ref()
}

fn greeting_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(hello|hi|hey)\b").ok())
        .as_ref()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedResponder;

impl RuleBasedResponder {
    fn earnings(&self, lower: &str, ctx: &AssistantContext) -> Reply {
        let (label, hours, money) = if lower.contains("today") {
            ("Today", ctx.today_hours, ctx.today_earnings)
        } else if lower.contains("week") {
            ("This week", ctx.week_hours, ctx.week_earnings)
        } else if lower.contains("month") {
            ("This month", ctx.month_hours, ctx.month_earnings)
        } else {
            return Reply::text(format!(
                "💰 Your earnings summary:\n• Today: {}\n• This Week: {}\n• This Month: {}",
                ctx.money(ctx.today_earnings),
                ctx.money(ctx.week_earnings),
                ctx.money(ctx.month_earnings)
            ));
        };

        Reply::text(format!(
            "💰 {label} you've earned **{}** for **{:.1} hours** of work.",
            ctx.money(money),
            hours
        ))
    }

    fn rate(&self, message: &str, lower: &str, ctx: &AssistantContext) -> Reply {
        let s = &ctx.settings;

        if lower.contains("change") || lower.contains("set") {
            let parsed = rate_re()
                .and_then(|re| re.captures(message))
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .filter(|r| r.is_finite());

            return match parsed {
                Some(rate) => Reply::with_action(
                    format!("✅ Hourly rate updated to **{}**/hour.", ctx.money(rate)),
                    AssistantAction::SetRate(rate),
                ),
                None => Reply::text(
                    "💡 To change your rate, say: \"Set my rate to $30\" or update it in Settings.",
                ),
            };
        }

        Reply::text(format!(
            "💵 Your current hourly rate is **{}**/hour.\n\nOvertime (after {}h/week): **{}x** = {}/hour",
            ctx.money(s.hourly_rate),
            s.overtime_threshold,
            s.overtime_multiplier,
            ctx.money(s.overtime_rate())
        ))
    }

    fn overtime(&self, ctx: &AssistantContext) -> Reply {
        let s = &ctx.settings;
        let overtime = ctx.week_overtime();

        if overtime > 0.0 {
            Reply::text(format!(
                "⚡ You've worked **{:.1} overtime hours** this week, earning an extra **{}**!",
                overtime,
                ctx.money(overtime * s.overtime_rate())
            ))
        } else {
            Reply::text(format!(
                "📊 No overtime yet. You have **{:.1} hours** until overtime kicks in at {}x rate.",
                s.overtime_threshold - ctx.week_hours,
                s.overtime_multiplier
            ))
        }
    }

    fn summary(&self, ctx: &AssistantContext) -> Reply {
        let status = if ctx.is_working {
            "🟢 Currently clocked in"
        } else {
            "🔴 Currently clocked out"
        };

        Reply::text(format!(
            "📋 **TimeVault Summary**\n\n{status}\n\n**Today:** {:.1}h • {}\n**Week:** {:.1}h • {}\n**Month:** {:.1}h • {}\n\nRate: {}/hr",
            ctx.today_hours,
            ctx.money(ctx.today_earnings),
            ctx.week_hours,
            ctx.money(ctx.week_earnings),
            ctx.month_hours,
            ctx.money(ctx.month_earnings),
            ctx.money(ctx.settings.hourly_rate)
        ))
    }

    fn help(&self) -> Reply {
        Reply::text(
            "🤖 **TimeVault AI Commands:**\n\
             • \"How much have I earned today/this week/this month?\"\n\
             • \"How many hours have I worked?\"\n\
             • \"What's my hourly rate?\"\n\
             • \"Set my rate to $XX\"\n\
             • \"Show overtime details\"\n\
             • \"Give me a summary\"\n\
             • \"Clock me in/out\"\n\
             • \"Help\" - Show this menu",
        )
    }
}

impl Responder for RuleBasedResponder {
    fn respond(&self, message: &str, ctx: &AssistantContext) -> Reply {
        let lower = message.to_lowercase();
        let has = |k: &str| lower.contains(k);

        if has("how much") && (has("earned") || has("made") || has("pay")) {
            return self.earnings(&lower, ctx);
        }

        if has("hours") && (has("worked") || has("many")) {
            return Reply::text(format!(
                "⏱️ Hours tracked:\n• Today: **{:.1}h**\n• This Week: **{:.1}h** / {}h\n• This Month: **{:.1}h**",
                ctx.today_hours, ctx.week_hours, ctx.settings.weekly_target, ctx.month_hours
            ));
        }

        if has("rate") || has("hourly") {
            return self.rate(message, &lower, ctx);
        }

        if has("overtime") {
            return self.overtime(ctx);
        }

        if has("summary") || has("status") {
            return self.summary(ctx);
        }

        if has("clock in") || has("start") {
            return match ctx.session_start {
                Some(since) if ctx.is_working => Reply::text(format!(
                    "⚠️ You're already clocked in since {}.",
                    time_of(since, ctx.settings.time_format)
                )),
                _ => Reply::with_action(
                    "✅ I've clocked you in! Timer started.",
                    AssistantAction::ClockIn,
                ),
            };
        }

        if has("clock out") || has("stop") {
            return if ctx.is_working {
                Reply::with_action(
                    "✅ Clocked you out! Time entry saved.",
                    AssistantAction::ClockOut,
                )
            } else {
                Reply::text("⚠️ You're not currently clocked in.")
            };
        }

        if has("help") {
            return self.help();
        }

        if greeting_re().is_some_and(|re| re.is_match(&lower)) {
            let pick = message.bytes().map(usize::from).sum::<usize>() % GREETINGS.len();
            return Reply::text(format!(
                "{} 👋 How can I help you with your time tracking today?",
                GREETINGS[pick]
            ));
        }

        if has("thank") {
            return Reply::text("You're welcome! 😊 Happy to help with your time tracking.");
        }

        Reply::text(
            "🤔 I'm not sure I understood that. Try asking:\n\
             • \"How much have I earned?\"\n\
             • \"How many hours this week?\"\n\
             • \"What's my rate?\"\n\
             • \"Give me a summary\"\n\n\
             Or type \"help\" for all commands.",
        )
    }
}
