use crate::{Args, Command};
use anyhow::Result;
use babar_utils::config::Config;
use babar_utils::{dates, duration, hash, ident, strings};
use serde::Serialize;
use serde_json::{json, Value};

pub struct Context {
    pub args: Args,
    pub config: Config,
}

/// One result line in `--json` mode
#[derive(Serialize)]
struct Record<'a> {
    command: &'a str,
    input: Value,
    output: Value,
}

pub fn run(ctx: &Context) -> Result<()> {
    for (command, input, output) in evaluate(ctx)? {
        print_result(ctx, command, input, output)?;
    }
    Ok(())
}

/// Run the selected helper and collect `(command, input, output)` triples
fn evaluate(ctx: &Context) -> Result<Vec<(&'static str, Value, Value)>> {
    let cfg = &ctx.config;
    let mut results = Vec::new();

    match &ctx.args.command {
        Command::Hash { text } => {
            for t in text {
                results.push(("hash", json!(t), json!(hash::hash_code(t))));
            }
        }
        Command::Split { text } => {
            let items = strings::commas_to_vec(text.as_deref());
            results.push(("split", json!(text), json!(items)));
        }
        Command::Limit { text, max } => {
            let max = max.unwrap_or_else(|| cfg.default_limit());
            results.push(("limit", json!(text), json!(strings::limit(text, max))));
        }
        Command::Date { ms, zone } => {
            let zone = zone.unwrap_or_else(|| cfg.zone());
            for &m in ms {
                results.push(("date", json!(m), json!(dates::format_date(m, zone)?)));
            }
        }
        Command::Time { ms, zone } => {
            let zone = zone.unwrap_or_else(|| cfg.zone());
            for &m in ms {
                results.push(("time", json!(m), json!(dates::format_time(m, zone)?)));
            }
        }
        Command::Duration { ms, style } => {
            let style = style.unwrap_or_else(|| cfg.duration_style());
            for &m in ms {
                let text = duration::format_duration(m, style);
                results.push(("duration", json!(m), json!(text)));
            }
        }
        Command::Id { strategy, count } => {
            let strategy = strategy.unwrap_or_else(|| cfg.id_strategy());
            for _ in 0..*count {
                let id = ident::generate_id(strategy);
                results.push(("id", json!(strategy.as_str()), json!(id)));
            }
        }
        Command::Config => {
            let effective = cfg.effective();
            results.push(("config", Value::Null, serde_json::to_value(&effective)?));
        }
    }

    Ok(results)
}

fn print_result(ctx: &Context, command: &str, input: Value, output: Value) -> Result<()> {
    if ctx.args.json {
        let record = Record {
            command,
            input,
            output,
        };
        println!("{}", serde_json::to_string(&record)?);
        return Ok(());
    }

    match (command, output) {
        ("config", _) => {
            print!("{}", toml::to_string_pretty(&ctx.config.effective())?);
        }
        (_, Value::Array(items)) => {
            for item in items {
                println!("{}", plain(&item));
            }
        }
        (_, value) => println!("{}", plain(&value)),
    }
    Ok(())
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
