//! Command-line front end for the cardbox core.
//!
//! # Responsibility
//! - Drive `cardbox_core` through the intent surface from shell commands.
//! - Render the resulting view deterministically for quick local checks.

use cardbox_core::{
    default_log_level, init_logging, CardStore, FileStorage, Intent, IntentDispatcher, ViewState,
};
use std::process::ExitCode;

const USAGE: &str = "usage: cardbox <command>

commands:
  add <title> [content] [tags]        create a card (tags comma-separated)
  edit <id> <title> [content] [tags]  replace a card's fields
  delete <id>                         remove a card
  list [tag]                          show cards, optionally one tag only
  tags                                show known tags
  version                             show core version

environment:
  CARDBOX_DATA     storage directory (default: .cardbox)
  CARDBOX_LOG_DIR  absolute directory for log files (logging off when unset)";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("CARDBOX_LOG_DIR") {
        if let Err(message) = init_logging(default_log_level(), &log_dir) {
            eprintln!("cardbox: logging disabled: {message}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("cardbox: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some((command, rest)) = args.split_first() else {
        return Err(USAGE.to_string());
    };

    match command.as_str() {
        "version" => {
            println!("cardbox {}", cardbox_core::core_version());
            Ok(())
        }
        "add" => {
            let title = rest.first().ok_or("add requires a title")?;
            let content = rest.get(1).map(String::as_str).unwrap_or("");
            let tags_input = rest.get(2).map(String::as_str).unwrap_or("");
            let mut d = open_dispatcher()?;
            let view = d.dispatch(Intent::Submit {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
                tags_input: tags_input.to_string(),
            });
            render(&view);
            Ok(())
        }
        "edit" => {
            let id = parse_id(rest.first())?;
            let title = rest.get(1).ok_or("edit requires a title")?;
            let content = rest.get(2).map(String::as_str).unwrap_or("");
            let tags_input = rest.get(3).map(String::as_str).unwrap_or("");
            let mut d = open_dispatcher()?;
            let view = d.dispatch(Intent::EditClick { id });
            if view.edit_target.is_none() {
                return Err(format!("no card with id {id}"));
            }
            let view = d.dispatch(Intent::Submit {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
                tags_input: tags_input.to_string(),
            });
            render(&view);
            Ok(())
        }
        "delete" => {
            let id = parse_id(rest.first())?;
            let mut d = open_dispatcher()?;
            let view = d.dispatch(Intent::DeleteClick { id });
            render(&view);
            Ok(())
        }
        "list" => {
            let tag = rest.first().map(String::as_str).unwrap_or("");
            let mut d = open_dispatcher()?;
            let view = d.dispatch(Intent::FilterChange {
                tag: tag.to_string(),
            });
            render(&view);
            Ok(())
        }
        "tags" => {
            let d = open_dispatcher()?;
            let view = d.view();
            if view.tag_options.is_empty() {
                println!("(no tags)");
            } else {
                for tag in &view.tag_options {
                    println!("{tag}");
                }
            }
            Ok(())
        }
        other => Err(format!("unknown command `{other}`\n{USAGE}")),
    }
}

fn open_dispatcher() -> Result<IntentDispatcher<FileStorage>, String> {
    let root = std::env::var("CARDBOX_DATA").unwrap_or_else(|_| ".cardbox".to_string());
    let storage = FileStorage::open(&root).map_err(|err| err.to_string())?;
    let mut store = CardStore::with_defaults(storage);
    store.load().map_err(|err| err.to_string())?;
    Ok(IntentDispatcher::new(store))
}

fn parse_id(arg: Option<&String>) -> Result<u64, String> {
    let raw = arg.ok_or("missing card id")?;
    raw.parse::<u64>()
        .map_err(|_| format!("invalid card id `{raw}`"))
}

fn render(view: &ViewState) {
    if view.degraded {
        eprintln!("warning: persistence unavailable, changes are not saved");
    }
    if view.is_empty() {
        println!("No cards found.");
        return;
    }
    for card in &view.cards {
        let tags = if card.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", card.tags.join(", "))
        };
        println!(
            "{}  {}{}  (created {})",
            card.id,
            card.title,
            tags,
            card.created_at.format("%Y-%m-%d")
        );
        if !card.content.is_empty() {
            println!("    {}", card.content);
        }
    }
}
