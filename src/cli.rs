use std::sync::Arc;

use crate::config::ServerConfig;
use crate::data::export::{self, ExportFormat};
use crate::data::table::WeaponTable;
use crate::data::weapon::WeaponClass;
use crate::server;
use crate::server::api::{weapon_items, WeaponItem};

const USAGE: &str = "usage: ammoguide <serve|list|show|export>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    List,
    Show,
    Export,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("list") => Some(Command::List),
        Some("show") => Some(Command::Show),
        Some("export") => Some(Command::Export),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };

    let table = match WeaponTable::load() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("failed to load weapon table: {err}");
            return 1;
        }
    };

    match command {
        Command::Serve => handle_serve(table),
        Command::List => handle_list(&table, args),
        Command::Show => handle_show(&table, args),
        Command::Export => handle_export(&table, args),
    }
}

fn handle_serve(table: Arc<WeaponTable>) -> i32 {
    let config = ServerConfig::from_env();
    match server::run_server(table, &config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_list(table: &WeaponTable, args: &[String]) -> i32 {
    let as_table = args.iter().any(|arg| arg == "--table");
    let class = if args.iter().any(|arg| arg == "--class") {
        let Some(raw) = flag_value(args, "--class") else {
            eprintln!("usage: ammoguide list [--class <class>] [--table]");
            return 2;
        };
        match raw.parse::<WeaponClass>() {
            Ok(class) => Some(class),
            Err(err) => {
                eprintln!("{err}");
                return 2;
            }
        }
    } else {
        None
    };

    let rows = weapon_items(table, class);

    if as_table {
        println!("name\tclass\tbadge\tcharts");
        for row in &rows {
            println!(
                "{}\t{}\t{}\t{}",
                row.name,
                row.entry.weapon_class,
                row.entry.badge,
                row.entry.range_images().len() + 1
            );
        }
        return 0;
    }

    match serde_json::to_string_pretty(&rows) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize weapon list: {err}");
            1
        }
    }
}

fn handle_show(table: &WeaponTable, args: &[String]) -> i32 {
    let Some(name) = args.get(2) else {
        eprintln!("usage: ammoguide show <weapon-name>");
        return 2;
    };

    let Some(entry) = table.get(name) else {
        eprintln!("weapon not found: '{name}'");
        return 1;
    };

    match serde_json::to_string_pretty(&WeaponItem {
        name: name.as_str(),
        entry,
    }) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize weapon: {err}");
            1
        }
    }
}

fn handle_export(table: &WeaponTable, args: &[String]) -> i32 {
    let Some(raw_format) = args.get(2) else {
        eprintln!("usage: ammoguide export <json|yaml|csv> [path]");
        return 2;
    };
    let format = match raw_format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(err) => {
            eprintln!("{err}");
            return 2;
        }
    };

    match args.get(3) {
        Some(path) => match export::write_export(table, format, path) {
            Ok(()) => {
                println!("export complete: weapons={}, path='{}'", table.len(), path);
                0
            }
            Err(err) => {
                eprintln!("export failed: {err}");
                1
            }
        },
        None => match export::render(table, format) {
            Ok(payload) => {
                print!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("export failed: {err}");
                1
            }
        },
    }
}

/// Value following `flag`. None when the flag is absent, last, or followed by another flag.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .map(String::as_str)
        .filter(|value| !value.starts_with("--"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command(&args(&["ammoguide", "serve"])), Some(Command::Serve));
        assert_eq!(parse_command(&args(&["ammoguide", "list"])), Some(Command::List));
        assert_eq!(parse_command(&args(&["ammoguide", "show", "AK4D"])), Some(Command::Show));
        assert_eq!(parse_command(&args(&["ammoguide", "export"])), Some(Command::Export));
        assert_eq!(parse_command(&args(&["ammoguide", "simulate"])), None);
        assert_eq!(parse_command(&args(&["ammoguide"])), None);
    }

    #[test]
    fn flag_value_reads_following_argument() {
        let argv = args(&["ammoguide", "list", "--class", "SMG", "--table"]);
        assert_eq!(flag_value(&argv, "--class"), Some("SMG"));
        assert_eq!(flag_value(&argv, "--missing"), None);
        assert_eq!(flag_value(&args(&["ammoguide", "list", "--class"]), "--class"), None);
        assert_eq!(
            flag_value(&args(&["ammoguide", "list", "--class", "--table"]), "--class"),
            None
        );
    }
}
