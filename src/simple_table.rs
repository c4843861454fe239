// Print a simple-mode cyclic table once, fully revealed.
//
// Usage: simple_table [rows] [columns] [--json] [--no-connectors]

use c_table::display::{print_table, TableDisplayConfig};
use c_table::protocol::{self, TableRequest};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rows = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("5");
    let columns = args
        .iter()
        .skip(1)
        .filter(|a| !a.starts_with("--"))
        .nth(1)
        .map(String::as_str)
        .unwrap_or(rows);
    let as_json = args.iter().any(|a| a == "--json");
    let connectors = !args.iter().any(|a| a == "--no-connectors");

    let request = TableRequest::new(rows, columns);

    if as_json {
        println!("{}", protocol::respond_json(&request));
        return;
    }

    match protocol::handle_request(&request) {
        Ok(table) => {
            let total = table.iter().flatten().count() as u32;
            let display = TableDisplayConfig {
                show_connectors: connectors,
                ..TableDisplayConfig::default()
            };
            print_table(&table, total, &display);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
