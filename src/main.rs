use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use fltq::panel::FilterPanel;
use fltq::schema;
use fltq::ui::{Container, GroupEntry};

#[derive(Parser)]
#[command(
    name = "fltq",
    about = "Decode, normalize, and inspect filter query strings against a widget schema"
)]
struct Cli {
    #[arg(long, env = "FLTQ_SCHEMA", help = "Path to the schema YAML file")]
    schema: Option<PathBuf>,

    #[arg(long, help = "Print the seeded widget states instead of re-encoding")]
    show: bool,

    #[arg(long, help = "Append the non-filter parameters to the re-encoded output")]
    keep_extra: bool,

    #[arg(help = "Query string to decode, without the leading '?'")]
    query: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let Some(schema_path) = cli.schema else {
        eprintln!("Error: No schema specified. Use --schema or set FLTQ_SCHEMA");
        return ExitCode::from(2);
    };

    let schema = match schema::load(&schema_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Schema error: {}", e);
            return ExitCode::from(2);
        }
    };

    let query = cli.query.unwrap_or_default();
    let container = Container::new();
    let panel = FilterPanel::new(&schema, &container, &query);

    if cli.show {
        print_panel(&container, panel.filters_active());
    } else {
        let mut qs = panel.submit();
        if cli.keep_extra && !panel.extra_params().is_empty() {
            if !qs.is_empty() {
                qs.push('&');
            }
            qs.push_str(&panel.extra_params().join("&"));
        }
        println!("{}", qs);
    }

    if panel.filters_active() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn print_panel(container: &Container, filters_active: bool) {
    if filters_active {
        println!("filters active");
    }

    for group in container.groups().iter() {
        println!("{}", group.legend);

        for entry in &group.entries {
            match entry {
                GroupEntry::Number(input) => {
                    println!(
                        "  {} = {} [{}..{} step {}]",
                        input.name,
                        input.value(),
                        input.min,
                        input.max,
                        input.step
                    );
                }
                GroupEntry::Choice { label, input } => {
                    let mark = match (input.exclusive(), input.checked()) {
                        (true, true) => "(x)",
                        (true, false) => "( )",
                        (false, true) => "[x]",
                        (false, false) => "[ ]",
                    };
                    println!("  {} {} ({})", mark, label, input.value);
                }
            }
        }
    }
}
