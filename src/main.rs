use std::io::{self, prelude::*};

use anyhow::Context;
use clap::Parser;

use movieclient::{
    config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL},
    controller::{ActionResult, MovieController},
    state::view::MovieRow,
    status::Severity,
};

mod logging;

/// Terminal front end for a movie REST API.
#[derive(Parser)]
#[command(name = "movieclient", version)]
struct Cli {
    /// Base url of the movie API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

const HELP: &str = "\
Commands:
  list                  load every movie
  search                search by the title field
  set <field> <value>   edit a form field (id, title, actors, budget, description)
  select <id>           pick a listed movie into the form
  create                create a movie from the form
  update                update the movie in the form
  delete                delete the movie in the form
  clear                 clear the form
  show                  print the form and the list
  help                  this text
  quit                  exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.base_url).context("invalid configuration")?;
    let mut controller = movieclient::connect(&config)?;

    print_status(&controller);
    println!("Type `help` for a list of commands.");

    loop {
        let Some(line) = prompt("> ")? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "show" => {
                print_form(&controller);
                print_rows(&controller.rows());
            }
            "list" | "search" | "create" | "update" | "delete" => {
                let result = match command {
                    "list" => controller.get_all_movies().await,
                    "search" => controller.get_by_title().await,
                    "create" => controller.create_movie().await,
                    "update" => controller.update_movie().await,
                    _ => controller.delete_movie(confirm).await,
                };
                let refreshed = controller_result(result);
                report(&controller, refreshed);
            }
            "select" => {
                controller.select_movie(rest.trim());
                report(&controller, true);
            }
            "clear" => {
                controller.clear_form();
                report(&controller, true);
            }
            "set" => match set_field(&mut controller, rest) {
                Ok(()) => print_form(&controller),
                Err(message) => println!("{}", message),
            },
            other => println!("Unknown command `{}`. Type `help`.", other),
        }
    }

    Ok(())
}

fn controller_result(result: ActionResult) -> bool {
    if let Err(e) = &result {
        log::debug!("action stopped: {}", e);
    }
    result.is_ok()
}

fn report(controller: &MovieController, refreshed: bool) {
    print_status(controller);
    if refreshed {
        print_rows(&controller.rows());
    }
}

fn set_field(controller: &mut MovieController, args: &str) -> Result<(), String> {
    let (field, value) = args.split_once(' ').unwrap_or((args, ""));
    let form = &mut controller.form;
    let slot = match field {
        "id" => &mut form.id,
        "title" => &mut form.title,
        "actors" => &mut form.actors,
        "budget" => &mut form.budget,
        "description" => &mut form.description,
        _ => return Err(format!("Unknown field `{}`", field)),
    };
    *slot = value.to_string();
    Ok(())
}

fn confirm(question: &str) -> bool {
    match prompt(&format!("{} [y/N] ", question)) {
        Ok(Some(answer)) => matches!(answer.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_status(controller: &MovieController) {
    if let Some(message) = controller.status().current() {
        let marker = match message.severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        println!("[{}] {}", marker, message.text);
    }
}

fn print_form(controller: &MovieController) {
    let form = &controller.form;
    println!("  id:          {}", form.id);
    println!("  title:       {}", form.title);
    println!("  actors:      {}", form.actors);
    println!("  budget:      {}", form.budget);
    println!("  description: {}", form.description);
}

fn print_rows(rows: &[MovieRow]) {
    if rows.is_empty() {
        println!("(no movies)");
        return;
    }
    for row in rows {
        let marker = if row.selected { '*' } else { ' ' };
        println!(
            "{} {} | {} | {} | {} | {}",
            marker, row.id, row.title, row.actors, row.budget, row.description
        );
    }
}
