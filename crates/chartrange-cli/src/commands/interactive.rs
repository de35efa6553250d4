//! Interactive mode: each stdin line becomes one table event.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use chartrange_core::{Config, Difficulty, DisplayMode, Event, ScoringOptions, SortColumn};
use tracing::warn;

use crate::app::{self, CliSession};
use crate::cli::{parse_column, parse_difficulty, parse_display};
use crate::commands::show;

const HELP: &str = "\
Commands:
  toggle <difficulty>   flip a difficulty checkbox
  on <difficulty>       check a difficulty
  off <difficulty>      uncheck a difficulty
  display <0|1|2>       title display mode
  sort <column>         click a column header (title, difficulty, level, min, avg, max)
  bp <number|none>      change the break point
  show                  print the table again
  help                  show this help
  quit                  exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Toggle(Difficulty),
    Set(Difficulty, bool),
    Display(DisplayMode),
    Sort(SortColumn),
    BreakPoint(Option<f64>),
    Show,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Option<Input>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();
    if words.next().is_some() {
        bail!("Too many arguments: {}", line.trim());
    }

    let required = |name: &str| match argument {
        Some(value) => Ok(value),
        None => Err(anyhow::anyhow!("{} needs an argument", name)),
    };

    let input = match command.to_lowercase().as_str() {
        "toggle" => Input::Toggle(parse_arg(parse_difficulty, required("toggle")?)?),
        "on" => Input::Set(parse_arg(parse_difficulty, required("on")?)?, true),
        "off" => Input::Set(parse_arg(parse_difficulty, required("off")?)?, false),
        "display" => Input::Display(parse_arg(parse_display, required("display")?)?),
        "sort" => Input::Sort(parse_arg(parse_column, required("sort")?)?),
        "bp" => match required("bp")? {
            "none" | "off" => Input::BreakPoint(None),
            value => Input::BreakPoint(Some(value.parse()?)),
        },
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => bail!("Unknown command: {} (try 'help')", other),
    };
    Ok(Some(input))
}

fn parse_arg<T>(parser: fn(&str) -> Result<T, String>, value: &str) -> Result<T> {
    parser(value).map_err(anyhow::Error::msg)
}

/// Turn an input into the event it triggers, if any
fn to_event(session: &CliSession, input: &Input) -> Result<Option<Event>> {
    let event = match input {
        Input::Toggle(difficulty) => {
            let checked = session
                .table()
                .panel()
                .is_checked(&difficulty.filter_control_id())?;
            Some(Event::FilterToggled {
                difficulty: *difficulty,
                checked: !checked,
            })
        }
        Input::Set(difficulty, checked) => Some(Event::FilterToggled {
            difficulty: *difficulty,
            checked: *checked,
        }),
        Input::Display(display) => Some(Event::DisplayChanged(*display)),
        Input::Sort(column) => Some(Event::HeaderClicked(*column)),
        Input::BreakPoint(bp) => Some(Event::OptionsChanged(ScoringOptions {
            bp: *bp,
            ..session.table().options().clone()
        })),
        Input::Show | Input::Help | Input::Quit => None,
    };
    Ok(event)
}

pub fn run(config: &Config) -> Result<()> {
    let mut session = app::build_session(config, None)?;
    session.dispatch(Event::OptionsChanged(config.options.clone()))?;
    println!("{}", show::render(&session));
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = match parse_line(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match input {
            Input::Quit => break,
            Input::Help => println!("{}", HELP),
            Input::Show => println!("{}", show::render(&session)),
            ref input => {
                if let Some(event) = to_event(&session, input)? {
                    session.push(event);
                }
                match session.run_pending() {
                    Ok(_) => println!("{}", show::render(&session)),
                    Err(e) => warn!("Failed to update table: {}", e),
                }
            }
        }
    }

    Ok(())
}
