use crate::core::command_parser::ParsedCommand;
use crate::errors::AppResult;
use crate::models::Command;
use crate::utils::formatting::bold;

const OVERVIEW: &str = "\
  ww                              show today's log
  ww start                        begin a new day
  ww <task> <message...>          log a work entry (1234, rnd-77, or a shorthand)
  ww pause                        toggle pause on/off
  ww edit                         interactive entry editor
  ww undo                         remove the most recent entry
  ww finish                       end of the day
  ww info                         file, totals and pause state of the day
  ww time [hours]                 worked and remaining time of the working day
  ww from [task]                  log the last git commit subject (also `fc`)
  ww help [command]               this help

Trailing tokens:
  y / yy / y<N>                   operate on N days back instead of today
  HHMM                            explicit time for the entry
  +<N>                            N minutes after the last entry
  fill                            reuse the last entry's time";

fn command_help(command: Command) -> &'static str {
    match command {
        Command::Start => "ww start [HHMM] [y..]  creates the day log with its start entry",
        Command::Finish => "ww finish [HHMM|+N|fill] [y..]  records the end of the day",
        Command::Info => "ww info [y..]  shows file location, entries and totals",
        Command::Edit => {
            "ww edit [y..]  pick an entry, then change its [t]ime, tas[k], [m]sg or [d]elete it"
        }
        Command::Undo => "ww undo [y..]  removes the last entry (not the start of the day)",
        Command::Pause => "ww pause [HHMM|+N|fill] [y..]  opens a pause, or closes the open one",
        Command::Help => "ww help [command]",
        Command::Time => {
            "ww time [hours] [y..]  worked time so far (or the given hours) and what is left of the day"
        }
        Command::From => "ww from [task] [HHMM|+N|fill] [y..]  logs the subject of the last git commit",
        Command::Empty | Command::Log => OVERVIEW,
    }
}

pub fn handle(parsed: &ParsedCommand) -> AppResult<()> {
    match parsed.args.first() {
        Some(topic) => {
            let command: Command = topic.parse()?;
            println!("\n{}", command_help(command));
        }
        None => {
            println!("\n{}\n", bold("Usage:"));
            println!("{}", OVERVIEW);
        }
    }
    Ok(())
}
