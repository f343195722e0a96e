//! # Interactive Browse Loop
//!
//! Line-driven stand-in for the page: each input line is one interaction
//! event (tab click, keystroke, button press) and the view is re-rendered
//! after every transition.

use anyhow::Result;
use catalog_core::state::{CatalogSession, ViewAction};
use catalog_core::view::{render_text, TextOptions};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  all              select the \"All\" user tab
  user <name>      select a user tab (exact name)
  search <text>    set the search field (alias: / <text>)
  clear            press the clear button in the search field
  reset            press \"Reset all filters\"
  show             render the current view again
  help             show this help
  quit             leave (alias: exit)";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(ViewAction),
    Show,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "all" => Command::Action(ViewAction::SelectAllUsers),
        "user" if rest.trim().is_empty() => Command::Action(ViewAction::SelectAllUsers),
        "user" => Command::Action(ViewAction::SelectUser(rest.trim().to_string())),
        // Search text is taken verbatim so leading/trailing spaces can be typed
        "search" | "/" => Command::Action(ViewAction::SetQuery(rest.to_string())),
        "clear" => Command::Action(ViewAction::ClearQuery),
        "reset" => Command::Action(ViewAction::ResetAll),
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Run the loop until `quit` or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut CatalogSession<'_>,
    options: &TextOptions,
    input: R,
    mut output: W,
) -> Result<()> {
    write!(output, "{}", render_text(&session.view(), options))?;
    writeln!(output, "\nType `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Show => write!(output, "{}", render_text(&session.view(), options))?,
            Command::Unknown(word) => {
                writeln!(output, "Unknown command '{}'. Type `help`.", word)?;
            }
            Command::Action(ViewAction::SelectUser(name))
                if session.store().user_by_name(&name).is_none() =>
            {
                writeln!(output, "No user tab named '{}'.", name)?;
            }
            Command::Action(ViewAction::ClearQuery) if !session.state().clear_button_visible() => {
                writeln!(output, "Search field is already empty.")?;
            }
            Command::Action(action) => {
                let view = session.dispatch(action);
                write!(output, "{}", render_text(&view, options))?;
            }
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::fixtures::FixtureStore;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("user Max"),
            Command::Action(ViewAction::SelectUser("Max".to_string()))
        );
        assert_eq!(
            parse_command("search Apple Juice"),
            Command::Action(ViewAction::SetQuery("Apple Juice".to_string()))
        );
        assert_eq!(
            parse_command("/ ap"),
            Command::Action(ViewAction::SetQuery("ap".to_string()))
        );
        assert_eq!(
            parse_command("search"),
            Command::Action(ViewAction::SetQuery(String::new()))
        );
        assert_eq!(parse_command("all"), Command::Action(ViewAction::SelectAllUsers));
        assert_eq!(parse_command("reset\r\n"), Command::Action(ViewAction::ResetAll));
        assert_eq!(parse_command(""), Command::Show);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("sort id"), Command::Unknown("sort".to_string()));
    }

    fn run_script(script: &str) -> (String, CatalogSession<'static>) {
        let store = FixtureStore::bundled().unwrap();
        let mut session = CatalogSession::new(store);
        let mut output = Vec::new();
        run(
            &mut session,
            &TextOptions::default(),
            script.as_bytes(),
            &mut output,
        )
        .unwrap();
        (String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn test_script_updates_state() {
        let (_, session) = run_script("user Anna\nsearch MILK\nreset\nquit\nsearch never\n");
        assert_eq!(session.state().query, "");
        assert_eq!(session.state().selected_user_name, "Anna");
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        let (output, session) = run_script("user Nobody\n");
        assert!(output.contains("No user tab named 'Nobody'."));
        assert!(session.state().all_users_selected());
    }

    #[test]
    fn test_clear_on_empty_query() {
        let (output, _) = run_script("clear\n");
        assert!(output.contains("Search field is already empty."));
    }

    #[test]
    fn test_no_matches_message() {
        let (output, _) = run_script("search zzz\n");
        assert!(output.contains("No products matching selected criteria"));
    }
}
