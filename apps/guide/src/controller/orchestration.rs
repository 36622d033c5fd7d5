//! Browse loop: input lines to actions, actions to the reducer, state to screens.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::debug;

use crate::controller::{
    events::{parse_action, UiAction},
    reducer::{Flow, Session},
};
use crate::ui::{self, ScreenOptions};

fn action_name(action: &UiAction) -> &'static str {
    match action {
        UiAction::Tab(_) => "tab",
        UiAction::OpenEvent(_) => "open_event",
        UiAction::OpenAthlete(_) => "open_athlete",
        UiAction::Back => "back",
        UiAction::ToggleFavorite(_) => "toggle_favorite",
        UiAction::Search(_) => "search",
        UiAction::Filter(_) => "filter",
        UiAction::ViewAll => "view_all",
        UiAction::ShowElement(_) => "show_element",
        UiAction::CloseElement => "close_element",
        UiAction::Help => "help",
        UiAction::Quit => "quit",
    }
}

pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    options: &ScreenOptions,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "{}", ui::render(session, options))?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(output)?;
            break;
        }

        let action = match parse_action(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "! {}", err.message())?;
                continue;
            }
        };
        debug!(action = action_name(&action), "ui action");

        match session.apply(action) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                debug!(category = ?err.category(), message = err.message(), "ui action rejected");
                writeln!(output, "! {}", err.message())?;
                continue;
            }
        }

        if let Some(notice) = session.take_notice() {
            writeln!(output, "{notice}")?;
        }
        writeln!(output, "{}", ui::render(session, options))?;
    }

    Ok(())
}
