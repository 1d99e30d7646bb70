//! Interactive day browsing.

use anyhow::Context;
use chrono::Local;
use forecast_core::{Dashboard, generator::StdRng, view::DashboardView};
use inquire::error::InquireResult;
use inquire::{InquireError, Select};
use std::fmt;
use tracing::debug;

use crate::render::{self, RenderOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    PreviousDay,
    NextDay,
    PickDay,
    Regenerate,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::PreviousDay => "< Previous day",
            Action::NextDay => "Next day >",
            Action::PickDay => "Pick a day",
            Action::Regenerate => "Regenerate data",
            Action::Quit => "Quit",
        })
    }
}

/// Menu for the current view; directional actions are left out when disabled.
fn actions(view: &DashboardView) -> Vec<Action> {
    let mut actions = Vec::with_capacity(5);
    if !view.carousel.previous_disabled {
        actions.push(Action::PreviousDay);
    }
    if !view.carousel.next_disabled {
        actions.push(Action::NextDay);
    }
    actions.extend([Action::PickDay, Action::Regenerate, Action::Quit]);
    actions
}

fn day_labels(view: &DashboardView) -> Vec<String> {
    view.carousel
        .entries
        .iter()
        .map(|entry| {
            let marker = if entry.index == 0 { " (Today)" } else { "" };
            format!("{} {}°{marker}", entry.weekday, entry.temperature_c)
        })
        .collect()
}

/// Outcome of one prompt: an answer, Esc (back) or Ctrl-C (quit).
#[derive(Debug, PartialEq, Eq)]
enum Choice<T> {
    Picked(T),
    Back,
    Quit,
}

fn choice<T>(answer: InquireResult<T>) -> Result<Choice<T>, InquireError> {
    match answer {
        Ok(value) => Ok(Choice::Picked(value)),
        Err(InquireError::OperationCanceled) => Ok(Choice::Back),
        Err(InquireError::OperationInterrupted) => Ok(Choice::Quit),
        Err(err) => Err(err),
    }
}

pub fn run(mut dashboard: Dashboard<StdRng>, opts: RenderOptions) -> anyhow::Result<()> {
    loop {
        let view = dashboard.view();
        println!("{}\n", render::render(&view, opts));

        let answer = Select::new("What next?", actions(&view)).prompt();
        let action = match choice(answer).context("Failed to read action")? {
            Choice::Picked(action) => action,
            Choice::Back | Choice::Quit => Action::Quit,
        };
        debug!(?action, "browse action");

        match action {
            Action::PreviousDay => {
                dashboard.select_previous();
            }
            Action::NextDay => {
                dashboard.select_next();
            }
            Action::PickDay => {
                let answer = Select::new("Pick a day:", day_labels(&view))
                    .with_starting_cursor(view.selected_index)
                    .raw_prompt();
                match choice(answer).context("Failed to read day")? {
                    Choice::Picked(option) => {
                        dashboard.select_index(option.index);
                    }
                    Choice::Back => {}
                    Choice::Quit => return Ok(()),
                }
            }
            Action::Regenerate => dashboard.regenerate(Local::now().date_naive()),
            Action::Quit => return Ok(()),
        }
    }
}
