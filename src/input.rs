//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input.
//!
//! Specifically, they pick the next action from the menu, take a new number of players, and take a
//! new name for one of the players.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::frame::MenuItem;
use crate::roster::Roster;

/// The number of players listed at once when picking one to rename.
const VISIBLE_PLAYERS: usize = 15;

/// This function shows the menu under the board and returns the entry picked by the user. Leaving
/// the menu with the escape key counts as picking the exit.
pub(crate) fn take_action(term: &Term, simulate_rolls: u64) -> Result<MenuItem> {
    let items = MenuItem::list();
    let labels: Vec<String> = items
        .iter()
        .map(|item| item.label(simulate_rolls))
        .collect();

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("What now?").bold()))
        .items(&labels)
        .default(0)
        .interact_on_opt(term)?;

    Ok(picked
        .and_then(|index| items.get(index).copied())
        .unwrap_or(MenuItem::Exit))
}

/// This function is in charge of taking the text for the new number of players. The text is
/// returned as typed, as it is up to the roster to decide whether it holds a usable count.
pub(crate) fn take_player_count(term: &Term, current: usize) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Number of players").bold()))
        .with_initial_text(current.to_string())
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(input)
}

/// This function lets the user pick one of the players and type in a new name for them. Nothing is
/// returned if the user backs out of the player list.
pub(crate) fn take_rename(term: &Term, roster: &Roster) -> Result<Option<(usize, String)>> {
    let labels: Vec<String> = roster
        .iter()
        .enumerate()
        .map(|(index, player)| format!("{}. {}", index + 1, player.name()))
        .collect();

    let Some(index) = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Which player?").bold()))
        .items(&labels)
        .default(0)
        .max_length(VISIBLE_PLAYERS)
        .interact_on_opt(term)?
    else {
        return Ok(None);
    };

    let current = roster.get(index).map(|player| player.name().to_owned());
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("New name").bold()))
        .with_initial_text(current.unwrap_or_default())
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(Some((index, name)))
}
