// deltazap-core/deltazap-cli
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use deltazap_core::dtos::{ChatId, UserId};

#[derive(Clone)]
struct OptString(Option<String>);

impl FromStr for OptString {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s != "<not set>" {
            Ok(OptString(Some(s.to_owned())))
        } else {
            Ok(OptString(None))
        }
    }
}

impl Display for OptString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(ref str) => write!(f, "{}", str),
            None => write!(f, "<not set>"),
        }
    }
}

pub fn prompt_string(prompt: impl Into<String>) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(false)
        .interact_text()?)
}

pub fn prompt_string_with_default(
    prompt: impl Into<String>,
    default: impl Into<String>,
) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.into())
        .interact_text()?)
}

pub fn prompt_opt_string(prompt: impl Into<String>) -> Result<Option<String>> {
    Ok(Input::<OptString>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(OptString(None))
        .allow_empty(true)
        .interact_text()?
        .0)
}

pub fn prompt_user_id(prompt: impl Into<String>) -> Result<UserId> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| input.trim().parse::<UserId>().map(|_| ()))
        .interact_text()?;
    Ok(input.trim().parse()?)
}

pub fn prompt_chat_id(prompt: impl Into<String>) -> Result<ChatId> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| input.trim().parse::<ChatId>().map(|_| ()))
        .interact_text()?;
    Ok(input.trim().parse()?)
}

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn prompt_date(prompt: impl Into<String>) -> Result<DateTime<Utc>> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} (dd/mm/yyyy hh:mm)", prompt.into()))
        .validate_with(|input: &String| parse_date(input).map(|_| ()))
        .interact_text()?;
    parse_date(&input)
}

pub fn prompt_opt_date(prompt: impl Into<String>) -> Result<Option<DateTime<Utc>>> {
    let input = prompt_opt_string(format!("{} (dd/mm/yyyy hh:mm)", prompt.into()))?;
    input.as_deref().map(parse_date).transpose()
}

fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), DATE_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Lets the user pick one of `items`. Returns `None` if the list is empty or the selection
/// was cancelled.
pub fn select_item_from_list<T, O: ToString>(
    prompt: &str,
    items: impl IntoIterator<Item = T>,
    format: impl Fn(&T) -> O,
) -> Result<Option<T>> {
    let mut list = items.into_iter().collect::<Vec<_>>();
    if list.is_empty() {
        println!("Nothing to select.");
        return Ok(None);
    }

    let display_list = list.iter().map(format).map(|o| o.to_string()).collect::<Vec<_>>();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(display_list.as_slice())
        .interact_opt()?;
    println!();

    Ok(selection.map(|idx| list.swap_remove(idx)))
}

pub fn select_multiple_from_list<T, O: ToString>(
    prompt: &str,
    items: impl IntoIterator<Item = T>,
    format: impl Fn(&T) -> O,
) -> Result<Vec<T>> {
    let list = items.into_iter().collect::<Vec<_>>();
    let display_list = list.iter().map(format).map(|o| o.to_string()).collect::<Vec<_>>();
    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(display_list.as_slice())
        .interact()?;
    println!();

    Ok(list
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| selection.contains(idx))
        .map(|(_, item)| item)
        .collect())
}

pub fn select_variant<T: Display + Clone>(prompt: &str, variants: &[T]) -> Result<T> {
    let Some(idx) = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(variants)
        .interact_opt()?
    else {
        bail!("Cancelled.")
    };
    println!();
    Ok(variants[idx].clone())
}
