//! Filtering, search debouncing and pagination for the Velora Jobs CRM list
//! pages, plus the CLI services built on top of them.

use crate::filters::Clock;
use crate::models::config::AppConfig;
use crate::repository::SearchHistoryWriter;
use crate::services::ServiceResult;
use crate::services::list::{ListCommand, run_list};

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod filters;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

/// Parses `args` (without the program name) and renders the requested list
/// page.
pub fn run<I, R, C>(config: &AppConfig, args: I, history: &R, clock: C) -> ServiceResult<String>
where
    I: IntoIterator<Item = String>,
    R: SearchHistoryWriter + ?Sized,
    C: Clock,
{
    let command = ListCommand::from_args(args)?;
    log::info!(
        "Listing {} from {}",
        command.entity,
        command.records.display()
    );
    run_list(&command, config, history, clock)
}
