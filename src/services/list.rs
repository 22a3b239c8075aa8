//! Renders one list page from an exported JSON collection.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::campaign::Campaign;
use crate::domain::follow_up::FollowUp;
use crate::domain::invoice::Invoice;
use crate::domain::lead::Lead;
use crate::domain::project::Project;
use crate::domain::prospect::Prospect;
use crate::domain::record::{EntityKind, Record};
use crate::filters::{Clock, DataFilters, presets};
use crate::forms::list::ListQueryForm;
use crate::models::config::AppConfig;
use crate::repository::SearchHistoryWriter;
use crate::repository::errors::RepositoryError;
use crate::services::export::{export_file_name, export_prospects_csv};
use crate::services::history::record_search;
use crate::services::{ServiceError, ServiceResult};

pub const USAGE: &str = "usage: velora-jobs <leads|prospects|campaigns|follow-ups|projects|invoices> <records.json> [query] [--csv]";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCommand {
    pub entity: EntityKind,
    pub records: PathBuf,
    /// URL-encoded list state, e.g. `status=won&page=2`.
    pub query: String,
    /// Print the filtered records as CSV instead of the JSON page view.
    pub csv: bool,
}

impl ListCommand {
    /// Parses arguments without the program name.
    pub fn from_args<I>(args: I) -> ServiceResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut csv = false;
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--csv" {
                csv = true;
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let (Some(entity), Some(records)) = (positional.next(), positional.next()) else {
            return Err(ServiceError::Form(USAGE.to_string()));
        };
        let query = positional.next().unwrap_or_default();
        if positional.next().is_some() {
            return Err(ServiceError::Form(USAGE.to_string()));
        }

        let entity = entity.parse::<EntityKind>()?;

        Ok(Self {
            entity,
            records: PathBuf::from(records),
            query,
            csv,
        })
    }
}

/// Reads a JSON array of records as returned by the backend.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> ServiceResult<Vec<T>> {
    let bytes = fs::read(path).map_err(|err| {
        log::error!("Failed to read {}: {err}", path.display());
        RepositoryError::StorageError(format!("{}: {err}", path.display()))
    })?;
    serde_json::from_slice(&bytes).map_err(|err| {
        log::error!("Failed to parse {}: {err}", path.display());
        ServiceError::Repository(RepositoryError::SerializationError(format!(
            "{}: {err}",
            path.display()
        )))
    })
}

/// Builds the engine for `kind` and replays `form` onto it. A committed
/// search is remembered in `history`; failing to do so does not fail the
/// listing.
pub fn build_engine<T, C, R>(
    kind: EntityKind,
    records: Vec<T>,
    form: &ListQueryForm,
    config: &AppConfig,
    history: &R,
    clock: C,
) -> DataFilters<T, C>
where
    T: Record,
    C: Clock,
    R: SearchHistoryWriter + ?Sized,
{
    let options = presets::for_entity(kind)
        .page_size(config.default_page_size)
        .debounce(Duration::from_millis(config.debounce_ms));
    let searched_at = clock.timestamp();
    let mut engine = DataFilters::with_clock(records, options, clock);

    if let Some(term) = form.apply(&mut engine) {
        if let Err(err) = record_search(history, &term, searched_at) {
            log::warn!("Search {term:?} not added to history: {err}");
        }
    }

    log::debug!(
        "{kind}: {} of {} records match, page {}/{}",
        engine.total_filtered(),
        engine.data().len(),
        engine.current_page(),
        engine.total_pages()
    );
    engine
}

fn render_view<T, C, R>(
    command: &ListCommand,
    form: &ListQueryForm,
    config: &AppConfig,
    history: &R,
    clock: C,
) -> ServiceResult<String>
where
    T: Record + Clone + Serialize + DeserializeOwned,
    C: Clock,
    R: SearchHistoryWriter + ?Sized,
{
    let records: Vec<T> = load_records(&command.records)?;
    let engine = build_engine(command.entity, records, form, config, history, clock);
    serde_json::to_string_pretty(&engine.view())
        .map_err(|err| ServiceError::Internal(err.to_string()))
}

fn render_prospects_csv<C, R>(
    command: &ListCommand,
    form: &ListQueryForm,
    config: &AppConfig,
    history: &R,
    clock: C,
) -> ServiceResult<String>
where
    C: Clock,
    R: SearchHistoryWriter + ?Sized,
{
    let file_name = export_file_name(clock.today());
    let records: Vec<Prospect> = load_records(&command.records)?;
    let engine = build_engine(command.entity, records, form, config, history, clock);
    let mut buffer = Vec::new();
    let rows = export_prospects_csv(&engine.filtered_data(), &mut buffer)?;
    log::info!("Exported {rows} prospects as {file_name}");
    String::from_utf8(buffer).map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Runs a list command and returns what should be printed.
pub fn run_list<C, R>(
    command: &ListCommand,
    config: &AppConfig,
    history: &R,
    clock: C,
) -> ServiceResult<String>
where
    C: Clock,
    R: SearchHistoryWriter + ?Sized,
{
    let form = ListQueryForm::parse(&command.query)?;

    if command.csv {
        return match command.entity {
            EntityKind::Prospects => render_prospects_csv(command, &form, config, history, clock),
            other => Err(ServiceError::Form(format!(
                "CSV export is only available for prospects, not {other}"
            ))),
        };
    }

    match command.entity {
        EntityKind::Leads => render_view::<Lead, _, _>(command, &form, config, history, clock),
        EntityKind::Prospects => {
            render_view::<Prospect, _, _>(command, &form, config, history, clock)
        }
        EntityKind::Campaigns => {
            render_view::<Campaign, _, _>(command, &form, config, history, clock)
        }
        EntityKind::FollowUps => {
            render_view::<FollowUp, _, _>(command, &form, config, history, clock)
        }
        EntityKind::Projects => render_view::<Project, _, _>(command, &form, config, history, clock),
        EntityKind::Invoices => render_view::<Invoice, _, _>(command, &form, config, history, clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_entity_path_query_and_flag() {
        let command = ListCommand::from_args(args(&["prospects", "data.json", "status=new", "--csv"]))
            .expect("valid args");

        assert_eq!(
            command,
            ListCommand {
                entity: EntityKind::Prospects,
                records: PathBuf::from("data.json"),
                query: "status=new".to_string(),
                csv: true,
            }
        );
    }

    #[test]
    fn query_is_optional() {
        let command = ListCommand::from_args(args(&["leads", "leads.json"])).expect("valid args");
        assert_eq!(command.query, "");
        assert!(!command.csv);
    }

    #[test]
    fn missing_path_prints_usage() {
        assert!(matches!(
            ListCommand::from_args(args(&["leads"])),
            Err(ServiceError::Form(msg)) if msg == USAGE
        ));
    }

    #[test]
    fn missing_records_file_is_named_in_the_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("leads.json");

        let err = load_records::<Lead>(&path).expect_err("file is missing");

        assert!(matches!(
            &err,
            ServiceError::Repository(RepositoryError::StorageError(_))
        ));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn unknown_entity_is_rejected() {
        assert!(matches!(
            ListCommand::from_args(args(&["tasks", "tasks.json"])),
            Err(ServiceError::TypeConstraint(_))
        ));
    }
}
