//! The synchronization pipeline: ingest the CSV exports, append new transaction-log rows, and
//! rebuild the item-sales summary.

use crate::api::SheetStore;
use crate::commands::Out;
use crate::rows::RowBuilder;
use crate::{aggregate, dedup, ingest, summary, utils, Config, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// What a run did, for the operator and the logs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Records parsed from the CSV exports.
    pub records_parsed: usize,
    /// Rows appended to the transaction log (zero when everything was already present).
    pub rows_appended: usize,
    /// Distinct titles observed in the transaction log after the append.
    pub distinct_titles: usize,
    /// Titles added to the summary sheet's roster this run.
    pub roster_titles_added: usize,
    /// Summary rows written (equals the roster length).
    pub summary_rows_written: usize,
}

/// Runs the whole pipeline against `store`.
///
/// The transaction-log append happens before the summary rebuild and is never rolled back: if
/// a later step fails, the appended rows stay in place and the dedup pass makes the rerun
/// safe.
pub async fn run(
    config: &Config,
    input_dir: &Path,
    store: &mut (dyn SheetStore + Send),
) -> Result<Out<RunReport>> {
    let mut report = RunReport::default();

    // The transaction log: parse, expand, and append whatever the sheet does not have yet.
    let records = ingest::read_exports(input_dir)?;
    report.records_parsed = records.len();
    let builder = RowBuilder::new(config.ounce_differentiator(), config.five_ounce_prices())?;
    let candidates = builder.expand_all(&records)?;

    let existing = store.read(config.sheet1_range()).await?;
    let new_rows = dedup::unseen_rows(existing.as_deref(), &candidates);
    if new_rows.is_empty() {
        info!("No new rows to add to the transaction log");
    } else {
        info!(
            "Rows being written to the transaction log:\n\n{}",
            utils::render_table(&["item title", "sale date", "transaction id"], &new_rows)
        );
        report.rows_appended = new_rows.len();
        store.append(config.sheet1_range(), new_rows).await?;
    }

    // The summary: always rebuilt from the log's current contents so counts reflect the
    // cumulative history across runs, not just this batch.
    let title_rows = store
        .read(config.sheet1_title_range())
        .await?
        .unwrap_or_default();
    let counts = aggregate::count_sales(&title_rows);
    let observed = aggregate::distinct_titles(&title_rows);
    report.distinct_titles = observed.len();
    info!("Amount of unique items: {}", observed.len());

    let existing_titles = store
        .read(config.sheet2_title_range())
        .await?
        .map(|rows| rows.into_iter().flatten().collect::<Vec<String>>());
    let roster = summary::Roster::reconcile(existing_titles, &observed);
    report.roster_titles_added = roster.added().len();
    if roster.initialized() {
        info!("No titles found in the summary sheet, writing the initial roster");
        store
            .update(config.sheet2_title_range(), roster.title_rows())
            .await?;
    } else if !roster.added().is_empty() {
        info!("Appending {} new titles to the summary sheet", roster.added().len());
        store
            .append(config.sheet2_title_range(), roster.added_rows())
            .await?;
    }

    let rows = summary::build_rows(&roster, &counts, config.catalog());
    info!(
        "Summary rows being written:\n\n{}",
        utils::render_table(&["make cost", "selling price", "quantity sold"], &rows)
    );
    report.summary_rows_written = rows.len();
    store.update(config.sheet2_range(), rows).await?;

    Ok(Out::new(
        format!(
            "Appended {} transaction-log rows and wrote {} summary rows",
            report.rows_appended, report.summary_rows_written
        ),
        report,
    ))
}
