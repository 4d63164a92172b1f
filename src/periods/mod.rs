//! The period record manager: persistence round-trips against the store plus
//! the figures derived from a loaded record.

mod flow;
mod metrics;

pub(crate) use flow::FlowGraph;
pub(crate) use metrics::Metrics;

use tracing::{info, warn};

use crate::db::Database;
use crate::error::PeriodError;
use crate::models::{PeriodForm, PeriodRecord};

/// Stored period keys, in store order.
pub(crate) fn list_periods(db: &Database) -> Result<Vec<String>, PeriodError> {
    Ok(db.fetch_all_periods()?)
}

/// Upsert the submitted form under its period key.
pub(crate) fn save_record(db: &mut Database, form: PeriodForm) -> Result<(), PeriodError> {
    let key = form.period.to_string();
    db.insert_period(&key, &form.incomes, &form.expenses, &form.comment)?;
    info!(
        key = %key,
        income = form.incomes.total(),
        expense = form.expenses.total(),
        "saved period"
    );
    Ok(())
}

pub(crate) fn load_record(db: &Database, key: &str) -> Result<PeriodRecord, PeriodError> {
    match db.get_period(key)? {
        Some(record) => Ok(record),
        None => {
            warn!(key, "period not found");
            Err(PeriodError::NotFound {
                key: key.to_string(),
            })
        }
    }
}

pub(crate) fn compute_metrics(record: &PeriodRecord) -> Metrics {
    Metrics::from_record(record)
}

pub(crate) fn build_flow_graph(record: &PeriodRecord) -> FlowGraph {
    FlowGraph::from_record(record)
}
