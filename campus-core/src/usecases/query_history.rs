use super::prelude::*;

/// A page of history records together with the number
/// of all records that match the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPage<S> {
    pub records: Vec<HistoryRecord<S>>,
    pub total_count: u64,
}

pub fn query_history<R, S>(repo: &R, query: &HistoryQuery<S>) -> Result<HistoryPage<S>>
where
    R: HistoryRepo<S>,
    S: HistorySubject,
{
    let records = repo.query_history(query)?;
    let total_count = repo.count_history(query.subject_id)?;
    log::debug!(
        "Loaded {} of {total_count} {:?} history records",
        records.len(),
        S::KIND
    );
    Ok(HistoryPage {
        records,
        total_count,
    })
}
