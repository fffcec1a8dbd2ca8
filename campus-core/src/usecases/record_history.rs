use super::prelude::*;

fn subject_noun(kind: SubjectKind) -> &'static str {
    match kind {
        SubjectKind::Place => "Lugar",
        SubjectKind::Route => "Ruta",
    }
}

// Past participle that agrees with the grammatical gender
// of the subject noun.
fn operation_participle(kind: SubjectKind, operation: HistoryOperation) -> &'static str {
    use HistoryOperation as O;
    use SubjectKind as K;
    match (kind, operation) {
        (K::Place, O::Create) => "creado",
        (K::Place, O::Update) => "actualizado",
        (K::Place, O::Delete) => "eliminado",
        (K::Place, O::Approve) => "aprobado",
        (K::Place, O::ReturnToConstruction) => "devuelto a construcción",
        (K::Route, O::Create) => "creada",
        (K::Route, O::Update) => "actualizada",
        (K::Route, O::Delete) => "eliminada",
        (K::Route, O::Approve) => "aprobada",
        (K::Route, O::ReturnToConstruction) => "devuelta a construcción",
    }
}

/// Human readable description of a mutation, e.g.
/// `Lugar "Biblioteca" aprobado`.
pub fn history_message(
    kind: SubjectKind,
    operation: HistoryOperation,
    subject_name: &str,
) -> String {
    let noun = subject_noun(kind);
    let participle = operation_participle(kind, operation);
    match subject_name.trim() {
        "" => format!("{noun} {participle}"),
        name => format!("{noun} \"{name}\" {participle}"),
    }
}

/// Appends a single entry to the history of the subject.
///
/// Must be invoked after every successful mutation. A failure
/// to store the entry is reported as [`Error::HistoryNotRecorded`]
/// and never as the error of the mutation itself.
pub fn record_history<R, S>(
    repo: &R,
    operation: HistoryOperation,
    actor: &str,
    subject_id: S,
    subject_name: &str,
) -> Result<HistoryEntryId>
where
    R: HistoryRepo<S>,
    S: HistorySubject,
{
    if !validate::is_valid_actor_name(actor) {
        return Err(Error::Actor);
    }
    let entry = NewHistoryEntry {
        subject_id,
        activity: Activity::now(actor.trim()),
        operation,
        message: history_message(S::KIND, operation, subject_name),
    };
    let id = repo.add_history_entry(&entry).map_err(|err| {
        log::error!(
            "Failed to record {operation:?} of {:?} {subject_id:?}: {err}",
            S::KIND
        );
        Error::HistoryNotRecorded(err)
    })?;
    log::debug!("Recorded {operation:?} of {:?} {subject_id:?} as entry {id}", S::KIND);
    Ok(id)
}
