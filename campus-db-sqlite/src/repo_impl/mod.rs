// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    sql_types::BigInt,
};

use campus_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod campus;
mod catalog;
mod history;
mod location;
mod place;
mod route;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            log::warn!("Foreign key violation: {}", info.message());
            repo::Error::Integrity("Violación de integridad referencial".to_string())
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn inserted_rowid(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_approval_state(state: ApprovalStatePrimitive) -> Result<ApprovalState> {
    ApprovalState::try_from(state).map_err(|err| anyhow!(err).into())
}

fn load_history_operation(operation: HistoryOperationPrimitive) -> Result<HistoryOperation> {
    HistoryOperation::try_from(operation).map_err(|err| anyhow!(err).into())
}

fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis)
        .ok_or_else(|| anyhow!("Invalid timestamp: {millis} ms").into())
}
