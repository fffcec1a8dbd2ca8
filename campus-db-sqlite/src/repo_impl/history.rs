use super::*;
use diesel::sql_types::Nullable;

impl HistoryRepo<PlaceId> for DbReadOnly<'_> {
    fn add_history_entry(&self, entry: &NewHistoryEntry<PlaceId>) -> Result<HistoryEntryId> {
        add_place_history_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn query_history(&self, query: &HistoryQuery<PlaceId>) -> Result<Vec<PlaceHistoryRecord>> {
        query_place_history(&mut self.conn.borrow_mut(), query)
    }
    fn count_history(&self, subject_id: Option<PlaceId>) -> Result<u64> {
        count_place_history(&mut self.conn.borrow_mut(), subject_id)
    }
}

impl HistoryRepo<PlaceId> for DbConnection<'_> {
    fn add_history_entry(&self, entry: &NewHistoryEntry<PlaceId>) -> Result<HistoryEntryId> {
        add_place_history_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn query_history(&self, query: &HistoryQuery<PlaceId>) -> Result<Vec<PlaceHistoryRecord>> {
        query_place_history(&mut self.conn.borrow_mut(), query)
    }
    fn count_history(&self, subject_id: Option<PlaceId>) -> Result<u64> {
        count_place_history(&mut self.conn.borrow_mut(), subject_id)
    }
}

impl HistoryRepo<RouteId> for DbReadOnly<'_> {
    fn add_history_entry(&self, entry: &NewHistoryEntry<RouteId>) -> Result<HistoryEntryId> {
        add_route_history_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn query_history(&self, query: &HistoryQuery<RouteId>) -> Result<Vec<RouteHistoryRecord>> {
        query_route_history(&mut self.conn.borrow_mut(), query)
    }
    fn count_history(&self, subject_id: Option<RouteId>) -> Result<u64> {
        count_route_history(&mut self.conn.borrow_mut(), subject_id)
    }
}

impl HistoryRepo<RouteId> for DbConnection<'_> {
    fn add_history_entry(&self, entry: &NewHistoryEntry<RouteId>) -> Result<HistoryEntryId> {
        add_route_history_entry(&mut self.conn.borrow_mut(), entry)
    }
    fn query_history(&self, query: &HistoryQuery<RouteId>) -> Result<Vec<RouteHistoryRecord>> {
        query_route_history(&mut self.conn.borrow_mut(), query)
    }
    fn count_history(&self, subject_id: Option<RouteId>) -> Result<u64> {
        count_route_history(&mut self.conn.borrow_mut(), subject_id)
    }
}

// The subject and its campus are left-joined, both names
// are NULL if the subject has been deleted in the meantime.
// Entries of the same millisecond are ordered by insertion.
const QUERY_PLACE_HISTORY_SQL: &str = "\
SELECT h.rowid AS rowid, h.place_rowid AS subject_rowid, \
h.created_at AS created_at, h.created_by AS created_by, \
h.operation AS operation, h.message AS message, \
p.name AS subject_name, c.name AS campus_name \
FROM place_history h \
LEFT JOIN place p ON p.rowid = h.place_rowid \
LEFT JOIN campus c ON c.rowid = p.campus_rowid \
WHERE (? IS NULL OR h.place_rowid = ?) \
ORDER BY h.created_at DESC, h.rowid DESC \
LIMIT ? OFFSET ?";

const QUERY_ROUTE_HISTORY_SQL: &str = "\
SELECT h.rowid AS rowid, h.route_rowid AS subject_rowid, \
h.created_at AS created_at, h.created_by AS created_by, \
h.operation AS operation, h.message AS message, \
r.name AS subject_name, c.name AS campus_name \
FROM route_history h \
LEFT JOIN route r ON r.rowid = h.route_rowid \
LEFT JOIN campus c ON c.rowid = r.campus_rowid \
WHERE (? IS NULL OR h.route_rowid = ?) \
ORDER BY h.created_at DESC, h.rowid DESC \
LIMIT ? OFFSET ?";

fn load_joined_history_entries(
    conn: &mut SqliteConnection,
    sql: &'static str,
    subject_rowid: Option<i64>,
    pagination: &Pagination,
) -> Result<Vec<models::JoinedHistoryEntry>> {
    // SQLite does not support an OFFSET without a LIMIT
    // <https://www.sqlite.org/lang_select.html>
    // A negative LIMIT means no upper bound.
    let limit = pagination
        .limit
        .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX))
        .unwrap_or(-1);
    let offset = pagination
        .offset
        .map(|offset| i64::try_from(offset).unwrap_or(i64::MAX))
        .unwrap_or(0);
    diesel::sql_query(sql)
        .bind::<Nullable<BigInt>, _>(subject_rowid)
        .bind::<Nullable<BigInt>, _>(subject_rowid)
        .bind::<BigInt, _>(limit)
        .bind::<BigInt, _>(offset)
        .load::<models::JoinedHistoryEntry>(conn)
        .map_err(from_diesel_err)
}

fn load_history_record<S>(row: models::JoinedHistoryEntry) -> Result<HistoryRecord<S>>
where
    S: HistorySubject + From<IdValue>,
{
    let models::JoinedHistoryEntry {
        rowid,
        subject_rowid,
        created_at,
        created_by,
        operation,
        message,
        subject_name,
        campus_name,
    } = row;
    let entry = HistoryEntry {
        id: rowid.into(),
        subject_id: subject_rowid.into(),
        activity: Activity {
            at: load_timestamp(created_at)?,
            by: created_by,
        },
        operation: load_history_operation(operation)?,
        message,
    };
    Ok(HistoryRecord {
        entry,
        subject_name,
        campus_name,
    })
}

fn add_place_history_entry(
    conn: &mut SqliteConnection,
    entry: &NewHistoryEntry<PlaceId>,
) -> Result<HistoryEntryId> {
    let NewHistoryEntry {
        subject_id,
        activity,
        operation,
        message,
    } = entry;
    diesel::insert_into(schema::place_history::table)
        .values(&models::NewPlaceHistoryEntry {
            place_rowid: IdValue::from(*subject_id),
            created_at: activity.at.as_millis(),
            created_by: &activity.by,
            operation: HistoryOperationPrimitive::from(*operation),
            message,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn query_place_history(
    conn: &mut SqliteConnection,
    query: &HistoryQuery<PlaceId>,
) -> Result<Vec<PlaceHistoryRecord>> {
    load_joined_history_entries(
        conn,
        QUERY_PLACE_HISTORY_SQL,
        query.subject_id.map(IdValue::from),
        &query.pagination,
    )?
    .into_iter()
    .map(load_history_record)
    .collect()
}

fn count_place_history(conn: &mut SqliteConnection, subject_id: Option<PlaceId>) -> Result<u64> {
    use schema::place_history::dsl;
    let mut query = schema::place_history::table
        .select(diesel::dsl::count_star())
        .into_boxed();
    if let Some(subject_id) = subject_id {
        query = query.filter(dsl::place_rowid.eq(IdValue::from(subject_id)));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as u64)
}

fn add_route_history_entry(
    conn: &mut SqliteConnection,
    entry: &NewHistoryEntry<RouteId>,
) -> Result<HistoryEntryId> {
    let NewHistoryEntry {
        subject_id,
        activity,
        operation,
        message,
    } = entry;
    diesel::insert_into(schema::route_history::table)
        .values(&models::NewRouteHistoryEntry {
            route_rowid: IdValue::from(*subject_id),
            created_at: activity.at.as_millis(),
            created_by: &activity.by,
            operation: HistoryOperationPrimitive::from(*operation),
            message,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn query_route_history(
    conn: &mut SqliteConnection,
    query: &HistoryQuery<RouteId>,
) -> Result<Vec<RouteHistoryRecord>> {
    load_joined_history_entries(
        conn,
        QUERY_ROUTE_HISTORY_SQL,
        query.subject_id.map(IdValue::from),
        &query.pagination,
    )?
    .into_iter()
    .map(load_history_record)
    .collect()
}

fn count_route_history(conn: &mut SqliteConnection, subject_id: Option<RouteId>) -> Result<u64> {
    use schema::route_history::dsl;
    let mut query = schema::route_history::table
        .select(diesel::dsl::count_star())
        .into_boxed();
    if let Some(subject_id) = subject_id {
        query = query.filter(dsl::route_rowid.eq(IdValue::from(subject_id)));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as u64)
}
