use super::*;

impl LocationRepo for DbReadOnly<'_> {
    fn get_approval_state(&self, id: LocationId) -> Result<ApprovalState> {
        get_approval_state(&mut self.conn.borrow_mut(), id)
    }
    fn change_approval_state(&self, id: LocationId, state: ApprovalState) -> Result<usize> {
        change_approval_state(&mut self.conn.borrow_mut(), id, state)
    }
}

impl LocationRepo for DbConnection<'_> {
    fn get_approval_state(&self, id: LocationId) -> Result<ApprovalState> {
        get_approval_state(&mut self.conn.borrow_mut(), id)
    }
    fn change_approval_state(&self, id: LocationId, state: ApprovalState) -> Result<usize> {
        change_approval_state(&mut self.conn.borrow_mut(), id, state)
    }
}

fn get_approval_state(conn: &mut SqliteConnection, id: LocationId) -> Result<ApprovalState> {
    use schema::geographic_location::dsl;
    let state = schema::geographic_location::table
        .select(dsl::state)
        .filter(dsl::rowid.eq(IdValue::from(id)))
        .first::<i16>(conn)
        .map_err(from_diesel_err)?;
    load_approval_state(state)
}

fn change_approval_state(
    conn: &mut SqliteConnection,
    id: LocationId,
    state: ApprovalState,
) -> Result<usize> {
    use schema::geographic_location::dsl;
    diesel::update(schema::geographic_location::table.filter(dsl::rowid.eq(IdValue::from(id))))
        .set(dsl::state.eq(ApprovalStatePrimitive::from(state)))
        .execute(conn)
        .map_err(from_diesel_err)
}

pub(super) fn load_location(conn: &mut SqliteConnection, rowid: i64) -> Result<GeographicLocation> {
    let models::GeographicLocation {
        rowid,
        geometry,
        description,
        state,
    } = schema::geographic_location::table
        .find(rowid)
        .first(conn)
        .map_err(|err| {
            // This should never happen
            log::warn!("Referential integrity violation: Location {rowid} not found");
            from_diesel_err(err)
        })?;
    Ok(GeographicLocation {
        id: rowid.into(),
        geometry: geometry.into(),
        description,
        state: load_approval_state(state)?,
    })
}

pub(super) fn insert_location(
    conn: &mut SqliteConnection,
    geometry: &GeoJson,
    description: Option<&str>,
) -> Result<i64> {
    diesel::insert_into(schema::geographic_location::table)
        .values(&models::NewGeographicLocation {
            geometry: geometry.as_str(),
            description,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    inserted_rowid(conn)
}

// Updates the geometry and the description, but not the approval state
pub(super) fn update_location(
    conn: &mut SqliteConnection,
    rowid: i64,
    geometry: &GeoJson,
    description: Option<&str>,
) -> Result<()> {
    use schema::geographic_location::dsl;
    let count = diesel::update(schema::geographic_location::table.filter(dsl::rowid.eq(rowid)))
        .set(&models::NewGeographicLocation {
            geometry: geometry.as_str(),
            description,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

pub(super) fn delete_location(conn: &mut SqliteConnection, rowid: i64) -> Result<()> {
    use schema::geographic_location::dsl;
    diesel::delete(schema::geographic_location::table.filter(dsl::rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}
