use super::*;

impl CampusRepo for DbReadOnly<'_> {
    fn create_campus(&self, name: &str) -> Result<CampusId> {
        create_campus(&mut self.conn.borrow_mut(), name)
    }
    fn get_campus(&self, id: CampusId) -> Result<Campus> {
        get_campus(&mut self.conn.borrow_mut(), id)
    }
    fn all_campuses(&self) -> Result<Vec<Campus>> {
        all_campuses(&mut self.conn.borrow_mut())
    }
}

impl CampusRepo for DbConnection<'_> {
    fn create_campus(&self, name: &str) -> Result<CampusId> {
        create_campus(&mut self.conn.borrow_mut(), name)
    }
    fn get_campus(&self, id: CampusId) -> Result<Campus> {
        get_campus(&mut self.conn.borrow_mut(), id)
    }
    fn all_campuses(&self) -> Result<Vec<Campus>> {
        all_campuses(&mut self.conn.borrow_mut())
    }
}

fn create_campus(conn: &mut SqliteConnection, name: &str) -> Result<CampusId> {
    diesel::insert_into(schema::campus::table)
        .values(&models::NewCampus { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn get_campus(conn: &mut SqliteConnection, id: CampusId) -> Result<Campus> {
    let models::Campus { rowid, name } = schema::campus::table
        .find(IdValue::from(id))
        .first(conn)
        .map_err(from_diesel_err)?;
    Ok(Campus {
        id: rowid.into(),
        name,
    })
}

fn all_campuses(conn: &mut SqliteConnection) -> Result<Vec<Campus>> {
    use schema::campus::dsl;
    Ok(schema::campus::table
        .order_by(dsl::name)
        .load::<models::Campus>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::Campus { rowid, name }| Campus {
            id: rowid.into(),
            name,
        })
        .collect())
}
