use super::*;

impl CatalogRepo for DbReadOnly<'_> {
    fn create_place_type(&self, name: &str) -> Result<PlaceTypeId> {
        create_place_type(&mut self.conn.borrow_mut(), name)
    }
    fn all_place_types(&self) -> Result<Vec<PlaceType>> {
        all_place_types(&mut self.conn.borrow_mut())
    }
    fn create_route_type(&self, name: &str) -> Result<RouteTypeId> {
        create_route_type(&mut self.conn.borrow_mut(), name)
    }
    fn all_route_types(&self) -> Result<Vec<RouteType>> {
        all_route_types(&mut self.conn.borrow_mut())
    }
}

impl CatalogRepo for DbConnection<'_> {
    fn create_place_type(&self, name: &str) -> Result<PlaceTypeId> {
        create_place_type(&mut self.conn.borrow_mut(), name)
    }
    fn all_place_types(&self) -> Result<Vec<PlaceType>> {
        all_place_types(&mut self.conn.borrow_mut())
    }
    fn create_route_type(&self, name: &str) -> Result<RouteTypeId> {
        create_route_type(&mut self.conn.borrow_mut(), name)
    }
    fn all_route_types(&self) -> Result<Vec<RouteType>> {
        all_route_types(&mut self.conn.borrow_mut())
    }
}

fn create_place_type(conn: &mut SqliteConnection, name: &str) -> Result<PlaceTypeId> {
    diesel::insert_into(schema::place_type::table)
        .values(&models::NewPlaceType { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn all_place_types(conn: &mut SqliteConnection) -> Result<Vec<PlaceType>> {
    use schema::place_type::dsl;
    Ok(schema::place_type::table
        .order_by(dsl::name)
        .load::<models::CatalogEntry>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::CatalogEntry { rowid, name }| PlaceType {
            id: rowid.into(),
            name,
        })
        .collect())
}

fn create_route_type(conn: &mut SqliteConnection, name: &str) -> Result<RouteTypeId> {
    diesel::insert_into(schema::route_type::table)
        .values(&models::NewRouteType { name })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(inserted_rowid(conn)?.into())
}

fn all_route_types(conn: &mut SqliteConnection) -> Result<Vec<RouteType>> {
    use schema::route_type::dsl;
    Ok(schema::route_type::table
        .order_by(dsl::name)
        .load::<models::CatalogEntry>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::CatalogEntry { rowid, name }| RouteType {
            id: rowid.into(),
            name,
        })
        .collect())
}
