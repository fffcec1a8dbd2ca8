use super::{location::*, *};

impl RouteRepo for DbReadOnly<'_> {
    fn get_route(&self, id: RouteId) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn all_routes(&self, campus_id: Option<CampusId>) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut(), campus_id)
    }
    fn create_route(&self, data: &RouteData) -> Result<RouteId> {
        create_route(&mut self.conn.borrow_mut(), data)
    }
    fn update_route(&self, id: RouteId, data: &RouteData) -> Result<()> {
        update_route(&mut self.conn.borrow_mut(), id, data)
    }
    fn delete_route(&self, id: RouteId) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }
}

impl RouteRepo for DbConnection<'_> {
    fn get_route(&self, id: RouteId) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn all_routes(&self, campus_id: Option<CampusId>) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut(), campus_id)
    }
    fn create_route(&self, data: &RouteData) -> Result<RouteId> {
        create_route(&mut self.conn.borrow_mut(), data)
    }
    fn update_route(&self, id: RouteId, data: &RouteData) -> Result<()> {
        update_route(&mut self.conn.borrow_mut(), id, data)
    }
    fn delete_route(&self, id: RouteId) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }
}

fn load_route_place_ids(conn: &mut SqliteConnection, route_rowid: i64) -> Result<Vec<PlaceId>> {
    use schema::route_place::dsl;
    Ok(schema::route_place::table
        .select(dsl::place_rowid)
        .filter(dsl::route_rowid.eq(route_rowid))
        .order_by(dsl::place_rowid)
        .load::<i64>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn load_route(conn: &mut SqliteConnection, route: models::Route) -> Result<Route> {
    let models::Route {
        rowid,
        name,
        campus_rowid,
        route_type_rowid,
        location_rowid,
    } = route;
    let location = load_location(conn, location_rowid)?;
    let place_ids = load_route_place_ids(conn, rowid)?;
    Ok(Route {
        id: rowid.into(),
        name,
        campus_id: campus_rowid.into(),
        route_type_id: route_type_rowid.map(Into::into),
        location,
        place_ids,
    })
}

fn get_route_row(conn: &mut SqliteConnection, id: RouteId) -> Result<models::Route> {
    schema::route::table
        .find(IdValue::from(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn get_route(conn: &mut SqliteConnection, id: RouteId) -> Result<Route> {
    let route = get_route_row(conn, id)?;
    load_route(conn, route)
}

fn all_routes(conn: &mut SqliteConnection, campus_id: Option<CampusId>) -> Result<Vec<Route>> {
    use schema::route::dsl;
    let mut query = schema::route::table.order_by(dsl::name).into_boxed();
    if let Some(campus_id) = campus_id {
        query = query.filter(dsl::campus_rowid.eq(IdValue::from(campus_id)));
    }
    let rows = query
        .load::<models::Route>(conn)
        .map_err(from_diesel_err)?;
    let mut routes = Vec::with_capacity(rows.len());
    for row in rows {
        routes.push(load_route(conn, row)?);
    }
    Ok(routes)
}

fn insert_route_places(
    conn: &mut SqliteConnection,
    route_rowid: i64,
    place_ids: &[PlaceId],
) -> Result<()> {
    let insertable_places: Vec<_> = place_ids
        .iter()
        .map(|id| models::NewRoutePlace {
            route_rowid,
            place_rowid: IdValue::from(*id),
        })
        .collect();
    diesel::insert_into(schema::route_place::table)
        .values(&insertable_places)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_route_places(conn: &mut SqliteConnection, route_rowid: i64) -> Result<()> {
    use schema::route_place::dsl;
    diesel::delete(schema::route_place::table.filter(dsl::route_rowid.eq(route_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_route(conn: &mut SqliteConnection, data: &RouteData) -> Result<RouteId> {
    let RouteData {
        name,
        campus_id,
        route_type_id,
        geometry,
        description,
        place_ids,
    } = data;
    let location_rowid = insert_location(conn, geometry, description.as_deref())?;
    diesel::insert_into(schema::route::table)
        .values(&models::NewRoute {
            name,
            campus_rowid: IdValue::from(*campus_id),
            route_type_rowid: route_type_id.map(IdValue::from),
            location_rowid,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = inserted_rowid(conn)?;
    insert_route_places(conn, rowid, place_ids)?;
    Ok(rowid.into())
}

fn update_route(conn: &mut SqliteConnection, id: RouteId, data: &RouteData) -> Result<()> {
    let RouteData {
        name,
        campus_id,
        route_type_id,
        geometry,
        description,
        place_ids,
    } = data;
    let models::Route {
        rowid,
        location_rowid,
        ..
    } = get_route_row(conn, id)?;
    update_location(conn, location_rowid, geometry, description.as_deref())?;
    use schema::route::dsl;
    diesel::update(schema::route::table.filter(dsl::rowid.eq(rowid)))
        .set(&models::NewRoute {
            name,
            campus_rowid: IdValue::from(*campus_id),
            route_type_rowid: route_type_id.map(IdValue::from),
            location_rowid,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    delete_route_places(conn, rowid)?;
    insert_route_places(conn, rowid, place_ids)?;
    Ok(())
}

fn delete_route(conn: &mut SqliteConnection, id: RouteId) -> Result<()> {
    let models::Route {
        rowid,
        location_rowid,
        ..
    } = get_route_row(conn, id)?;
    delete_route_places(conn, rowid)?;
    {
        use schema::route::dsl;
        diesel::delete(schema::route::table.filter(dsl::rowid.eq(rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    delete_location(conn, location_rowid)
}
