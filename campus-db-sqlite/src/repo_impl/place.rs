use super::{location::*, *};

impl PlaceRepo for DbReadOnly<'_> {
    fn get_place(&self, id: PlaceId) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self, campus_id: Option<CampusId>) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut(), campus_id)
    }
    fn create_place(&self, data: &PlaceData) -> Result<PlaceId> {
        create_place(&mut self.conn.borrow_mut(), data)
    }
    fn update_place(&self, id: PlaceId, data: &PlaceData) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), id, data)
    }
    fn delete_place(&self, id: PlaceId) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }
}

impl PlaceRepo for DbConnection<'_> {
    fn get_place(&self, id: PlaceId) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self, campus_id: Option<CampusId>) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut(), campus_id)
    }
    fn create_place(&self, data: &PlaceData) -> Result<PlaceId> {
        create_place(&mut self.conn.borrow_mut(), data)
    }
    fn update_place(&self, id: PlaceId, data: &PlaceData) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), id, data)
    }
    fn delete_place(&self, id: PlaceId) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }
}

fn load_place_images(conn: &mut SqliteConnection, place_rowid: i64) -> Result<Vec<String>> {
    use schema::place_image::dsl;
    schema::place_image::table
        .select(dsl::url)
        .filter(dsl::parent_rowid.eq(place_rowid))
        .order_by(dsl::pos)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_place(conn: &mut SqliteConnection, place: models::Place) -> Result<Place> {
    let models::Place {
        rowid,
        name,
        campus_rowid,
        place_type_rowid,
        location_rowid,
    } = place;
    let location = load_location(conn, location_rowid)?;
    let images = load_place_images(conn, rowid)?;
    Ok(Place {
        id: rowid.into(),
        name,
        campus_id: campus_rowid.into(),
        place_type_id: place_type_rowid.map(Into::into),
        location,
        images,
    })
}

fn get_place_row(conn: &mut SqliteConnection, id: PlaceId) -> Result<models::Place> {
    schema::place::table
        .find(IdValue::from(id))
        .first(conn)
        .map_err(from_diesel_err)
}

fn get_place(conn: &mut SqliteConnection, id: PlaceId) -> Result<Place> {
    let place = get_place_row(conn, id)?;
    load_place(conn, place)
}

fn all_places(conn: &mut SqliteConnection, campus_id: Option<CampusId>) -> Result<Vec<Place>> {
    use schema::place::dsl;
    let mut query = schema::place::table.order_by(dsl::name).into_boxed();
    if let Some(campus_id) = campus_id {
        query = query.filter(dsl::campus_rowid.eq(IdValue::from(campus_id)));
    }
    let rows = query
        .load::<models::Place>(conn)
        .map_err(from_diesel_err)?;
    let mut places = Vec::with_capacity(rows.len());
    for row in rows {
        places.push(load_place(conn, row)?);
    }
    Ok(places)
}

fn insert_place_images(conn: &mut SqliteConnection, place_rowid: i64, images: &[String]) -> Result<()> {
    let insertable_images: Vec<_> = images
        .iter()
        .enumerate()
        .map(|(pos, url)| models::NewPlaceImage {
            parent_rowid: place_rowid,
            pos: pos as i32,
            url: url.as_str(),
        })
        .collect();
    diesel::insert_into(schema::place_image::table)
        .values(&insertable_images)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_place_images(conn: &mut SqliteConnection, place_rowid: i64) -> Result<()> {
    use schema::place_image::dsl;
    diesel::delete(schema::place_image::table.filter(dsl::parent_rowid.eq(place_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_place(conn: &mut SqliteConnection, data: &PlaceData) -> Result<PlaceId> {
    let PlaceData {
        name,
        campus_id,
        place_type_id,
        geometry,
        description,
        images,
    } = data;
    let location_rowid = insert_location(conn, geometry, description.as_deref())?;
    diesel::insert_into(schema::place::table)
        .values(&models::NewPlace {
            name,
            campus_rowid: IdValue::from(*campus_id),
            place_type_rowid: place_type_id.map(IdValue::from),
            location_rowid,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = inserted_rowid(conn)?;
    insert_place_images(conn, rowid, images)?;
    Ok(rowid.into())
}

fn update_place(conn: &mut SqliteConnection, id: PlaceId, data: &PlaceData) -> Result<()> {
    let PlaceData {
        name,
        campus_id,
        place_type_id,
        geometry,
        description,
        images,
    } = data;
    let models::Place {
        rowid,
        location_rowid,
        ..
    } = get_place_row(conn, id)?;
    update_location(conn, location_rowid, geometry, description.as_deref())?;
    use schema::place::dsl;
    diesel::update(schema::place::table.filter(dsl::rowid.eq(rowid)))
        .set(&models::NewPlace {
            name,
            campus_rowid: IdValue::from(*campus_id),
            place_type_rowid: place_type_id.map(IdValue::from),
            location_rowid,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    delete_place_images(conn, rowid)?;
    insert_place_images(conn, rowid, images)?;
    Ok(())
}

fn delete_place(conn: &mut SqliteConnection, id: PlaceId) -> Result<()> {
    let models::Place {
        rowid,
        location_rowid,
        ..
    } = get_place_row(conn, id)?;
    let route_count = {
        use schema::route_place::dsl;
        schema::route_place::table
            .select(diesel::dsl::count(dsl::route_rowid))
            .filter(dsl::place_rowid.eq(rowid))
            .first::<i64>(conn)
            .map_err(from_diesel_err)?
    };
    if route_count > 0 {
        log::info!("Place {id} is still referenced by {route_count} routes");
        return Err(repo::Error::Integrity(
            "El lugar está asignado a una o más rutas".to_string(),
        ));
    }
    delete_place_images(conn, rowid)?;
    {
        use schema::place::dsl;
        diesel::delete(schema::place::table.filter(dsl::rowid.eq(rowid)))
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    delete_location(conn, location_rowid)
}
