#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;
use diesel::sql_types::{BigInt, Nullable, SmallInt, Text};

#[derive(Queryable)]
pub struct Campus {
    pub rowid: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = campus)]
pub struct NewCampus<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct CatalogEntry {
    pub rowid: i64,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = place_type)]
pub struct NewPlaceType<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = route_type)]
pub struct NewRouteType<'a> {
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct GeographicLocation {
    pub rowid: i64,
    pub geometry: String,
    pub description: Option<String>,
    pub state: i16,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = geographic_location)]
#[diesel(treat_none_as_null = true)]
pub struct NewGeographicLocation<'a> {
    pub geometry: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct Place {
    pub rowid: i64,
    pub name: String,
    pub campus_rowid: i64,
    pub place_type_rowid: Option<i64>,
    pub location_rowid: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = place)]
#[diesel(treat_none_as_null = true)]
pub struct NewPlace<'a> {
    pub name: &'a str,
    pub campus_rowid: i64,
    pub place_type_rowid: Option<i64>,
    pub location_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = place_image)]
pub struct NewPlaceImage<'a> {
    pub parent_rowid: i64,
    pub pos: i32,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct Route {
    pub rowid: i64,
    pub name: String,
    pub campus_rowid: i64,
    pub route_type_rowid: Option<i64>,
    pub location_rowid: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = route)]
#[diesel(treat_none_as_null = true)]
pub struct NewRoute<'a> {
    pub name: &'a str,
    pub campus_rowid: i64,
    pub route_type_rowid: Option<i64>,
    pub location_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = route_place)]
pub struct NewRoutePlace {
    pub route_rowid: i64,
    pub place_rowid: i64,
}

#[derive(Insertable)]
#[diesel(table_name = place_history)]
pub struct NewPlaceHistoryEntry<'a> {
    pub place_rowid: i64,
    pub created_at: i64,
    pub created_by: &'a str,
    pub operation: i16,
    pub message: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = route_history)]
pub struct NewRouteHistoryEntry<'a> {
    pub route_rowid: i64,
    pub created_at: i64,
    pub created_by: &'a str,
    pub operation: i16,
    pub message: &'a str,
}

/// A history entry left-joined with the current names of
/// its subject and campus.
#[derive(QueryableByName)]
pub struct JoinedHistoryEntry {
    #[diesel(sql_type = BigInt)]
    pub rowid: i64,
    #[diesel(sql_type = BigInt)]
    pub subject_rowid: i64,
    #[diesel(sql_type = BigInt)]
    pub created_at: i64,
    #[diesel(sql_type = Text)]
    pub created_by: String,
    #[diesel(sql_type = SmallInt)]
    pub operation: i16,
    #[diesel(sql_type = Text)]
    pub message: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub subject_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub campus_name: Option<String>,
}
