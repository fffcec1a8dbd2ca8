///////////////////////////////////////////////////////////////////////
// Campuses and catalogs
///////////////////////////////////////////////////////////////////////

table! {
    campus (rowid) {
        rowid -> BigInt,
        name -> Text,
    }
}

table! {
    place_type (rowid) {
        rowid -> BigInt,
        name -> Text,
    }
}

table! {
    route_type (rowid) {
        rowid -> BigInt,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    geographic_location (rowid) {
        rowid -> BigInt,
        geometry -> Text,
        description -> Nullable<Text>,
        state -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    place (rowid) {
        rowid -> BigInt,
        name -> Text,
        campus_rowid -> BigInt,
        place_type_rowid -> Nullable<BigInt>,
        location_rowid -> BigInt,
    }
}

table! {
    place_image (parent_rowid, pos) {
        parent_rowid -> BigInt,
        pos -> Integer,
        url -> Text,
    }
}

joinable!(place -> campus (campus_rowid));
joinable!(place -> geographic_location (location_rowid));
joinable!(place_image -> place (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Routes
///////////////////////////////////////////////////////////////////////

table! {
    route (rowid) {
        rowid -> BigInt,
        name -> Text,
        campus_rowid -> BigInt,
        route_type_rowid -> Nullable<BigInt>,
        location_rowid -> BigInt,
    }
}

table! {
    route_place (route_rowid, place_rowid) {
        route_rowid -> BigInt,
        place_rowid -> BigInt,
    }
}

joinable!(route -> campus (campus_rowid));
joinable!(route -> geographic_location (location_rowid));
joinable!(route_place -> route (route_rowid));
joinable!(route_place -> place (place_rowid));

///////////////////////////////////////////////////////////////////////
// History
///////////////////////////////////////////////////////////////////////

table! {
    place_history (rowid) {
        rowid -> BigInt,
        place_rowid -> BigInt,
        created_at -> BigInt,
        created_by -> Text,
        operation -> SmallInt,
        message -> Text,
    }
}

table! {
    route_history (rowid) {
        rowid -> BigInt,
        route_rowid -> BigInt,
        created_at -> BigInt,
        created_by -> Text,
        operation -> SmallInt,
        message -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    campus,
    place_type,
    route_type,
    geographic_location,
    place,
    place_image,
    route,
    route_place,
    place_history,
    route_history,
);
