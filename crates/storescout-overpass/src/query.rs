//! Overpass QL query rendering.

use std::fmt::Write as _;

use storescout_core::Location;

/// Render a places query: one node and one way filter per shop category,
/// within `radius_meters` of `origin`. Way centres are requested so polygon
/// shops still yield a point location.
pub(crate) fn places_query(origin: Location, radius_meters: u32, categories: &[&str]) -> String {
    let mut filters = String::new();
    for category in categories {
        let _ = write!(
            filters,
            "node[\"shop\"=\"{category}\"](around:{radius_meters},{lat},{lng}); \
             way[\"shop\"=\"{category}\"](around:{radius_meters},{lat},{lng}); ",
            lat = origin.lat,
            lng = origin.lng,
        );
    }
    format!("[out:json][timeout:25];({filters});out body center; >; out skel qt;")
}

/// Render a school-count query: `amenity=school` nodes and ways around a point.
pub(crate) fn schools_query(origin: Location, radius_meters: u32) -> String {
    format!(
        "[out:json][timeout:25];\
         (node[\"amenity\"=\"school\"](around:{radius_meters},{lat},{lng}); \
          way[\"amenity\"=\"school\"](around:{radius_meters},{lat},{lng}););\
         out body;",
        lat = origin.lat,
        lng = origin.lng,
    )
}
