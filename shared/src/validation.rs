//! Validation and normalization utilities shared by the export engine
//! and the browser bindings

/// Normalize an opaque identifier for comparison
///
/// Branch and product ids arrive from the API as strings or numbers; both
/// sides of a comparison go through this first.
pub fn normalize_id(id: &str) -> &str {
    id.trim()
}

/// Replace every non-alphanumeric character with a hyphen
///
/// Used for the branch segment of export filenames, so any location name
/// ("District 7, HCMC") yields a safe filename component.
pub fn sanitize_filename_component(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
