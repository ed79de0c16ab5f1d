//! Station detection from input file names.

/// First known station code contained (case-insensitively) in any of the
/// file names.
pub fn detect_station(names: &[&str], known: &[String]) -> Option<String> {
    let combined = names.join(" ").to_uppercase();
    known
        .iter()
        .find(|s| !s.is_empty() && combined.contains(&s.to_uppercase()))
        .cloned()
}

/// Station for the report: explicit value, else detected, else the
/// configured default (possibly empty).
pub fn resolve_station(
    explicit: Option<&str>,
    names: &[&str],
    known: &[String],
    default_station: &str,
) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| detect_station(names, known))
        .unwrap_or_else(|| default_station.to_string())
}
