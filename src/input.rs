//! Building the input set from the command line and JSON files.

use crate::models::PrefixSet;
use std::error::Error;
use std::path::Path;

/// Read a JSON array of prefixes (or bare addresses) into a set.
///
/// # Arguments
/// * `file` - Path to the JSON file
///
/// # Returns
/// * `Ok(PrefixSet)` - Union of all listed prefixes
/// * `Err` - If the file is missing or an entry does not parse, with its JSON path
pub fn read_prefix_file(file: &Path) -> Result<PrefixSet, Box<dyn Error>> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading prefix file {}: {e}", file.display()))?;
    log::info!("Reading prefixes from {}", file.display());

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let set: PrefixSet = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing prefix file {}: path={} error={}",
            file.display(),
            e.path(),
            e
        )
    })?;
    Ok(set)
}

/// `union(include, file) - union(exclude)`.
pub fn build_set<S: AsRef<str>>(
    include: &[S],
    exclude: &[S],
    file: Option<&Path>,
) -> Result<PrefixSet, Box<dyn Error>> {
    let mut set = PrefixSet::parse_list(include)?;
    if let Some(file) = file {
        set = set.union(&read_prefix_file(file)?);
    }
    let excluded = PrefixSet::parse_list(exclude)?;
    log::debug!(
        "input: {} block(s) minus {} block(s)",
        set.len(),
        excluded.len()
    );
    Ok(set.difference(&excluded))
}
