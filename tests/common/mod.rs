use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "op, vehicle, category, plan, method, amount";

/// Writes a command script with the standard header followed by `rows`.
pub fn write_script(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Writes a script that parks `count` cars with ids starting at `first_id`.
pub fn write_park_script(first_id: u32, count: u32) -> Result<NamedTempFile, Error> {
    let rows: Vec<String> = (first_id..first_id + count)
        .map(|id| format!("park, {id}, car, standard, ,"))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    write_script(&rows)
}
