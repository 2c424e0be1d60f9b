// src/data_input/csv_loader.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use ndarray::Array1;
use tracing::{debug, info};

use crate::constants::{
    COLUMN_HEADING, COLUMN_X, COLUMN_Y, COLUMN_Z, SHIP_CSV_FILE, UAS_CSV_FILE,
};
use crate::data_input::trajectory::{Trajectory, TrajectoryKind};
use crate::error::{Error, Result};

/// Header names of the position and heading columns.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryColumns<'a> {
    pub x: &'a str,
    pub y: &'a str,
    pub z: &'a str,
    pub heading: &'a str,
}

impl Default for TrajectoryColumns<'static> {
    fn default() -> Self {
        TrajectoryColumns {
            x: COLUMN_X,
            y: COLUMN_Y,
            z: COLUMN_Z,
            heading: COLUMN_HEADING,
        }
    }
}

/// Reads one trajectory CSV.
///
/// Every column in `columns` is essential; missing ones are reported together.
pub fn load_trajectory(
    input_file_path: &Path,
    columns: &TrajectoryColumns,
    kind: TrajectoryKind,
) -> Result<Trajectory> {
    let file = File::open(input_file_path).map_err(|e| Error::io(input_file_path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    // --- Header Index Mapping ---
    let target_headers = [columns.x, columns.y, columns.z, columns.heading];
    let header_record = reader
        .headers()
        .map_err(|e| Error::csv(input_file_path, e))?
        .clone();
    let header_indices: Vec<Option<usize>> = target_headers
        .iter()
        .map(|&target| header_record.iter().position(|h| h == target))
        .collect();

    for (name, index) in target_headers.iter().zip(&header_indices) {
        debug!(
            "  '{}': {}",
            name,
            if index.is_some() { "Found" } else { "Not Found" }
        );
    }

    let missing: Vec<String> = target_headers
        .iter()
        .zip(&header_indices)
        .filter(|(_, index)| index.is_none())
        .map(|(name, _)| format!("'{name}'"))
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns {
            path: input_file_path.to_path_buf(),
            columns: missing.join(", "),
        });
    }
    let indices: Vec<usize> = header_indices.into_iter().flatten().collect();

    // --- Data Reading ---
    let mut values: [Vec<f64>; 4] = Default::default();
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| Error::csv(input_file_path, e))?;
        for (column, &csv_idx) in indices.iter().enumerate() {
            let raw = record.get(csv_idx).unwrap_or("");
            let value = raw.parse::<f64>().map_err(|_| Error::InvalidNumber {
                column: target_headers[column].to_string(),
                row: row_index + 1,
                value: raw.to_string(),
            })?;
            values[column].push(value);
        }
    }

    if values[0].is_empty() {
        return Err(Error::EmptyTrajectory(input_file_path.to_path_buf()));
    }

    let [x, y, z, heading] = values;
    info!(
        "Read {} {:?} samples from '{}'",
        x.len(),
        kind,
        input_file_path.display()
    );

    Ok(Trajectory::from_logged(
        Array1::from(x),
        Array1::from(y),
        Array1::from(z),
        Array1::from(heading),
        kind,
    ))
}

/// Loads the vehicle and ship trajectories stored side by side in `directory`.
pub fn load_landing_pair(directory: &Path) -> Result<(Trajectory, Trajectory)> {
    let columns = TrajectoryColumns::default();
    let uas = load_trajectory(
        &directory.join(UAS_CSV_FILE),
        &columns,
        TrajectoryKind::Vehicle,
    )?;
    let ship = load_trajectory(
        &directory.join(SHIP_CSV_FILE),
        &columns,
        TrajectoryKind::Ship,
    )?;
    Ok((uas, ship))
}


// src/data_input/csv_loader.rs
