//! Result table CSV export.
//!
//! Writes `Time,SwapValue,Delta` with one data row per grid point, no
//! index column, default decimal formatting. The file is overwritten on
//! every run.

use std::path::Path;

use abs_pricing::ValuationResult;

use crate::Result;

/// Write the result table to a CSV file
pub fn write_csv(result: &ValuationResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["Time", "SwapValue", "Delta"])?;
    for point in result.points() {
        wtr.write_record([
            point.time.to_string(),
            point.swap_value.to_string(),
            point.delta.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
