use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::api::scenario_dto::ScenarioDto;
use crate::domain::context::WeatherCondition;
use crate::domain::generator::Scenario;
use crate::error::Result;

/// Serializes one scenario to `path` as pretty-printed JSON.
///
/// The document is written to a sibling temp file and renamed into place, so a
/// serialization or I/O failure never leaves a partially written scenario at
/// the destination path.
pub fn export_scenario(scenario: &Scenario, path: &Path, scenario_id: u32, weather: WeatherCondition) -> Result<()> {
    let dto = ScenarioDto::from_scenario(scenario, scenario_id, weather);

    let tmp_path = path.with_extension("json.tmp");

    let write_result = (|| -> Result<()> {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &dto)?;
        writer.flush()?;
        Ok(())
    })();

    if let Err(e) = write_result {
        // Leave nothing behind; the destination path was never touched.
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path)?;

    log::debug!("Scenario {} exported to '{}'.", scenario_id, path.display());
    Ok(())
}
