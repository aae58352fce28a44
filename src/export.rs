use crate::analysis::Analysis;
use color_eyre::eyre::Result;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render the analysis as pretty printed JSON
pub fn analysis_to_json(analysis: &Analysis) -> Result<String> {
    let json_string = serde_json::to_string_pretty(analysis)?;
    Ok(json_string)
}

/// Save the analysis as JSON to `file_path`, replacing whatever was there
pub fn save_analysis(analysis: &Analysis, file_path: &Path) -> Result<()> {
    let json_string = analysis_to_json(analysis)?;

    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", json_string)?;
    writer.flush()?;

    info!("Analysis saved as {}", file_path.display());
    Ok(())
}
