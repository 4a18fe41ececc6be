use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::log_info;

pub trait Output {
    fn write_to_file(&self, output_file: &str) -> Result<()>;
}

#[derive(Serialize)]
pub struct ReverseNameEntry {
    pub input: String,
    pub expanded: String,
    pub prefix_length: u8,
    pub reverse_name: String,
}

#[derive(Serialize)]
pub struct ReverseNameOutput {
    pub results: Vec<ReverseNameEntry>,
}

impl Output for ReverseNameOutput {
    fn write_to_file(&self, output_file: &str) -> Result<()> {
        write_json(&self, output_file)
    }
}

fn write_json<T: Serialize>(data: &T, output_file: &str) -> Result<()> {
    let output_file = if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        output_file.to_string()
    } else {
        format!("{output_file}.json")
    };

    let file = File::create(&output_file)?;
    serde_json::to_writer_pretty(file, data)?;

    log_info!(format!("JSON output written to: {}", output_file));

    Ok(())
}

impl ReverseNameOutput {
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: ReverseNameEntry) {
        self.results.push(result);
    }
}
