//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::TableRecord;
use crate::types::OutputFormat;

pub struct OutputWriter {
    writer: Box<dyn Write + Send>,
    format: OutputFormat,
    /// Records held back for `Json`, which is written as one array on finish.
    pending: Vec<serde_json::Value>,
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut path = dir.join(format!("tables_{timestamp}.{extension}"));
        if compress {
            path.set_extension(format!("{extension}.gz"));
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self {
            writer: wrap(file, compress),
            format: format.clone(),
            pending: Vec::new(),
            path,
        })
    }

    pub fn write_table(&mut self, record: &TableRecord) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(record)?;
                writeln!(self.writer, "{json}")?;
                self.writer.flush()?;
            }
            OutputFormat::Json => self.pending.push(serde_json::to_value(record)?),
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.writer, &self.pending)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn output_path(&self) -> &Path {
        &self.path
    }
}

fn wrap(file: File, compress: bool) -> Box<dyn Write + Send> {
    if compress {
        Box::new(BufWriter::new(GzEncoder::new(file, Compression::default())))
    } else {
        Box::new(BufWriter::new(file))
    }
}
