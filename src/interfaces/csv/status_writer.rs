use crate::domain::lot::LotStatus;
use crate::domain::vehicle::VehicleCategory;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Serialize)]
struct StatusRow {
    category: VehicleCategory,
    occupied: usize,
    total: usize,
}

/// Writes occupancy reports.
///
/// CSV reports carry a `category,occupied,total` header and one row per
/// category. JSON reports are a single object keyed by category.
pub struct StatusWriter<W: Write> {
    inner: W,
    format: ReportFormat,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(inner: W, format: ReportFormat) -> Self {
        Self { inner, format }
    }

    pub fn write_status(&mut self, status: &LotStatus) -> Result<()> {
        match self.format {
            ReportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.inner);
                for (category, occupancy) in status.iter() {
                    writer.serialize(StatusRow {
                        category,
                        occupied: occupancy.occupied,
                        total: occupancy.total,
                    })?;
                }
                writer.flush()?;
            }
            ReportFormat::Json => {
                serde_json::to_writer(&mut self.inner, status)?;
                writeln!(self.inner)?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
