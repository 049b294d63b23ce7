/// Final review report
///
/// One record per non-placeholder unit, in page-then-slot order. Printed to
/// stdout when the session ends and optionally written as JSON lines.
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use super::session::ReviewSession;
use crate::dataset::Label;
use crate::error::{Result, ReviewError};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    pub image_path: PathBuf,
    /// The classifier's prediction
    pub predicted: Label,
    /// The label after review
    pub label: Label,
    pub corrected: bool,
}

/// Aggregate counts over a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub corrected: usize,
    /// Records whose final label differs from the prediction
    pub changed: usize,
    pub clear: usize,
    pub clouds: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    records: Vec<ReportRecord>,
}

impl Report {
    pub fn collect(session: &ReviewSession) -> Self {
        let records = session
            .pages()
            .iter()
            .flat_map(|page| page.real_units())
            .filter_map(|unit| {
                Some(ReportRecord {
                    image_path: unit.image()?.to_path_buf(),
                    predicted: unit.predicted()?,
                    label: unit.label()?,
                    corrected: unit.is_corrected(),
                })
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn summary(&self) -> Summary {
        self.records().iter().fold(Summary::default(), |mut s, r| {
            s.total += 1;
            s.corrected += usize::from(r.corrected);
            s.changed += usize::from(r.label != r.predicted);
            match r.label {
                Label::Clear => s.clear += 1,
                Label::Clouds => s.clouds += 1,
            }
            s
        })
    }

    /// One human-readable line per record
    pub fn write_console<W: Write>(&self, mut out: W) -> io::Result<()> {
        for r in self.records() {
            writeln!(
                out,
                "Image Path: {}  Pred: {} ({})  Corrected: {}",
                r.image_path.display(),
                r.label.index(),
                r.label,
                r.corrected
            )?;
        }
        out.flush()
    }

    /// One JSON object per record
    pub fn write_json_lines<W: Write>(&self, mut out: W) -> Result<()> {
        for r in self.records() {
            serde_json::to_writer(&mut out, r)?;
            out.write_all(b"\n").map_err(|source| ReviewError::Io {
                path: PathBuf::from("<report>"),
                source,
            })?;
        }
        Ok(())
    }

    pub fn save_json_lines(&self, path: &Path) -> Result<()> {
        let io_err = |source| ReviewError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
        self.write_json_lines(&mut out)?;
        out.flush().map_err(io_err)?;

        info!(path = %path.display(), records = self.records().len(), "wrote report file");
        Ok(())
    }

    pub fn log_summary(&self) {
        let s = self.summary();
        info!(
            total = s.total,
            corrected = s.corrected,
            changed = s.changed,
            clear = s.clear,
            clouds = s.clouds,
            "review finished"
        );
    }
}
