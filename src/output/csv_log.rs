//! Append-only CSV sample log
//!
//! One file per run, created (or truncated) on open. The header row is
//! `time,x,y,vx,vy,distance,speed`, followed by one row per sample.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::simulation::sampler::{Sample, SampleSink};

pub const CSV_HEADER: &str = "time,x,y,vx,vy,distance,speed";

pub struct CsvSink<W: Write> {
    out: W,
    rows: usize,
}

impl CsvSink<BufWriter<File>> {
    /// Create or truncate `path` and write the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(mut out: W) -> Result<Self> {
        writeln!(out, "{CSV_HEADER}").context("failed to write CSV header")?;
        Ok(Self { out, rows: 0 })
    }

    /// Number of data rows written so far
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for CsvSink<W> {
    fn record(&mut self, s: &Sample) -> Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{},{},{}",
            s.t, s.x.x, s.x.y, s.v.x, s.v.y, s.distance, s.speed
        )
        .context("failed to write CSV row")?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush().context("failed to flush CSV log")
    }
}
