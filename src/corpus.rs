//! Corpus driver boundary: record files in, verdicts and worst ratios out
//!
//! The driver consumes already-materialized `.jsonl` record files
//! (archive reconstitution lives with the corpus producers). Lines are
//! verified in parallel batches; a malformed record is surfaced and
//! skipped, never fatal to the run, while I/O and internal errors abort.

use crate::conjectures::{verify_and_tag, RatioAccumulator};
use crate::errors::{InvariantError, Result};
use crate::types::ConjectureRecord;
use rayon::prelude::*;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

/// All `.jsonl` files under `root`, recursively, in sorted order
pub fn discover_record_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "jsonl") {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Lazy line-by-line record iterator over one `.jsonl` file.
///
/// Blank lines and lines starting with `#` are skipped. Decode failures
/// come back as `MalformedRecord` items naming the file and line.
pub struct RecordStream {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl RecordStream {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl Iterator for RecordStream {
    type Item = Result<ConjectureRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            if skip_line(&line) {
                continue;
            }
            return Some(decode_record(&line, &self.path, self.line_no));
        }
    }
}

/// Lazy graph iterator over a graph6 file, one graph per non-comment line
pub struct Graph6Stream {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl Graph6Stream {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl Iterator for Graph6Stream {
    type Item = Result<crate::graph::Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            if skip_line(&line) {
                continue;
            }
            return Some(crate::codec::decode_graph6(&line).map_err(|e| {
                InvariantError::malformed(format!(
                    "{}:{}: {e}",
                    self.path.display(),
                    self.line_no
                ))
            }));
        }
    }
}

fn skip_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn decode_record(line: &str, path: &Path, line_no: usize) -> Result<ConjectureRecord> {
    serde_json::from_str(line).map_err(|e| {
        InvariantError::malformed(format!("{}:{line_no}: {e}", path.display()))
    })
}

/// Aggregate result of one corpus run
#[derive(Debug, Clone, Default)]
pub struct CorpusSummary {
    /// Records successfully decoded and verified
    pub records: usize,
    /// Records with at least one violated clause, messages attached
    pub failing: Vec<ConjectureRecord>,
    /// Lines that could not be decoded or were structurally invalid
    pub malformed: usize,
    /// One message per malformed line, in corpus order
    pub malformed_messages: Vec<String>,
    /// Worst observed value of each graph-level ratio
    pub ratios: RatioAccumulator,
}

/// Verify every record in `paths`.
///
/// Lines are decoded and verified `batch_size` at a time with rayon;
/// batch results are folded sequentially so counts and the failing list
/// stay in corpus order. Record-local problems (undecodable lines,
/// structurally invalid records) are counted and skipped; anything else
/// aborts the run.
pub fn verify_corpus(paths: &[PathBuf], batch_size: usize) -> Result<CorpusSummary> {
    let batch_size = batch_size.max(1);
    let mut summary = CorpusSummary::default();

    for path in paths {
        let file = File::open(path)?;
        let mut batch: Vec<(usize, String)> = Vec::with_capacity(batch_size);
        let mut line_no = 0;
        for line in BufReader::new(file).lines() {
            let line = line?;
            line_no += 1;
            if skip_line(&line) {
                continue;
            }
            batch.push((line_no, line));
            if batch.len() == batch_size {
                process_batch(path, &batch, &mut summary)?;
                batch.clear();
            }
        }
        if !batch.is_empty() {
            process_batch(path, &batch, &mut summary)?;
        }
    }
    Ok(summary)
}

fn process_batch(
    path: &Path,
    batch: &[(usize, String)],
    summary: &mut CorpusSummary,
) -> Result<()> {
    let verdicts: Vec<Result<(ConjectureRecord, RatioAccumulator)>> = batch
        .par_iter()
        .map(|(line_no, line)| {
            let mut record = decode_record(line, path, *line_no)?;
            let outcome = verify_and_tag(&mut record)?;
            let mut ratios = RatioAccumulator::new();
            ratios.observe(&outcome);
            Ok((record, ratios))
        })
        .collect();

    for verdict in verdicts {
        match verdict {
            Ok((record, ratios)) => {
                summary.records += 1;
                summary.ratios.merge(&ratios);
                if record.is_failing() {
                    summary.failing.push(record);
                }
            }
            Err(e) if e.is_record_local() => {
                summary.malformed += 1;
                summary.malformed_messages.push(e.to_string());
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Persist failing records, one JSON object per line
pub fn write_failures(path: &Path, failing: &[ConjectureRecord]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for record in failing {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Persist the worst-ratio map as a single flat JSON object
pub fn write_ratio_stats(path: &Path, ratios: &RatioAccumulator) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &ratios.to_stats())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
