//! Streaming HTML report renderer.
//!
//! Consumes prediction lines in arrival order and writes one self-contained
//! HTML document in a single pass: parse, filter, bin the error into a color,
//! emit a colored block with the instance's supporting context. Stops reading
//! input the moment the record limit is reached. Per-record failures drop the
//! record; only setup and input-stream errors are fatal.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::report::palette::color_for;
use crate::report::record::parse_line;

/// Renderer configuration, built once at startup and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Only keep records whose label (as a string) equals this value.
    pub label_filter: Option<String>,
    /// Maximum number of record blocks to emit.
    pub limit: usize,
    /// Records whose rendered context fragment reaches this size are
    /// dropped. The unit is bytes, not characters; multi-byte text counts
    /// each encoded byte toward the budget.
    pub max_context_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_filter: None,
            limit: 1000,
            max_context_size: 10_000,
        }
    }
}

/// Counters describing one rendering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    /// Record blocks written to the sink.
    pub emitted: usize,
    /// Lines dropped because they failed to parse.
    pub skipped_parse: usize,
    /// Records dropped by the label filter.
    pub skipped_filter: usize,
    /// Records dropped because their context fragment was too large.
    pub skipped_oversize: usize,
    /// Records dropped because writing their block failed.
    pub skipped_write: usize,
}

/// Render an HTML report of prediction errors.
///
/// Reads `input` line by line until end of input or until `limit` blocks have
/// been emitted, whichever comes first; remaining lines are never read. The
/// document is closed and the sink flushed in both cases.
///
/// Malformed lines, lines that are not valid UTF-8, filtered labels,
/// oversized contexts and write failures on a single block all skip that
/// record and continue; an error reading the input stream itself is returned.
pub fn render<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    config: &ReportConfig,
) -> io::Result<ReportStats> {
    let mut stats = ReportStats::default();

    out.write_all(b"<html>")?;

    let mut raw = Vec::new();
    let mut line_no = 0usize;
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        line_no += 1;

        // Lines are read as raw bytes so a non-UTF-8 line is just another
        // malformed record, not a fatal stream error.
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line,
            Err(err) => {
                debug!("line {}: skipping non-utf8 record: {}", line_no, err);
                stats.skipped_parse += 1;
                continue;
            }
        };

        let record = match parse_line(line) {
            Ok(record) => record,
            Err(err) => {
                debug!("line {}: skipping malformed record: {}", line_no, err);
                stats.skipped_parse += 1;
                continue;
            }
        };

        if let Some(filter) = &config.label_filter {
            if record.label.to_string() != *filter {
                stats.skipped_filter += 1;
                continue;
            }
        }

        let color = color_for(record.error());

        let mut fragment = String::new();
        for (key, value) in &record.context {
            fragment.push_str(&format!("<b>{}</b></br>{}<br/>", key, value));
        }

        if fragment.len() < config.max_context_size && stats.emitted < config.limit {
            let block = format!(
                "<div style='background-color: #{}; width: 700px;'>{} ({:.6})<br/>{}</div><p>",
                color, record.label, record.score, fragment
            );
            match out.write_all(block.as_bytes()) {
                Ok(()) => stats.emitted += 1,
                Err(err) => {
                    warn!("line {}: dropping record, write failed: {}", line_no, err);
                    stats.skipped_write += 1;
                }
            }
        } else if fragment.len() >= config.max_context_size {
            debug!(
                "line {}: skipping record, context is {} bytes",
                line_no,
                fragment.len()
            );
            stats.skipped_oversize += 1;
        }

        if stats.emitted >= config.limit {
            break;
        }
    }

    out.write_all(b"</html>")?;
    out.flush()?;

    Ok(stats)
}

// =============================================================================
// Tests
// =============================================================================
