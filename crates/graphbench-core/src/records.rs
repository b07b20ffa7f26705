//! Result sinks: the semicolon-delimited timing file and Graphviz-style
//! renderings of single algorithm results for manual checking.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::bench::BenchmarkRow;
use crate::error::{GraphBenchError, Result};
use crate::graph::{DiscoveryEdge, Representation, ShortestPaths};

/// First line of every results file
pub const RESULTS_TITLE: &str = "PERFORMANCE TESTING OF GRAPH ALGORITHMS";

/// Column order of each timing record
pub const RESULTS_COLUMNS: &str = "size;density;avgDijkstraMs;avgBellmanFordMs;avgBfsMs";

/// Appends one `size;density;dijkstra;bellman_ford;bfs` record per cell.
///
/// A `# <storage>` line precedes the first record of each representation.
/// Every record is flushed as it is written.
pub struct CsvSink<W: Write> {
    writer: W,
    path: PathBuf,
    current: Option<Representation>,
}

impl CsvSink<BufWriter<File>> {
    /// Create (truncating) the results file and write its title.
    ///
    /// Fails before any benchmarking starts when the file cannot be opened.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| GraphBenchError::sink_unavailable(path, e))?;
        let mut sink = Self::new(BufWriter::new(file), path);
        sink.write_title()?;
        Ok(sink)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
            current: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_title(&mut self) -> Result<()> {
        let title = format!("{}\n{}\n", RESULTS_TITLE, RESULTS_COLUMNS);
        self.write_flushed(&title)
    }

    pub fn write_row(&mut self, row: &BenchmarkRow) -> Result<()> {
        let mut out = String::new();
        if self.current != Some(row.representation) {
            out.push_str(&format!("# {}\n", row.representation.storage_name()));
            self.current = Some(row.representation);
        }
        out.push_str(&format_row(row));
        out.push('\n');
        self.write_flushed(&out)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_flushed(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| GraphBenchError::sink_unavailable(&self.path, e))
    }
}

/// `size;density;avgDijkstraMs;avgBellmanFordMs;avgBfsMs`
pub fn format_row(row: &BenchmarkRow) -> String {
    format!(
        "{};{};{};{};{}",
        row.size, row.density, row.dijkstra_ms, row.bellman_ford_ms, row.bfs_ms
    )
}

/// One `g.edge('<vertex>', '<predecessor>', label = '<distance>')` line per
/// vertex; a missing predecessor prints as `-1`, an infinite distance as `inf`.
pub fn render_paths(paths: &ShortestPaths) -> String {
    let mut out = String::new();
    for entry in &paths.entries {
        let predecessor = entry
            .predecessor
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-1".to_string());
        let _ = writeln!(
            out,
            "g.edge('{}', '{}', label = '{}')",
            entry.vertex, predecessor, entry.distance
        );
    }
    out
}

/// One `g.edge('<parent>', '<child>')` line per discovery edge
pub fn render_tree(tree: &[DiscoveryEdge]) -> String {
    let mut out = String::new();
    for edge in tree {
        let _ = writeln!(out, "g.edge('{}', '{}')", edge.parent, edge.child);
    }
    out
}
