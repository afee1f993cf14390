//! Reads and runs a perft regression suite: one line per position, each
//! `<fen> ; expected-nodes-at-depth-1 ; expected-nodes-at-depth-2 ; ...`,
//! in the format of the classic `perftsuite.epd` test set.

use std::fmt;
use std::path::Path;

use crate::board::Board;

/// A single suite line: a position and the expected node count at each
/// depth, 1-indexed by position in the vector (`expected[0]` is depth 1).
#[derive(Clone, Debug)]
pub struct PerftCase {
    pub fen: String,
    pub expected: Vec<u64>,
}

/// The outcome of running one [`PerftCase`] to some maximum depth.
#[derive(Clone, Debug)]
pub struct PerftResult {
    pub fen: String,
    pub depth: u32,
    pub expected: u64,
    pub actual: u64,
}

impl PerftResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for PerftResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(f, "ok   depth={} nodes={} fen=\"{}\"", self.depth, self.actual, self.fen)
        } else {
            write!(
                f,
                "FAIL depth={} expected={} actual={} fen=\"{}\"",
                self.depth, self.expected, self.actual, self.fen
            )
        }
    }
}

/// Errors reading or parsing a suite file.
#[derive(Debug)]
pub enum PerftSuiteError {
    Io(std::io::Error),
    MalformedLine { line_no: usize, line: String },
    Fen(crate::board::FenError),
}

impl fmt::Display for PerftSuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerftSuiteError::Io(e) => write!(f, "failed to read perft suite file: {e}"),
            PerftSuiteError::MalformedLine { line_no, line } => {
                write!(f, "malformed suite line {line_no}: \"{line}\"")
            }
            PerftSuiteError::Fen(e) => write!(f, "invalid FEN in suite file: {e}"),
        }
    }
}

impl std::error::Error for PerftSuiteError {}

impl From<std::io::Error> for PerftSuiteError {
    fn from(e: std::io::Error) -> Self {
        PerftSuiteError::Io(e)
    }
}

/// Parses a suite file from disk.
pub fn read_suite(path: impl AsRef<Path>) -> Result<Vec<PerftCase>, PerftSuiteError> {
    let contents = std::fs::read_to_string(path)?;
    parse_suite(&contents)
}

/// Parses suite text already in memory (one case per non-blank line).
pub fn parse_suite(contents: &str) -> Result<Vec<PerftCase>, PerftSuiteError> {
    let mut cases = Vec::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split(';').map(str::trim);
        let fen = parts
            .next()
            .ok_or_else(|| PerftSuiteError::MalformedLine {
                line_no: idx + 1,
                line: raw_line.to_string(),
            })?
            .to_string();
        let expected: Vec<u64> = parts
            .map(|n| {
                n.parse::<u64>().map_err(|_| PerftSuiteError::MalformedLine {
                    line_no: idx + 1,
                    line: raw_line.to_string(),
                })
            })
            .collect::<Result<_, _>>()?;
        if expected.is_empty() {
            return Err(PerftSuiteError::MalformedLine {
                line_no: idx + 1,
                line: raw_line.to_string(),
            });
        }
        cases.push(PerftCase { fen, expected });
    }
    Ok(cases)
}

/// Runs every case up to `max_depth` (capped at each case's own number of
/// expected depths), returning one [`PerftResult`] per depth checked.
pub fn run_suite(cases: &[PerftCase], max_depth: u32) -> Result<Vec<PerftResult>, PerftSuiteError> {
    let mut results = Vec::new();
    for case in cases {
        let board = Board::try_from_fen(&case.fen).map_err(PerftSuiteError::Fen)?;
        let depth_limit = max_depth.min(case.expected.len() as u32);
        for depth in 1..=depth_limit {
            let actual = board.perft(depth);
            #[cfg(feature = "logging")]
            log::info!("perft depth={depth} fen=\"{}\" nodes={actual}", case.fen);
            results.push(PerftResult {
                fen: case.fen.clone(),
                depth,
                expected: case.expected[(depth - 1) as usize],
                actual,
            });
            if actual != case.expected[(depth - 1) as usize] {
                #[cfg(feature = "logging")]
                log::warn!(
                    "perft mismatch depth={depth} fen=\"{}\" expected={} actual={actual}",
                    case.fen,
                    case.expected[(depth - 1) as usize]
                );
                break;
            }
        }
    }
    Ok(results)
}
