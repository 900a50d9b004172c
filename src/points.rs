//! Point sets for the monotone conjunction test
//!
//! Input is plain text, one point per line, two whitespace-separated
//! non-negative integers per line. No header, no comments.

use crate::error::{ConjunctionError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Smallest point count the statistic accepts
pub const MIN_POINTS: usize = 9;

/// A single (x, y) observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Point {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

impl From<(u64, u64)> for Point {
    fn from((x, y): (u64, u64)) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of points holding at least [`MIN_POINTS`] entries
///
/// Every constructor validates the count, so a `PointSet` value is always
/// large enough for the statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wrap already-typed points, checking the minimum count
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < MIN_POINTS {
            return Err(ConjunctionError::InsufficientData {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Build a point set from raw rows, rejecting anything that is not a
    /// rectangular two-column table of non-negative integers
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let mut points = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let [x, y] = row.as_slice() else {
                return Err(ConjunctionError::Shape(format!(
                    "Row {} has {} columns, expected 2.",
                    index,
                    row.len()
                )));
            };

            match (u64::try_from(*x), u64::try_from(*y)) {
                (Ok(x), Ok(y)) => points.push(Point { x, y }),
                _ => {
                    return Err(ConjunctionError::Shape(format!(
                        "Row {} holds a negative value ({}, {}).",
                        index, x, y
                    )))
                }
            }
        }

        Self::new(points)
    }

    /// Parse points from a line-oriented reader
    ///
    /// Line numbers in errors are 1-based. A blank line or a line that is
    /// not valid UTF-8 is malformed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut points = Vec::new();

        for (index, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let bytes = raw.strip_suffix(b"\r").unwrap_or(&raw);
            let point = std::str::from_utf8(bytes)
                .ok()
                .and_then(parse_line)
                .ok_or(ConjunctionError::LineFormat { line: index + 1 })?;
            points.push(point);
        }

        tracing::debug!(count = points.len(), "parsed input points");
        Self::new(points)
    }

    /// Load points from a file, failing before any parsing if the path is
    /// missing or a directory
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() || path.is_dir() {
            return Err(ConjunctionError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of points in the set
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in input order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// x-coordinates in input order
    pub fn xs(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// y-coordinates in input order
    pub fn ys(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|p| p.y)
    }
}

/// Parse "x y" where both tokens are ASCII digits only (no sign)
fn parse_line(line: &str) -> Option<Point> {
    let mut tokens = line.split_whitespace();
    let (x, y) = (tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }
    Some(Point {
        x: parse_token(x)?,
        y: parse_token(y)?,
    })
}

fn parse_token(token: &str) -> Option<u64> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
