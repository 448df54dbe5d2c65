//! Widget placement on responsive grids
//!
//! Finds where a new widget goes without overlapping the ones already on the
//! grid. Each breakpoint is laid out independently with its own column count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named responsive layout size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Lg,
    Md,
    Sm,
    Xs,
    Xxs,
}

impl Breakpoint {
    pub fn columns(&self) -> u32 {
        match self {
            Breakpoint::Lg => 12,
            Breakpoint::Md => 10,
            Breakpoint::Sm => 6,
            Breakpoint::Xs => 4,
            Breakpoint::Xxs => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
            Breakpoint::Xxs => "xxs",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lg" => Ok(Breakpoint::Lg),
            "md" => Ok(Breakpoint::Md),
            "sm" => Ok(Breakpoint::Sm),
            "xs" => Ok(Breakpoint::Xs),
            "xxs" => Ok(Breakpoint::Xxs),
            other => Err(format!("Unknown breakpoint: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub x: u32,
    pub y: u32,
}

/// A placed rectangle in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn at(origin: Origin, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Half-open intersection test; touching edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Compute a free origin for a widget of `size`.
///
/// Rows are scanned top to bottom and columns left to right; the first origin
/// whose rectangle fits the breakpoint's columns and overlaps nothing wins.
/// When nothing fits the widget goes below the lowest occupied row.
///
/// Only row 0 and the bottom edges of existing widgets are candidate rows, and
/// only column 0 and their right edges candidate columns: the first free slot
/// always sits on one of them.
pub fn compute_placement(size: Size, existing: &[Rect], breakpoint: Breakpoint) -> Origin {
    let columns = breakpoint.columns();
    let size = Size {
        width: size.width.clamp(1, columns),
        height: size.height.max(1),
    };
    let lowest = existing.iter().map(Rect::bottom).max().unwrap_or(0);
    let last_column = columns - size.width;

    let rows = candidates(existing.iter().map(Rect::bottom), lowest.saturating_sub(1));
    let cols = candidates(existing.iter().map(Rect::right), last_column);

    for &y in rows.iter().filter(|&&y| y < lowest) {
        for &x in &cols {
            let candidate = Rect::at(Origin { x, y }, size);
            if !existing.iter().any(|r| r.overlaps(&candidate)) {
                tracing::debug!(
                    "Placing {}x{} widget at ({}, {}) on {}",
                    size.width,
                    size.height,
                    x,
                    y,
                    breakpoint
                );
                return Origin { x, y };
            }
        }
    }

    tracing::debug!(
        "No gap for {}x{} widget on {}, appending at row {}",
        size.width,
        size.height,
        breakpoint,
        lowest
    );
    Origin { x: 0, y: lowest }
}

/// Sorted, deduplicated `0` plus every edge up to `max`
fn candidates(edges: impl Iterator<Item = u32>, max: u32) -> Vec<u32> {
    let mut values: Vec<u32> = std::iter::once(0).chain(edges.filter(|&e| e <= max)).collect();
    values.sort_unstable();
    values.dedup();
    values
}
