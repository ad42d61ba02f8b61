//! The intermediate page script: an ordered list of draw commands grouped
//! into pages, produced by the layout pass and consumed by the PDF
//! backend. Keeping layout and emission apart means there is exactly one
//! place where coordinates are decided and one place where bytes are
//! written.

use serde::{Deserialize, Serialize};

use crate::font::FontId;

/// An RGB color with unit-range components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A single line of text at an absolute baseline position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub font: FontId,
    pub color: Color,
    pub text: String,
    /// When set, the backend clips the run to this width instead of
    /// letting it overflow its column. Clipping, not slicing: the text
    /// itself stays intact.
    pub max_width: Option<f32>,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub thickness: f32,
    pub color: Color,
}

/// Stroke settings for a rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub thickness: f32,
    pub color: Color,
}

/// An axis-aligned rectangle, optionally filled and/or stroked.
/// `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// One draw command. The layout never needs anything beyond these three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Text(TextRun),
    Rule(Rule),
    Rect(Rect),
}

/// All draw commands for one page, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// The page's text runs, in paint order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Whether any text run on this page contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|run| run.text.contains(needle))
    }
}

/// A finished layout: page dimensions plus the per-page command lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageScript {
    pub width: f32,
    pub height: f32,
    pub pages: Vec<Page>,
}

impl PageScript {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs across all pages, in paint order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(Page::text_runs)
    }

    /// Whether any text run in the script contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|page| page.contains_text(needle))
    }
}
