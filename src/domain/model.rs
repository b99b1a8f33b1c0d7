use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seam/clearance allowance added once to every folding layout (m).
pub const CLEARANCE: f64 = 0.1;

/// Horizontal gap between two drawn sheet panels (m). Visual only.
pub const PANEL_GAP: f64 = 0.56;

/// Layout never draws more than this many sheet panels.
pub const MAX_PANELS_SHOWN: u32 = 2;

/// Supply dimensions of a GI sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub max_length: f64,
    pub width: f64,
}

impl SheetSpec {
    /// The 2.44 m x 1.22 m stock sheet.
    pub const STANDARD: SheetSpec = SheetSpec {
        max_length: 2.44,
        width: 1.22,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuctDimensions {
    pub width: f64,
    pub depth: f64,
    pub length: f64,
}

impl DuctDimensions {
    pub fn new(width: f64, depth: f64, length: f64) -> Self {
        Self {
            width,
            depth,
            length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Flat length consumed by clearance plus all four faces (m).
    pub folding_length: f64,
    /// Sheets along the duct run, already rounded up.
    pub raw_sheet_count: f64,
    pub sheet_count: u64,
}

impl EstimationResult {
    /// True when the unrolled cross section does not fit on one sheet length.
    pub fn is_split_section(&self) -> bool {
        self.folding_length > SheetSpec::STANDARD.max_length
    }

    /// Sheets used side by side for one cross section: 1 or 2.
    pub fn sheets_per_section(&self) -> u32 {
        if self.is_split_section() {
            2
        } else {
            1
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageBreakdown {
    pub loss_length: f64,
    pub used_length: f64,
}

impl UsageBreakdown {
    pub fn loss_percent(&self) -> f64 {
        self.loss_length / SheetSpec::STANDARD.max_length * 100.0
    }

    pub fn used_percent(&self) -> f64 {
        self.used_length / SheetSpec::STANDARD.max_length * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineColor {
    Purple,
    Red,
    Blue,
    Green,
}

impl LineColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineColor::Purple => "purple",
            LineColor::Red => "red",
            LineColor::Blue => "blue",
            LineColor::Green => "green",
        }
    }
}

/// Which fold a guide line marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideKind {
    Clearance,
    Width,
    Depth,
}

impl GuideKind {
    pub fn color(&self) -> LineColor {
        match self {
            GuideKind::Clearance => LineColor::Purple,
            GuideKind::Width => LineColor::Red,
            GuideKind::Depth => LineColor::Blue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub x: f64,
    pub kind: GuideKind,
    pub color: LineColor,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetRectangle {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
}

impl SheetRectangle {
    pub const COLOR: LineColor = LineColor::Green;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "primitive", rename_all = "snake_case")]
pub enum DrawPrimitive {
    GuideLine(GuideLine),
    SheetRectangle(SheetRectangle),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub sheets_to_show: u32,
    pub primitives: Vec<DrawPrimitive>,
}

impl LayoutPlan {
    pub fn guide_lines(&self) -> impl Iterator<Item = &GuideLine> {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::GuideLine(line) => Some(line),
            DrawPrimitive::SheetRectangle(_) => None,
        })
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &SheetRectangle> {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::SheetRectangle(rect) => Some(rect),
            DrawPrimitive::GuideLine(_) => None,
        })
    }

    /// Right edge of the furthest drawn sheet panel, 0 when no panel is drawn.
    pub fn x_extent(&self) -> f64 {
        self.rectangles().map(|rect| rect.x_end).fold(0.0, f64::max)
    }
}

/// How the presentation layer treats a session that needs zero sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ZeroSheetPolicy {
    #[default]
    Show,
    Suppress,
}

/// Everything one estimation session produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuctReport {
    pub dimensions: DuctDimensions,
    pub sheet: SheetSpec,
    pub estimation: EstimationResult,
    pub usage: UsageBreakdown,
    pub layout: Option<LayoutPlan>,
    pub generated_at: DateTime<Utc>,
}

impl DuctReport {
    pub fn is_empty_duct(&self) -> bool {
        self.estimation.sheet_count == 0
    }
}

/// Rendered report files, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct RenderedReport {
    pub files: Vec<(String, Vec<u8>)>,
}

impl RenderedReport {
    pub fn push(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.push((name.into(), data.into()));
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, data)| data.as_slice())
    }
}
