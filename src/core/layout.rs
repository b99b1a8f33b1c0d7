use crate::domain::model::{
    DrawPrimitive, GuideKind, GuideLine, LayoutPlan, SheetRectangle, SheetSpec, CLEARANCE,
    MAX_PANELS_SHOWN, PANEL_GAP,
};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

/// Plans the 2D cutting guide for one or two sheet panels.
///
/// A cross section that fits one sheet gets all four folds (width, depth, width, depth)
/// after the clearance. A split cross section is drawn as two panels, each carrying
/// one width fold and one depth fold.
pub fn plan(width: f64, depth: f64, folding_length: f64, sheet_count: u64) -> Result<LayoutPlan> {
    validate_non_negative("width", width)?;
    validate_non_negative("depth", depth)?;
    validate_non_negative("folding_length", folding_length)?;

    let sheets_to_show = sheet_count.min(u64::from(MAX_PANELS_SHOWN)) as u32;
    let sheet = SheetSpec::STANDARD;
    let mut primitives = Vec::new();

    if folding_length <= sheet.max_length {
        let folds = [
            (GuideKind::Clearance, CLEARANCE),
            (GuideKind::Width, CLEARANCE + width),
            (GuideKind::Depth, CLEARANCE + width + depth),
            (GuideKind::Width, CLEARANCE + width + depth + width),
            (GuideKind::Depth, CLEARANCE + width + depth + width + depth),
        ];
        for (kind, x) in folds {
            primitives.push(guide(kind, x, width, depth, None));
        }
        primitives.push(panel(0.0, &sheet));
    } else {
        for sheet_index in 0..MAX_PANELS_SHOWN {
            let base = sheet_index as f64 * (sheet.max_length + PANEL_GAP);
            let folds = [
                (GuideKind::Clearance, base + CLEARANCE),
                (GuideKind::Width, base + CLEARANCE + width),
                (GuideKind::Depth, base + CLEARANCE + width + depth),
            ];
            for (kind, x) in folds {
                primitives.push(guide(kind, x, width, depth, Some(sheet_index + 1)));
            }
            primitives.push(panel(base, &sheet));
        }
    }

    tracing::debug!(
        sheets_to_show,
        primitives = primitives.len(),
        "Planned duct layout"
    );

    Ok(LayoutPlan {
        sheets_to_show,
        primitives,
    })
}

fn guide(kind: GuideKind, x: f64, width: f64, depth: f64, sheet: Option<u32>) -> DrawPrimitive {
    let mut label = match kind {
        GuideKind::Clearance => "Clearance".to_string(),
        GuideKind::Width => format!("Width: {:.2} m", width),
        GuideKind::Depth => format!("Depth: {:.2} m", depth),
    };
    if let Some(number) = sheet {
        label.push_str(&format!(" (sheet {})", number));
    }

    DrawPrimitive::GuideLine(GuideLine {
        x,
        kind,
        color: kind.color(),
        label,
    })
}

fn panel(base: f64, sheet: &SheetSpec) -> DrawPrimitive {
    DrawPrimitive::SheetRectangle(SheetRectangle {
        x_start: base,
        x_end: base + sheet.max_length,
        y_start: 0.0,
        y_end: sheet.width,
    })
}
