use crate::domain::model::{SheetSpec, UsageBreakdown, CLEARANCE};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

/// Splits one sheet length into loss and used portions.
///
/// A cross section that fits on one sheet (`folding_length < max_length`) uses the
/// whole folding length. Otherwise each of the two sheets carries one width face and
/// one depth face. The comparison is strict, so `folding_length == max_length` takes
/// the two-sheet formula even though the estimate does not double at that point.
pub fn usage(width: f64, depth: f64, folding_length: f64) -> Result<UsageBreakdown> {
    validate_non_negative("width", width)?;
    validate_non_negative("depth", depth)?;
    validate_non_negative("folding_length", folding_length)?;

    let max_length = SheetSpec::STANDARD.max_length;

    let loss_length = if folding_length < max_length {
        max_length - folding_length
    } else {
        max_length - (CLEARANCE + width + depth)
    };
    let used_length = max_length - loss_length;

    if loss_length < 0.0 {
        tracing::warn!(
            loss_length,
            "Half cross section exceeds one sheet length; loss is negative"
        );
    }

    tracing::debug!(loss_length, used_length, "Computed sheet usage");

    Ok(UsageBreakdown {
        loss_length,
        used_length,
    })
}
