use crate::domain::model::{DuctDimensions, EstimationResult, SheetSpec, CLEARANCE};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_negative;

/// Unrolled cross-section length: clearance plus both width faces and both depth faces.
pub fn folding_length(width: f64, depth: f64) -> f64 {
    CLEARANCE + (width * 2.0) + (depth * 2.0)
}

/// Whether a cross section of this folding length must be built from two sheets.
pub fn requires_split(folding_length: f64) -> bool {
    folding_length > SheetSpec::STANDARD.max_length
}

/// Sheets needed along the duct run. The sheet's 1.22 m side runs along the duct axis.
pub fn raw_sheet_count(length: f64) -> f64 {
    (length / SheetSpec::STANDARD.width).ceil()
}

pub fn estimate(width: f64, depth: f64, length: f64) -> Result<EstimationResult> {
    validate_non_negative("width", width)?;
    validate_non_negative("depth", depth)?;
    validate_non_negative("length", length)?;

    let folding_length = folding_length(width, depth);
    let raw_sheet_count = raw_sheet_count(length);

    // Truncating conversion, not rounding.
    let sheet_count = if requires_split(folding_length) {
        (raw_sheet_count * 2.0) as u64
    } else {
        raw_sheet_count as u64
    };

    tracing::debug!(
        folding_length,
        raw_sheet_count,
        sheet_count,
        "Estimated sheets for {:.2} x {:.2} x {:.2} m duct",
        width,
        depth,
        length
    );

    if sheet_count == 0 {
        tracing::warn!("Duct length is zero, no sheets required");
    }

    Ok(EstimationResult {
        folding_length,
        raw_sheet_count,
        sheet_count,
    })
}

pub fn estimate_dimensions(dimensions: &DuctDimensions) -> Result<EstimationResult> {
    estimate(dimensions.width, dimensions.depth, dimensions.length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EstimatorError;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_sheet_section() {
        let result = estimate(0.5, 0.3, 5.0).unwrap();
        assert!((result.folding_length - 1.7).abs() < EPS);
        assert_eq!(result.raw_sheet_count, 5.0);
        assert_eq!(result.sheet_count, 5);
        assert!(!result.is_split_section());
        assert_eq!(result.sheets_per_section(), 1);
    }

    #[test]
    fn test_split_section_doubles_sheet_count() {
        let result = estimate(0.8, 0.8, 3.0).unwrap();
        assert!((result.folding_length - 3.3).abs() < EPS);
        assert_eq!(result.raw_sheet_count, 3.0);
        assert_eq!(result.sheet_count, 6);
        assert_eq!(result.sheets_per_section(), 2);
    }

    #[test]
    fn test_long_split_duct_does_not_saturate() {
        let result = estimate(0.8, 0.8, 1e10).unwrap();
        assert_eq!(result.raw_sheet_count, (1e10_f64 / 1.22).ceil());
        assert_eq!(result.sheet_count, 16_393_442_624);
        assert!(result.sheet_count > u64::from(u32::MAX));
    }

    #[test]
    fn test_zero_dimensions() {
        let result = estimate(0.0, 0.0, 0.0).unwrap();
        assert!((result.folding_length - 0.1).abs() < EPS);
        assert_eq!(result.raw_sheet_count, 0.0);
        assert_eq!(result.sheet_count, 0);
    }

    #[test]
    fn test_exact_sheet_multiple_is_not_rounded_up() {
        assert_eq!(raw_sheet_count(2.44), 2.0);
        assert_eq!(raw_sheet_count(2.45), 3.0);
        assert_eq!(raw_sheet_count(0.01), 1.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!requires_split(2.44));
        assert!(requires_split(2.4400001));
        assert!(!requires_split(2.43));
    }

    #[test]
    fn test_folding_length_formula() {
        for (w, d) in [(0.0, 0.0), (0.25, 0.4), (1.0, 2.0), (0.61, 0.56)] {
            let expected = 0.1 + 2.0 * w + 2.0 * d;
            assert!((folding_length(w, d) - expected).abs() < EPS);
            assert!(folding_length(w, d) >= 0.1);
        }
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let first = estimate(0.45, 0.35, 7.3).unwrap();
        let second = estimate(0.45, 0.35, 7.3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_input_rejected() {
        for (w, d, l, field) in [
            (-0.1, 0.3, 1.0, "width"),
            (0.5, -0.3, 1.0, "depth"),
            (0.5, 0.3, -1.0, "length"),
        ] {
            match estimate(w, d, l) {
                Err(EstimatorError::InvalidInputError { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected invalid input for {}, got {:?}", field, other),
            }
        }
    }
}
