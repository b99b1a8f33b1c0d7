use anyhow::Result;
use gi_sheet_estimator::{estimate, plan, usage, DrawPrimitive, EstimatorError, GuideKind};

const EPS: f64 = 1e-9;

/// 單張板材截面：width=0.5, depth=0.3, length=5.0
#[test]
fn test_single_sheet_duct_scenario() -> Result<()> {
    let estimation = estimate(0.5, 0.3, 5.0)?;
    assert!((estimation.folding_length - 1.7).abs() < EPS);
    assert_eq!(estimation.raw_sheet_count, 5.0);
    assert_eq!(estimation.sheet_count, 5);

    let breakdown = usage(0.5, 0.3, estimation.folding_length)?;
    assert!((breakdown.loss_length - 0.74).abs() < EPS);
    assert!((breakdown.used_length - 1.70).abs() < EPS);
    Ok(())
}

/// 截面超過 2.44m，需兩張板材並排
#[test]
fn test_split_section_duct_scenario() -> Result<()> {
    let estimation = estimate(0.8, 0.8, 3.0)?;
    assert!((estimation.folding_length - 3.3).abs() < EPS);
    assert_eq!(estimation.raw_sheet_count, 3.0);
    assert_eq!(estimation.sheet_count, 6);

    let breakdown = usage(0.8, 0.8, estimation.folding_length)?;
    assert!((breakdown.loss_length - 0.74).abs() < EPS);
    assert!((breakdown.used_length - 1.70).abs() < EPS);

    let layout = plan(0.8, 0.8, estimation.folding_length, estimation.sheet_count)?;
    let rects: Vec<_> = layout.rectangles().collect();
    assert_eq!(rects.len(), 2);
    assert!((rects[1].x_start - 3.0).abs() < EPS);
    assert!((rects[1].x_end - 5.44).abs() < EPS);

    let second_panel: Vec<f64> = layout.guide_lines().skip(3).map(|line| line.x).collect();
    for (actual, expected) in second_panel.iter().zip([3.1, 3.9, 4.7]) {
        assert!((actual - expected).abs() < EPS);
    }
    Ok(())
}

#[test]
fn test_zero_duct_scenario() -> Result<()> {
    let estimation = estimate(0.0, 0.0, 0.0)?;
    assert!((estimation.folding_length - 0.1).abs() < EPS);
    assert_eq!(estimation.raw_sheet_count, 0.0);
    assert_eq!(estimation.sheet_count, 0);

    let layout = plan(0.0, 0.0, estimation.folding_length, estimation.sheet_count)?;
    assert_eq!(layout.rectangles().count(), 1);
    let kinds: Vec<_> = layout.guide_lines().map(|line| line.kind).collect();
    assert_eq!(kinds.len(), 5);
    assert_eq!(kinds[0], GuideKind::Clearance);
    Ok(())
}

#[test]
fn test_loss_and_used_partition_the_sheet() -> Result<()> {
    let widths = [0.0, 0.1, 0.35, 0.5, 0.61, 0.8, 1.2];
    let depths = [0.0, 0.2, 0.3, 0.55, 0.9];

    for &w in &widths {
        for &d in &depths {
            let estimation = estimate(w, d, 4.0)?;
            let breakdown = usage(w, d, estimation.folding_length)?;
            assert!(
                (breakdown.loss_length + breakdown.used_length - 2.44).abs() < EPS,
                "w={} d={}",
                w,
                d
            );
        }
    }
    Ok(())
}

#[test]
fn test_doubling_only_above_sheet_length() -> Result<()> {
    for (w, d) in [(0.5, 0.3), (0.6, 0.5), (0.7, 0.5), (0.8, 0.8), (1.0, 0.2)] {
        let estimation = estimate(w, d, 6.0)?;
        let expected = if estimation.folding_length > 2.44 {
            estimation.raw_sheet_count as u64 * 2
        } else {
            estimation.raw_sheet_count as u64
        };
        assert_eq!(estimation.sheet_count, expected);
    }
    Ok(())
}

#[test]
fn test_raw_sheet_count_rounds_up_partial_sheets() -> Result<()> {
    for length in [0.0, 0.5, 1.22, 1.23, 2.44, 3.0, 10.0, 12.2] {
        let estimation = estimate(0.3, 0.3, length)?;
        assert_eq!(estimation.raw_sheet_count, (length / 1.22).ceil());
        assert!(estimation.raw_sheet_count >= 0.0);
        assert_eq!(estimation.raw_sheet_count.fract(), 0.0);
    }
    Ok(())
}

#[test]
fn test_layout_never_exceeds_two_rectangles() -> Result<()> {
    for sheet_count in [0, 1, 2, 5, 60] {
        for folding in [0.1, 1.7, 2.44, 3.3, 8.0] {
            let layout = plan(0.8, 0.8, folding, sheet_count)?;
            let rectangles = layout
                .primitives
                .iter()
                .filter(|p| matches!(p, DrawPrimitive::SheetRectangle(_)))
                .count();
            assert!(rectangles <= 2);
        }
    }
    Ok(())
}

#[test]
fn test_negative_inputs_are_rejected_everywhere() {
    assert!(matches!(
        estimate(0.5, 0.3, -1.0),
        Err(EstimatorError::InvalidInputError { .. })
    ));
    assert!(matches!(
        usage(-0.5, 0.3, 1.7),
        Err(EstimatorError::InvalidInputError { .. })
    ));
    assert!(matches!(
        plan(0.5, -0.3, 1.7, 2),
        Err(EstimatorError::InvalidInputError { .. })
    ));
}

#[test]
fn test_infinite_inputs_are_rejected_everywhere() {
    assert!(matches!(
        estimate(0.5, 0.3, f64::INFINITY),
        Err(EstimatorError::InvalidInputError { .. })
    ));
    assert!(matches!(
        estimate(f64::INFINITY, 0.3, 2.0),
        Err(EstimatorError::InvalidInputError { .. })
    ));
    assert!(matches!(
        usage(f64::INFINITY, 0.0, f64::INFINITY),
        Err(EstimatorError::InvalidInputError { .. })
    ));
    assert!(matches!(
        plan(0.5, 0.3, f64::INFINITY, 2),
        Err(EstimatorError::InvalidInputError { .. })
    ));
}
