//! Scorecard Rendering Tests
//!
//! End-to-end checks of `ScorecardRenderer::assemble` against a small
//! synthetic well: track placement, gaps, tops, striplog and header.

use well_scorecard::figure::Coords;
use well_scorecard::{
    Color, Curve, Interval, RenderError, ScorecardRenderer, Striplog, StriplogError, Top, Well,
    WellHeader, WellLocation,
};

const NAN: f64 = f64::NAN;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 0-1000 m at 100 m steps; GR has a gap, ILD starts late.
fn sample_well() -> Well {
    let basis: Vec<f64> = (0..=10).map(|i| f64::from(i) * 100.0).collect();
    let mut well = Well::new(
        WellHeader {
            name: "P-129".to_string(),
            uwi: "100/01-02-003-04W5/00".to_string(),
        },
        WellLocation {
            kb: Some(94.8),
            td: Some(1000.0),
        },
    );
    well.insert(Curve::new("DEPT", "M", basis.clone(), basis.clone()).unwrap());
    well.insert(
        Curve::new(
            "GR",
            "GAPI",
            vec![80.0, 85.0, 90.0, NAN, NAN, 70.0, 75.0, 72.0, 71.0, 70.0, 69.0],
            basis.clone(),
        )
        .unwrap()
        .with_description("Gamma ray"),
    );
    well.insert(
        Curve::new(
            "ILD",
            "ohmm",
            vec![NAN, NAN, 10.0, 12.0, 15.0, 20.0, 22.0, 25.0, 24.0, 23.0, NAN],
            basis.clone(),
        )
        .unwrap(),
    );
    well.insert(Curve::new("DT", "US/M", vec![300.0; 11], basis.clone()).unwrap());
    well.insert(Curve::new("RHOB", "K/M3", vec![2450.0; 11], basis).unwrap());
    well
}

// ============================================================================
// Curves
// ============================================================================

#[test]
fn curves_land_in_their_tracks() {
    init_tracing();
    let fig = ScorecardRenderer::default()
        .assemble(&sample_well(), None, None)
        .unwrap();

    assert_eq!(fig.panels.len(), 6);
    let bar_counts: Vec<usize> = fig.panels.iter().map(|p| p.bars().count()).collect();
    // GR has two runs; ILD, RHOB, DT one each
    assert_eq!(bar_counts, vec![2, 1, 0, 1, 1, 0]);

    let gr: Vec<_> = fig.panels[0].bars().collect();
    assert!((gr[0].bottom - 0.0).abs() < 1e-9);
    assert!((gr[0].height - 200.0).abs() < 1e-9);
    assert!((gr[1].bottom - 500.0).abs() < 1e-9);
    assert!((gr[1].height - 500.0).abs() < 1e-9);

    let ild = fig.panels[1].bars().next().unwrap();
    assert!((ild.bottom - 200.0).abs() < 1e-9);
    assert!((ild.height - 700.0).abs() < 1e-9);
    assert_eq!(ild.color, Color::MAGENTA.with_alpha(0.2));
}

#[test]
fn zero_curve_well_has_empty_tracks() {
    let basis = vec![0.0, 250.0, 500.0];
    let well =
        Well::default().with_curve(Curve::new("DEPTH", "M", basis.clone(), basis).unwrap());
    let fig = ScorecardRenderer::default()
        .assemble(&well, None, None)
        .unwrap();

    assert_eq!(fig.panels.len(), 6);
    assert_eq!(fig.panels.iter().map(|p| p.bars().count()).sum::<usize>(), 0);
    // Only the TD side note lives in a panel; every track is otherwise empty
    assert!(fig.panels[..5].iter().all(|p| p.glyphs.is_empty()));
    // TD falls back to the deepest basis value
    assert!((fig.height - 2.0).abs() < 1e-9);
}

#[test]
fn missing_basis_is_reported() {
    let mut well = sample_well();
    well.data.remove("DEPT");
    let err = ScorecardRenderer::default()
        .assemble(&well, None, None)
        .unwrap_err();
    assert!(matches!(err, RenderError::MissingDepthBasis { .. }));
    assert!(err.to_string().contains("DEPT, DEPTH"));
}

// ============================================================================
// Tops, striplog, header
// ============================================================================

#[test]
fn full_scorecard_with_tops_and_striplog() {
    init_tracing();
    let striplog = Striplog::new(vec![
        Interval::new(0.0, 350.0).with_component("lithology", "shale"),
        Interval::new(350.0, 700.0).with_component("lithology", "limestone"),
        Interval::new(700.0, 1000.0).with_component("lithology", "sandstone"),
    ]);
    let tops = vec![Top::new("Viking", 350.0), Top::new("Mannville", 700.0)];

    let fig = ScorecardRenderer::default()
        .assemble(&sample_well(), Some(&striplog), Some(&tops))
        .unwrap();

    for panel in &fig.panels {
        assert_eq!(panel.hlines().count(), tops.len());
        assert_eq!(panel.ylim, Some((1000.0, 0.0)));
    }

    let last = fig.panels.last().unwrap();
    assert_eq!(last.rects().count(), 3);
    assert_eq!(last.title.as_deref(), Some("Canstrat\nLithology"));
    let data_labels: Vec<&str> = last
        .texts()
        .filter(|t| t.coords == Coords::Data)
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(data_labels, vec!["Viking", "Mannville"]);
    let side: Vec<&str> = last
        .texts()
        .filter(|t| t.coords == Coords::Axes)
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(side, vec!["KB elev.: 94.8 m", "TD: 1000 m"]);

    // Formation labels only on the rightmost panel
    for panel in &fig.panels[..fig.panels.len() - 1] {
        assert!(panel.texts().all(|t| t.content != "Viking"));
    }

    assert_eq!(fig.texts[0].content, "P-129");
    assert_eq!(fig.texts[1].content, "UWI: 100/01-02-003-04W5/00");
    assert!((fig.height - 4.0).abs() < 1e-9);
}

#[test]
fn striplog_without_tops_shares_the_depth_axis() {
    let striplog = Striplog::new(vec![
        Interval::new(0.0, 600.0).with_component("lithology", "shale"),
        Interval::new(600.0, 1000.0).with_component("lithology", "dolomite"),
    ]);
    let fig = ScorecardRenderer::default()
        .assemble(&sample_well(), Some(&striplog), None)
        .unwrap();

    let ylims: Vec<_> = fig.panels.iter().map(|p| p.ylim).collect();
    assert_eq!(ylims, vec![Some((1000.0, 0.0)); 6]);
    assert_eq!(fig.panels[5].rects().count(), 2);
    assert!(fig.panels.iter().all(|p| p.hlines().count() == 0));
}

#[test]
fn striplog_failure_is_propagated() {
    let striplog = Striplog::new(vec![
        Interval::new(0.0, 400.0).with_component("lithology", "shale"),
        Interval::new(800.0, 500.0).with_component("lithology", "sandstone"),
    ]);
    let err = ScorecardRenderer::default()
        .assemble(&sample_well(), Some(&striplog), None)
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Striplog(StriplogError::InvertedInterval { index: 1, .. })
    ));
    assert!(err.to_string().starts_with("Striplog rendering failed"));
}

#[test]
fn figure_serializes_to_json() {
    let tops = [Top::new("Viking", 350.0)];
    let fig = ScorecardRenderer::default()
        .assemble(&sample_well(), None, Some(&tops))
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
    assert_eq!(json["panels"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["panels"][0]["glyphs"][0]["kind"], "bar");
    assert_eq!(json["panels"][0]["caption"]["content"], "Lithology");
}
