use approx::assert_relative_eq;
use thin_film_toolbox::discretization::{Grid1D, GridType1D};
use thin_film_toolbox::ErrorKind;

#[test]
fn closed_grid_includes_both_ends() {
    let grid = Grid1D::new(0.0, 1.0, 5, GridType1D::Closed).expect("grid");
    let x = grid.points();
    assert_eq!(x.len(), 5);
    assert_eq!(x[0], 0.0);
    assert_eq!(x[4], 1.0);
    assert_relative_eq!(grid.dx(), 0.25);
    assert_relative_eq!(x[2], 0.5);
}

#[test]
fn spacing_per_grid_type() {
    let cases = [
        (GridType1D::LeftClosed, 0.25, 0.0, 0.75),
        (GridType1D::RightClosed, 0.25, 0.25, 1.0),
        (GridType1D::Open, 0.2, 0.2, 0.8),
        (GridType1D::Interior, 0.2, 0.2, 0.8),
        (GridType1D::Midpoint, 0.25, 0.125, 0.875),
    ];
    for (grid_type, dx, first, last) in cases {
        let grid = Grid1D::new(0.0, 1.0, 4, grid_type).expect("grid");
        let x = grid.points();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.grid_type(), grid_type);
        assert_relative_eq!(grid.dx(), dx, max_relative = 1e-12);
        assert_relative_eq!(x[0], first, max_relative = 1e-12);
        assert_relative_eq!(x[3], last, max_relative = 1e-12);
    }
}

#[test]
fn shifted_interval() {
    let grid = Grid1D::new(-2.0, 3.0, 11, GridType1D::Closed).expect("grid");
    assert_relative_eq!(grid.length(), 5.0);
    assert_eq!(grid.a(), -2.0);
    assert_eq!(grid.b(), 3.0);
    assert!(!grid.is_empty());
    let x = grid.points();
    assert_eq!(x[0], -2.0);
    assert_eq!(x[10], 3.0);
    assert_relative_eq!(x[5], 0.5, epsilon = 1e-12);
}

#[test]
fn invalid_grids_are_rejected() {
    let err = Grid1D::new(0.0, 1.0, 1, GridType1D::Closed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(Grid1D::new(0.0, 1.0, 0, GridType1D::Open).is_err());
    assert!(Grid1D::new(1.0, 1.0, 4, GridType1D::Open).is_err());
    assert!(Grid1D::new(2.0, 1.0, 4, GridType1D::Open).is_err());
    assert!(Grid1D::new(0.0, f64::NAN, 4, GridType1D::Open).is_err());
    // 한 점짜리 열린 격자는 허용
    let single = Grid1D::new(0.0, 1.0, 1, GridType1D::Interior).expect("single");
    assert_relative_eq!(single.points()[0], 0.5);
}
