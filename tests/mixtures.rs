use approx::assert_relative_eq;
use thin_film_toolbox::constants::CONSTANTS_SI;
use thin_film_toolbox::thermo::{
    ActivityModel, ClausiusClapeyronCurve, IdealSolution, MolarMixture,
    PartialPressureFromActivity, PureCurve, RegularSolutionBinary,
};
use thin_film_toolbox::units::TemperatureUnit;
use thin_film_toolbox::ErrorKind;

#[test]
fn fractions_must_sum_to_one() {
    let err = MolarMixture::new(vec!["Ga", "In"], vec![0.3, 0.3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let ok = MolarMixture::new(vec!["Ga", "In"], vec![0.3, 0.7]).expect("mixture");
    assert_eq!(ok.len(), 2);
    assert!(!ok.is_empty());
    assert_eq!(ok.n_total(), None);
    assert_relative_eq!(ok.mole_fraction("In").expect("In"), 0.7);
}

#[test]
fn malformed_mixtures_are_rejected() {
    assert!(MolarMixture::new(vec!["Ga"], vec![0.5, 0.5]).is_err());
    assert!(MolarMixture::new(vec!["Ga", "Ga"], vec![0.5, 0.5]).is_err());
    assert!(MolarMixture::new(vec!["Ga", "In"], vec![-0.2, 1.2]).is_err());
    assert!(MolarMixture::from_moles(vec!["Ga", "In"], &[0.0, 0.0]).is_err());
    assert!(MolarMixture::from_moles(vec!["Ga", "In"], &[1.0, -1.0]).is_err());
}

#[test]
fn unknown_component_is_a_lookup_error() {
    let mix = MolarMixture::new(vec!["Ga", "In"], vec![0.5, 0.5]).expect("mixture");
    assert_eq!(mix.mole_fraction("As").unwrap_err().kind(), ErrorKind::Lookup);
}

#[test]
fn moles_are_normalised() {
    let mix = MolarMixture::from_moles(vec!["Ga", "In", "As"], &[1.0, 1.0, 2.0]).expect("moles");
    assert_eq!(mix.n_total(), Some(4.0));
    assert_eq!(mix.fractions(), &[0.25, 0.25, 0.5]);
    let collected: Vec<(&str, f64)> = mix.iter().collect();
    assert_eq!(collected, vec![("Ga", 0.25), ("In", 0.25), ("As", 0.5)]);
}

#[test]
fn ideal_solution_has_unit_activity() {
    let mix = MolarMixture::new(vec!["A", "B"], vec![0.2, 0.8]).expect("mixture");
    let gamma = IdealSolution::new(vec!["A", "B"]).gamma(500.0, &mix).expect("gamma");
    assert_eq!(gamma["A"], 1.0);
    assert_eq!(gamma["B"], 1.0);
}

#[test]
fn regular_solution_binary() {
    let omega = 5_000.0;
    let t = 800.0;
    let model = RegularSolutionBinary::new("A", "B", omega).expect("model");
    let mix = MolarMixture::new(vec!["A", "B"], vec![0.25, 0.75]).expect("mixture");
    let gamma = model.gamma(t, &mix).expect("gamma");
    let rt = CONSTANTS_SI.r_g * t;
    assert_relative_eq!(gamma["A"], (omega * 0.75 * 0.75 / rt).exp(), max_relative = 1e-12);
    assert_relative_eq!(gamma["B"], (omega * 0.25 * 0.25 / rt).exp(), max_relative = 1e-12);

    // 세 성분 혼합물에서 A + B 가 1이 아니면 거부
    let ternary = MolarMixture::new(vec!["A", "B", "C"], vec![0.2, 0.3, 0.5]).expect("ternary");
    assert_eq!(model.gamma(t, &ternary).unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(model.gamma(0.0, &mix).unwrap_err().kind(), ErrorKind::Domain);
    assert!(RegularSolutionBinary::new("A", "B", f64::NAN).is_err());
}

fn curves() -> Vec<(String, PureCurve)> {
    vec![
        (
            "A".to_string(),
            Box::new(ClausiusClapeyronCurve::new(1.0e3, 600.0, 1.0e5).expect("A")) as PureCurve,
        ),
        (
            "B".to_string(),
            Box::new(
                ClausiusClapeyronCurve::new(2.0e3, 600.0, 1.0e5)
                    .expect("B")
                    .with_temperature_unit(TemperatureUnit::Celsius),
            ) as PureCurve,
        ),
    ]
}

#[test]
fn partial_pressures_follow_raoult_for_ideal_solution() {
    let model = PartialPressureFromActivity::new(curves(), Box::new(IdealSolution::new(vec!["A", "B"])));
    let mix = MolarMixture::new(vec!["A", "B"], vec![0.4, 0.6]).expect("mixture");
    let p = model.partial_pressures_pa(600.0, &mix, true).expect("partial");
    assert_relative_eq!(p["A"], 0.4 * 1.0e3, max_relative = 1e-12);
    // 곡선 입력 단위가 °C여도 온도는 K로 받는다
    assert_relative_eq!(p["B"], 0.6 * 2.0e3, max_relative = 1e-9);
    let total = model.total_pressure_pa(600.0, &mix, true).expect("total");
    assert_relative_eq!(total, p["A"] + p["B"], max_relative = 1e-12);
}

#[test]
fn partial_pressures_with_regular_solution() {
    let omega = -8_000.0;
    let model = PartialPressureFromActivity::new(
        curves(),
        Box::new(RegularSolutionBinary::new("A", "B", omega).expect("model")),
    );
    let mix = MolarMixture::new(vec!["A", "B"], vec![0.5, 0.5]).expect("mixture");
    let p = model.partial_pressures_pa(600.0, &mix, true).expect("partial");
    let gamma = (omega * 0.25 / (CONSTANTS_SI.r_g * 600.0)).exp();
    assert!(gamma < 1.0);
    assert_relative_eq!(p["A"], gamma * 0.5 * 1.0e3, max_relative = 1e-12);

    let missing = MolarMixture::new(vec!["A", "C"], vec![0.5, 0.5]).expect("mixture");
    assert_eq!(
        model.partial_pressures_pa(600.0, &missing, true).unwrap_err().kind(),
        ErrorKind::Lookup
    );
}

#[test]
fn total_pressure_sums_in_registration_order() {
    let pure: Vec<(String, PureCurve)> = [("A", 1.0e-3), ("B", 7.0e5), ("C", 3.3)]
        .into_iter()
        .map(|(name, p_ref)| {
            let curve = ClausiusClapeyronCurve::new(p_ref, 600.0, 1.0e5).expect("curve");
            (name.to_string(), Box::new(curve) as PureCurve)
        })
        .collect();
    let model = PartialPressureFromActivity::new(pure, Box::new(IdealSolution::new(vec!["A", "B", "C"])));
    let mix = MolarMixture::new(vec!["A", "B", "C"], vec![0.1, 0.3, 0.6]).expect("mixture");

    let p = model.partial_pressures_pa(650.0, &mix, true).expect("partial");
    let expected = p["A"] + p["B"] + p["C"];
    for _ in 0..8 {
        let total = model.total_pressure_pa(650.0, &mix, true).expect("total");
        assert_eq!(total.to_bits(), expected.to_bits());
    }
}
