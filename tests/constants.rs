use approx::assert_relative_eq;
use std::f64::consts::PI;
use thin_film_toolbox::constants::{CONSTANTS_CGS, CONSTANTS_SI, ESU_TO_C};

#[test]
fn hbar_is_h_over_two_pi() {
    for c in [CONSTANTS_SI, CONSTANTS_CGS] {
        assert_relative_eq!(c.hbar, c.h / (2.0 * PI), max_relative = 1e-15);
    }
}

#[test]
fn gas_constant_matches_avogadro_times_boltzmann() {
    for c in [CONSTANTS_SI, CONSTANTS_CGS] {
        assert_relative_eq!(c.r_g, c.n_a * c.k_b, max_relative = 1e-9);
    }
}

#[test]
fn si_and_cgs_containers_agree() {
    let si = CONSTANTS_SI;
    let cgs = CONSTANTS_CGS;
    assert_eq!(si.name, "SI");
    assert_eq!(cgs.name, "CGS");
    assert_relative_eq!(cgs.a0 * 1.0e-2, si.a0, max_relative = 1e-12);
    assert_relative_eq!(cgs.me0 * 1.0e-3, si.me0, max_relative = 1e-12);
    assert_relative_eq!(cgs.k_b * 1.0e-7, si.k_b, max_relative = 1e-12);
    assert_relative_eq!(cgs.h * 1.0e-7, si.h, max_relative = 1e-12);
    assert_relative_eq!(cgs.m_u * 1.0e-3, si.m_u, max_relative = 1e-12);
    assert_relative_eq!(cgs.q * ESU_TO_C, si.q, max_relative = 1e-8);
    assert_eq!(si.n_a, cgs.n_a);
}
