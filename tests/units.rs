//! 단위 변환 회귀 테스트. 기준값은 CODATA 2018 및 정의값을 사용한다.
use approx::assert_relative_eq;
use nalgebra::DVector;
use thin_film_toolbox::units::*;
use thin_film_toolbox::conversion::convert;
use thin_film_toolbox::{ErrorKind, PhysError, Quantity, QuantityKind, UnitId};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6e} got {actual:.6e} (diff {diff:.3e}, tol {rel_tol})"
    );
}

fn check_quantity<Q: Quantity>() {
    assert_eq!(Q::scale(Q::CANONICAL), 1.0, "{} canonical scale", Q::NAME);
    assert_eq!(Q::offset(Q::CANONICAL), 0.0, "{} canonical offset", Q::NAME);
    for (i, &unit) in <Q::Unit as UnitId>::ALL.iter().enumerate() {
        let s = Q::scale(unit);
        assert!(s.is_finite() && s > 0.0, "{} {unit:?} scale {s}", Q::NAME);
        assert_eq!(unit.ordinal(), i);
        assert_eq!(<Q::Unit as UnitId>::from_ordinal(i).expect("ordinal"), unit);
        assert_eq!(<Q::Unit as UnitId>::parse(unit.symbol()).expect("symbol"), unit);

        let back = Q::from_canonical(Q::to_canonical(123.456_f64, unit), unit);
        assert_close(&format!("{} {unit:?}", Q::NAME), back, 123.456, 1e-12);

        check_prefix_case::<Q::Unit>(unit);
    }
}

/// m/M, p/P 접두어의 대소문자를 바꾼 기호는 표에 없으면 거부되어야 한다 (mPa != MPa).
fn check_prefix_case<U: UnitId>(unit: U) {
    let symbol = unit.symbol();
    let Some(first) = symbol.chars().next() else {
        return;
    };
    let swapped_prefix = match first {
        'm' => 'M',
        'M' => 'm',
        'p' => 'P',
        'P' => 'p',
        _ => return,
    };
    let rest = &symbol[1..];
    if !U::ALL.iter().any(|u| u.symbol() == rest) {
        return;
    }
    let swapped = format!("{swapped_prefix}{rest}");
    match U::parse(&swapped) {
        Ok(parsed) => assert_eq!(parsed.symbol(), swapped, "{swapped} resolved to {parsed:?}"),
        Err(err) => assert!(matches!(err, PhysError::UnsupportedUnit { .. })),
    }
}

#[test]
fn every_unit_round_trips_through_canonical() {
    check_quantity::<Length>();
    check_quantity::<Mass>();
    check_quantity::<Time>();
    check_quantity::<Pressure>();
    check_quantity::<Temperature>();
    check_quantity::<Energy>();
    check_quantity::<Force>();
    check_quantity::<Charge>();
    check_quantity::<Dipole>();
    check_quantity::<ElectricField>();
    check_quantity::<Velocity>();
    check_quantity::<Viscosity>();
    check_quantity::<Torque>();
    check_quantity::<MolarMass>();
    check_quantity::<ParticleMass>();
}

#[test]
fn pressure_reference_values() {
    assert_close("atm", convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Pascal), 101_325.0, 1e-12);
    assert_close("Pa->atm", convert_pressure(101_325.0, PressureUnit::Pascal, PressureUnit::Atm), 1.0, 1e-12);
    assert_close("760 Torr", convert_pressure(760.0, PressureUnit::Torr, PressureUnit::Atm), 1.0, 1e-12);
    assert_close("psi", convert_pressure(1.0, PressureUnit::Psi, PressureUnit::Pascal), 6894.757_293_168, 1e-12);
    assert_close("bar", to_pascal(1.0, PressureUnit::Bar), 1.0e5, 1e-12);
    assert_close("Ba", from_pascal(1.0, PressureUnit::Barye), 10.0, 1e-12);
}

#[test]
fn temperature_offsets() {
    assert_close("0 C", to_kelvin(0.0, TemperatureUnit::Celsius), 273.15, 1e-12);
    assert_close("212 F", convert_temperature(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius), 100.0, 1e-12);
    assert_close("32 F", convert_temperature(32.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius), 0.0, 1e-12);
    assert_close("0 K", from_kelvin(0.0, TemperatureUnit::Fahrenheit), -459.67, 1e-12);
    assert_close("491.67 R", to_kelvin(491.67, TemperatureUnit::Rankine), 273.15, 1e-12);
    assert_close("1500 mK", to_kelvin(1500.0, TemperatureUnit::MilliKelvin), 1.5, 1e-12);
}

#[test]
fn force_reference_values() {
    assert_close("lbf", convert_force(1.0, ForceUnit::PoundForce, ForceUnit::Newton), 4.448_221_615_260_5, 1e-12);
    assert_close("N->lbf", convert_force(4.448_221_615_260_5, ForceUnit::Newton, ForceUnit::PoundForce), 1.0, 1e-12);
    assert_close("dyn", convert_force(1.0, ForceUnit::Dyne, ForceUnit::Newton), 1.0e-5, 1e-12);
    assert_relative_eq!(
        convert_force(1.0, ForceUnit::HartreePerBohr, ForceUnit::ElectronVoltPerAngstrom),
        27.211_386_245_988 / 0.529_177_210_903,
        max_relative = 1e-10
    );
}

#[test]
fn energy_and_atomic_units() {
    assert_relative_eq!(
        convert_energy(1.0, EnergyUnit::Hartree, EnergyUnit::ElectronVolt),
        27.211_386_245_988,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        convert_energy(1.0, EnergyUnit::KiloCaloriePerMole, EnergyUnit::ElectronVolt),
        0.043_364_104_241_8,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        convert_energy(1.0, EnergyUnit::MegaElectronVolt, EnergyUnit::KiloElectronVolt),
        1000.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(convert_energy(1.0, EnergyUnit::Erg, EnergyUnit::Joule), 1.0e-7);
    // 토크의 kcal/mol은 입자 하나 기준
    assert_relative_eq!(
        convert_torque(1.0, TorqueUnit::KiloCaloriePerMole, TorqueUnit::ElectronVolt),
        0.043_364_104_241_8,
        max_relative = 1e-9
    );
}

#[test]
fn length_time_velocity() {
    assert_relative_eq!(convert_length(1.0, LengthUnit::Angstrom, LengthUnit::Nanometer), 0.1, max_relative = 1e-12);
    assert_relative_eq!(convert_length(1.0, LengthUnit::Bohr, LengthUnit::Angstrom), 0.529_177_210_903, max_relative = 1e-12);
    assert_relative_eq!(convert_length(1.0, LengthUnit::Inch, LengthUnit::Centimeter), 2.54, max_relative = 1e-12);
    assert_relative_eq!(convert_time(1.0, TimeUnit::Atomic, TimeUnit::Femtosecond), 0.024_188_843_265_857, max_relative = 1e-12);
    assert_relative_eq!(
        convert_velocity(1.0, VelocityUnit::AngstromPerFemtosecond, VelocityUnit::MeterPerSecond),
        1.0e5,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_velocity(1.0, VelocityUnit::Atomic, VelocityUnit::MeterPerSecond),
        2_187_691.263_641_13,
        max_relative = 1e-10
    );
}

#[test]
fn electrostatic_units() {
    assert_relative_eq!(
        convert_charge(4.803_204_71e-10, ChargeUnit::StatCoulomb, ChargeUnit::Elementary),
        1.0,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        convert_dipole(1.0, DipoleUnit::Debye, DipoleUnit::CoulombMeter),
        3.335_640_951_981_52e-30,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        convert_electric_field(1.0, ElectricFieldUnit::StatVoltPerCentimeter, ElectricFieldUnit::VoltPerMeter),
        29_979.2458,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        convert_electric_field(1.0, ElectricFieldUnit::Atomic, ElectricFieldUnit::VoltPerMeter),
        5.142_206_747_632_6e11,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        convert_viscosity(1.0, ViscosityUnit::Poise, ViscosityUnit::Centipoise),
        100.0,
        max_relative = 1e-12
    );
}

#[test]
fn mass_link_between_molar_and_particle() {
    let m = particle_from_molar(28.0855, MolarMassUnit::GramPerMole);
    assert_relative_eq!(m, 28.0855e-3 / 6.022_140_76e23, max_relative = 1e-12);
    let back = molar_from_particle(m, ParticleMassUnit::Kilogram);
    assert_relative_eq!(back, 28.0855e-3, max_relative = 1e-12);
    assert_relative_eq!(
        molar_from_particle(1.0, ParticleMassUnit::Dalton),
        1.0e-3,
        max_relative = 1e-9
    );
    assert_relative_eq!(convert_mass(1.0, MassUnit::Dalton, MassUnit::Kilogram), 1.660_539_068_92e-27);
}

#[test]
fn arrays_keep_their_shape() {
    let arr = [0.5, 1.0, 2.0];
    let out = convert_force(arr, ForceUnit::PoundForce, ForceUnit::Newton);
    for (o, a) in out.iter().zip(arr) {
        assert_relative_eq!(*o, a * 4.448_221_615_260_5, max_relative = 1e-12);
    }

    let v = vec![0.0, 100.0];
    let k = convert_temperature(v, TemperatureUnit::Celsius, TemperatureUnit::Kelvin);
    assert_eq!(k.len(), 2);
    assert_close("0 C", k[0], 273.15, 1e-12);
    assert_close("100 C", k[1], 373.15, 1e-12);

    let d = DVector::from_vec(vec![1.0, 2.0, 3.0]);
    let nm = convert_length(d, LengthUnit::Angstrom, LengthUnit::Nanometer);
    assert_eq!(nm.len(), 3);
    assert_relative_eq!(nm[2], 0.3, max_relative = 1e-12);
}

#[test]
fn foreign_unit_identifiers_are_rejected() {
    let err = LengthUnit::from_ordinal(LengthUnit::ALL.len()).unwrap_err();
    assert!(matches!(err, PhysError::UnsupportedUnit { .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = PressureUnit::parse("furlong").unwrap_err();
    assert!(matches!(err, PhysError::UnsupportedUnit { .. }));

    // 기호는 대소문자를 구분한다
    assert_eq!(EnergyUnit::parse("meV").expect("meV"), EnergyUnit::MilliElectronVolt);
    assert_eq!(EnergyUnit::parse("MeV").expect("MeV"), EnergyUnit::MegaElectronVolt);
    // 별칭은 대소문자를 무시한다
    assert_eq!(PressureUnit::parse("TORR").expect("torr"), PressureUnit::Torr);

    // 밀리파스칼은 표에 없다. 메가파스칼로 해석되면 안 된다
    let err = PressureUnit::parse("mPa").unwrap_err();
    assert!(matches!(err, PhysError::UnsupportedUnit { .. }));
    assert!(convert(QuantityKind::Pressure, 1.0, "mPa", "Pa").is_err());
    assert_eq!(PressureUnit::parse("MegaPascal").expect("megapascal"), PressureUnit::MegaPascal);
    assert_eq!(PressureUnit::parse("MPa").expect("MPa"), PressureUnit::MegaPascal);
    // N·m 별칭 "nm"은 나노미터와 헷갈린다
    assert!(TorqueUnit::parse("nm").is_err());
    assert_eq!(TorqueUnit::parse("N-m").expect("N-m"), TorqueUnit::NewtonMeter);
    assert_eq!(LengthUnit::parse("Angstrom").expect("angstrom"), LengthUnit::Angstrom);
}

#[test]
fn density_requires_matching_dimension() {
    // 1 g/cm^3 = 1000 kg/m^3
    let rho = convert_density(1.0, DensityUnit::GramPerCubicCentimeter, DensityUnit::KgPerCubicMeter, 3)
        .expect("3d");
    assert_relative_eq!(rho, 1000.0, max_relative = 1e-12);

    // 1 g/cm^2 = 10 kg/m^2
    let sigma = convert_density(1.0, DensityUnit::GramPerCentimeterDim, DensityUnit::KgPerMeterDim, 2)
        .expect("2d");
    assert_relative_eq!(sigma, 10.0, max_relative = 1e-12);

    // 1 g/cm = 0.1 kg/m
    let lambda = convert_density(1.0, DensityUnit::GramPerCentimeterDim, DensityUnit::KgPerMeterDim, 1)
        .expect("1d");
    assert_relative_eq!(lambda, 0.1, max_relative = 1e-12);

    let atomic = to_canonical_density(1.0, DensityUnit::Atomic, 3).expect("atomic");
    assert_relative_eq!(atomic, 9.109_383_701_5e-31 / 5.291_772_109_03e-11_f64.powi(3), max_relative = 1e-12);

    let err = convert_density(1.0, DensityUnit::KgPerCubicMeter, DensityUnit::GramPerCubicCentimeter, 2)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let err = convert_density(1.0, DensityUnit::KgPerMeterDim, DensityUnit::KgPerMeterDim, 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(from_canonical_density(1.0, DensityUnit::KgPerMeterDim, 0).is_err());
}

#[test]
fn every_density_unit_round_trips_in_each_dimension() {
    for &unit in DensityUnit::ALL {
        for dim in 1..=3u8 {
            if unit.is_fixed_3d() && dim != 3 {
                assert!(to_canonical_density(123.456, unit, dim).is_err());
                continue;
            }
            let base = to_canonical_density(123.456_f64, unit, dim).expect("to canonical");
            let back = from_canonical_density(base, unit, dim).expect("from canonical");
            assert_close(&format!("density {unit:?} dim={dim}"), back, 123.456, 1e-12);
            assert_eq!(DensityUnit::parse(unit.symbol()).expect("symbol"), unit);
        }
    }
}
