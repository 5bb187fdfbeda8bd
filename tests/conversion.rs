//! 문자열 단위 변환, 단위계, 설정 파일 테스트.
use approx::assert_relative_eq;
use thin_film_toolbox::config::Config;
use thin_film_toolbox::conversion::{convert, convert_to_system, to_canonical};
use thin_film_toolbox::units::systems::UnitSystemKind;
use thin_film_toolbox::units::{
    EnergyUnit, ForceUnit, LengthUnit, MassUnit, PressureUnit, TemperatureUnit, TimeUnit,
};
use thin_film_toolbox::{ErrorKind, QuantityKind};

#[test]
fn string_units_dispatch_per_quantity() {
    let k = convert(QuantityKind::Temperature, 25.0, "C", "K").expect("temperature");
    assert_relative_eq!(k, 298.15, max_relative = 1e-12);

    let bar = convert(QuantityKind::Pressure, 760.0, "Torr", "bar").expect("pressure");
    assert_relative_eq!(bar, 1.013_25, max_relative = 1e-12);

    let ev = convert(QuantityKind::Energy, 1.0, "Ha", "eV").expect("energy");
    assert_relative_eq!(ev, 27.211_386_245_988, max_relative = 1e-10);

    let rho = convert(QuantityKind::Density { dim: 3 }, 2.33, "g/cm3", "kg/m3").expect("density");
    assert_relative_eq!(rho, 2330.0, max_relative = 1e-12);

    let kg_per_mol = convert(QuantityKind::MolarMass, 28.0855, "g/mol", "kg/mol").expect("molar");
    assert_relative_eq!(kg_per_mol, 0.028_085_5, max_relative = 1e-12);
}

#[test]
fn unknown_strings_are_validation_errors() {
    let err = convert(QuantityKind::Length, 1.0, "m", "parsec").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    // 다른 물리량의 단위는 받지 않는다
    let err = convert(QuantityKind::Pressure, 1.0, "eV", "Pa").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let err = convert(QuantityKind::Density { dim: 2 }, 1.0, "g/cm3", "kg/m^dim").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn canonical_value_carries_kind() {
    let v = to_canonical(QuantityKind::Length, 5.0, "A").expect("length");
    assert_eq!(v.kind, QuantityKind::Length);
    assert_relative_eq!(v.value_base, 5.0e-10, max_relative = 1e-12);

    let t = to_canonical(QuantityKind::Temperature, -40.0, "F").expect("temperature");
    assert_relative_eq!(t.value_base, 233.15, max_relative = 1e-12);
}

#[test]
fn unit_systems_pick_conventional_units() {
    let si = UnitSystemKind::SI.units();
    assert_eq!(si.length, LengthUnit::Meter);
    assert_eq!(si.pressure, Some(PressureUnit::Pascal));

    let cgs = UnitSystemKind::CGS.units();
    assert_eq!(cgs.mass, MassUnit::Gram);
    assert_eq!(cgs.pressure, Some(PressureUnit::Barye));
    assert_eq!(cgs.energy, Some(EnergyUnit::Erg));

    let imperial = UnitSystemKind::Imperial.units();
    assert_eq!(imperial.temperature, TemperatureUnit::Rankine);
    assert_eq!(imperial.force, Some(ForceUnit::PoundForce));
    assert_eq!(UnitSystemKind::USCS.units().name, "USCS");

    let metal = UnitSystemKind::Metal.units();
    assert_eq!(metal.length, LengthUnit::Angstrom);
    assert_eq!(metal.time, TimeUnit::Picosecond);
    assert_eq!(metal.energy, Some(EnergyUnit::ElectronVolt));

    let real = UnitSystemKind::Real.units();
    assert_eq!(real.energy, Some(EnergyUnit::KiloCaloriePerMole));

    let hartree = UnitSystemKind::Hartree.units();
    assert_eq!(hartree.mass, MassUnit::ElectronMass);
    assert_eq!(hartree.pressure, None);

    for kind in UnitSystemKind::ALL {
        assert!(!kind.units().name.is_empty());
    }
}

#[test]
fn values_convert_into_a_system() {
    let metal = UnitSystemKind::Metal.units();
    let ev = convert_to_system(QuantityKind::Energy, 1.0, "kcal/mol", &metal).expect("energy");
    assert_relative_eq!(ev, 0.043_364_104_241_8, max_relative = 1e-9);

    let cgs = UnitSystemKind::CGS.units();
    let rho = convert_to_system(QuantityKind::Density { dim: 3 }, 1000.0, "kg/m3", &cgs).expect("rho");
    assert_relative_eq!(rho, 1.0, max_relative = 1e-12);

    let hartree = UnitSystemKind::Hartree.units();
    let err = convert_to_system(QuantityKind::Pressure, 1.0, "Pa", &hartree).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn config_round_trips_through_toml() {
    let cfg = Config {
        unit_system: UnitSystemKind::Metal,
        check_range: false,
    };
    let text = cfg.to_toml_string().expect("serialize");
    let back = Config::from_toml_str(&text).expect("parse");
    assert_eq!(back, cfg);
    assert_eq!(back.units().length, LengthUnit::Angstrom);

    // 빠진 항목은 기본값
    let partial = Config::from_toml_str("unit_system = \"CGS\"").expect("partial");
    assert_eq!(partial.unit_system, UnitSystemKind::CGS);
    assert!(partial.check_range);

    let err = thin_film_toolbox::PhysError::from(Config::from_toml_str("unit_system = 3").unwrap_err());
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn config_file_is_created_with_defaults() {
    let dir = std::env::temp_dir().join(format!("thin_film_toolbox_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let cfg = Config::load_or_default(&path).expect("default");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let custom = Config {
        unit_system: UnitSystemKind::Hartree,
        check_range: true,
    };
    custom.save(&path).expect("save");
    assert_eq!(Config::load_or_default(&path).expect("reload"), custom);

    std::fs::remove_dir_all(&dir).expect("cleanup");
}
