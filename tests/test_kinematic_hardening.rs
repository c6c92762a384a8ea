use plast1d::prelude::*;
use plast1d::Error;
use russell_chk::{approx_eq, vec_approx_eq};

#[test]
fn test_kinematic_hardening() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();

    let model = ElastoPlastic::from_json(Hardening::Kinematic, r#"{"E": 1000, "Et": 100, "Y0": 10}"#)?;
    assert_eq!(model.kind(), Hardening::Kinematic);

    // loading up to 5% strain, then unloading to zero
    let strains = build_strain_profile(&[0.0, 0.0, 0.0075, 0.03, 0.05, 0.0], &[1, 1, 1, 1, 1])?;
    let (stress, plastic_strain) = integrate(&model, &strains);
    vec_approx_eq(&stress, &[0.0, 0.0, 7.5, 12.0, 14.0, -9.0], 1e-6);
    approx_eq(plastic_strain[4], 0.036, 1e-12);
    approx_eq(plastic_strain[5], 0.063, 1e-12);
    Ok(())
}

#[test]
fn test_kinematic_hardening_bauschinger_effect() -> Result<(), Error> {
    let kinematic = make_material(Hardening::Kinematic, &SampleParams::param_steel())?;
    let isotropic = make_material(Hardening::Isotropic, &SampleParams::param_steel())?;

    // cyclic path with many small increments
    let profile = StrainProfile::new(&[0.0, 0.01, -0.01, 0.01], &[100, 200, 200])?;
    let mut settings = Settings::new();
    settings.set_save_internal_values(true).set_save_stiffness(true);
    let hist_kin = Driver::new(&kinematic, settings).run_profile(&profile);
    let hist_iso = Driver::new(&isotropic, settings).run_profile(&profile);

    // identical response along the first (monotonic) loading
    vec_approx_eq(&hist_kin.stress[..=100], &hist_iso.stress[..=100], 1e-9);

    // the yield stress never changes with kinematic hardening
    assert!(hist_kin.yield_stress.iter().all(|y| *y == 250.0));

    // plastic states lie on the translated yield surface |σ - α| = Y0
    let (young, hh) = (2e5, 2e3);
    for i in 0..hist_kin.len() {
        if !hist_kin.elastic[i] {
            approx_eq(f64::abs(hist_kin.stress[i] - hist_kin.back_stress[i]), 250.0, 1e-9);
            approx_eq(hist_kin.stiffness[i], young * hh / (young + hh), 1e-9);
        } else {
            assert_eq!(hist_kin.stiffness[i], young);
        }
    }

    // reverse yielding starts earlier with kinematic hardening
    let first_reverse_yield = |history: &History| {
        (101..history.len())
            .find(|i| !history.elastic[*i])
            .unwrap_or(history.len())
    };
    assert!(first_reverse_yield(&hist_kin) < first_reverse_yield(&hist_iso));

    // at the end of the same compressive excursion, the kinematic model carries less stress
    assert!(f64::abs(hist_kin.stress[300]) < f64::abs(hist_iso.stress[300]));
    Ok(())
}
