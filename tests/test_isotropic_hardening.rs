use plast1d::prelude::*;
use plast1d::Error;
use russell_chk::{approx_eq, vec_approx_eq};

#[test]
fn test_isotropic_hardening() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();

    // parameters: H = 1 / (1/Et - 1/E) = 111.11
    let mut param = ParamMaterial::new();
    param.young(1000.0).tangent(100.0).y0(10.0);
    let model = make_material(Hardening::Isotropic, &param)?;
    approx_eq(model.parameters().hh(), 1.0 / (1.0 / 100.0 - 1.0 / 1000.0), 1e-10);

    // loading up to 5% strain, then unloading to zero
    let strains = build_strain_profile(&[0.0, 0.0, 0.0075, 0.03, 0.05, 0.0], &[1, 1, 1, 1, 1])?;
    assert_eq!(strains, &[0.0, 0.0, 0.0075, 0.03, 0.05, 0.0]);

    let (stress, plastic_strain) = integrate(&model, &strains);
    vec_approx_eq(&stress, &[0.0, 0.0, 7.5, 12.0, 14.0, -16.2], 1e-6);
    assert_eq!(plastic_strain.len(), strains.len());
    for i in 1..plastic_strain.len() {
        assert!(plastic_strain[i] >= plastic_strain[i - 1]);
    }
    Ok(())
}

#[test]
fn test_isotropic_hardening_refined_path() -> Result<(), Error> {
    let model = make_material(Hardening::Isotropic, &SampleParams::param_textbook())?;
    let hh = model.parameters().hh();

    // many small increments
    let profile = StrainProfile::new(&[0.0, 0.05, 0.0], &[200, 200])?;
    assert_eq!(profile.len(), 401);
    assert_eq!(*profile.strains.last().unwrap(), 0.0);

    let mut settings = Settings::new();
    settings.set_save_internal_values(true);
    let history = Driver::new(&model, settings).run_profile(&profile);
    assert_eq!(history.len(), profile.len());

    // monotonic loading follows the bilinear curve: σ = Y0 + Et (ε - Y0/E)
    approx_eq(history.stress[200], 10.0 + 100.0 * (0.05 - 0.01), 1e-9);

    // the yield stress follows Y = Y0 + H εp and plastic states lie on the yield surface
    for i in 0..history.len() {
        approx_eq(history.yield_stress[i], 10.0 + hh * history.plastic_strain[i], 1e-9);
        if !history.elastic[i] {
            approx_eq(f64::abs(history.stress[i]), history.yield_stress[i], 1e-9);
        }
        assert_eq!(history.back_stress[i], 0.0);
    }

    // unloading is elastic until σ = -Y
    let y_max = history.yield_stress[200];
    let n_elastic_unloading = history.elastic[201..].iter().take_while(|e| **e).count();
    let strain_reversal = 2.0 * y_max / 1000.0;
    let n_expected = f64::round(strain_reversal / (0.05 / 200.0)) as i64;
    assert!(i64::abs(n_elastic_unloading as i64 - n_expected) <= 1);
    Ok(())
}
