use super::*;

use approx::assert_relative_eq;

fn loam() -> HeatProfileConfig {
    HeatProfileConfig {
        diffusivity: 2e-7,
        time_step: 3600.0,
        node_spacing: 0.1,
        nodes: 10,
    }
}

#[test]
fn three_level_run() {
    let profile = simulate(
        &InitialTemperature::Uniform(10.0),
        &[15.0, 16.0, 15.5],
        &loam(),
    )
    .unwrap();

    assert_eq!(profile.shape(), (10, 3));
    assert_eq!(profile.get(0, 1), Some(15.0));
    assert_eq!(profile.get(0, 2), Some(16.0));
    assert_eq!(profile.get(9, 2), profile.get(8, 2));
    assert_relative_eq!(profile.alpha(), 0.072, max_relative = 1e-12);
    assert!(profile.stability().is_stable());

    // Initial column is untouched.
    assert_eq!(profile.column(0).unwrap().to_vec(), vec![10.0; 10]);

    // Only the node below the surface sees the first surface value.
    let alpha = profile.alpha();
    assert_relative_eq!(profile.get(1, 1).unwrap(), 10.0);
    assert_relative_eq!(profile.get(1, 2).unwrap(), 10.0 + alpha * 5.0);
    assert_relative_eq!(profile.get(2, 2).unwrap(), 10.0);
}

#[test]
fn boundaries_hold_at_every_level() {
    let surface: Vec<f64> = (0..48)
        .map(|h| 12.0 + 8.0 * (f64::from(h) * std::f64::consts::PI / 12.0).sin())
        .collect();
    let initial = InitialTemperature::Profile((0..10).map(|i| 9.0 + 0.2 * f64::from(i)).collect());

    let profile = simulate(&initial, &surface, &loam()).unwrap();

    assert_eq!(profile.shape(), (10, 48));
    for j in 1..48 {
        assert_eq!(profile.get(0, j), Some(surface[j - 1]), "level {j}");
        assert_eq!(profile.get(9, j), profile.get(8, j), "level {j}");
    }
}

#[test]
fn interior_relaxes_toward_a_constant_surface() {
    let config = HeatProfileConfig {
        time_step: 10_000.0,
        ..loam()
    };
    let surface = vec![20.0; 2000];

    let profile = simulate(&InitialTemperature::Uniform(5.0), &surface, &config).unwrap();

    for t in profile.last_column() {
        assert_relative_eq!(*t, 20.0, epsilon = 1e-3);
    }
}

#[test]
fn single_value_series_keeps_the_initial_profile() {
    let initial = InitialTemperature::Profile(vec![11.0, 10.0, 9.0]);
    let config = HeatProfileConfig { nodes: 3, ..loam() };

    let profile = simulate(&initial, &[30.0], &config).unwrap();

    assert_eq!(profile.shape(), (3, 1));
    assert_eq!(profile.column(0).unwrap().to_vec(), vec![11.0, 10.0, 9.0]);
}

#[test]
fn unstable_runs_complete_with_a_flag() {
    let config = HeatProfileConfig {
        time_step: 36_000.0,
        ..loam()
    };

    let profile = simulate(&InitialTemperature::Uniform(10.0), &[15.0; 5], &config).unwrap();

    assert_eq!(profile.shape(), (10, 5));
    assert!(!profile.stability().is_stable());
    assert_relative_eq!(profile.alpha(), 0.72, max_relative = 1e-12);
}

#[test]
fn repeated_runs_are_identical() {
    let run = || simulate(&InitialTemperature::Uniform(10.0), &[15.0, 16.0, 15.5], &loam());
    assert_eq!(run().unwrap(), run().unwrap());
}

#[test]
fn invalid_inputs_are_rejected() {
    let uniform = InitialTemperature::Uniform(10.0);

    let err = simulate(&uniform, &[], &loam()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InputError::EmptySeries { .. })
    ));

    let short = HeatProfileConfig { nodes: 2, ..loam() };
    let err = simulate(&uniform, &[15.0], &short).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InputError::TooFewNodes { nodes: 2 })
    ));

    let err = simulate(&InitialTemperature::Profile(vec![10.0; 4]), &[15.0], &loam()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InputError::ProfileLength {
            expected: 10,
            actual: 4
        })
    ));

    let frozen = HeatProfileConfig {
        diffusivity: 0.0,
        ..loam()
    };
    assert!(HeatConduction::try_from(frozen).is_err());
}

#[test]
fn initial_temperature_deserializes_from_number_or_list() {
    let uniform: InitialTemperature = serde_json::from_str("10.0").unwrap();
    assert_eq!(uniform, InitialTemperature::Uniform(10.0));

    let profile: InitialTemperature = serde_json::from_str("[10.0, 11.0, 12.0]").unwrap();
    assert_eq!(profile, InitialTemperature::Profile(vec![10.0, 11.0, 12.0]));
}
