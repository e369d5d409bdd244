use approx::assert_relative_eq;

use pedon_soil::{
    Error, InputError,
    heat::{self, HeatProfileConfig, InitialTemperature},
    infiltration::{self, GreenAmpt, GreenAmptParameters, RootMethod},
    moisture::{self, BucketParameters, Forcing, MoistureBalance},
};

#[test]
fn bucket_three_days() {
    let params = BucketParameters {
        field_capacity: 0.3,
        wilting_point: 0.1,
        root_depth: 0.5,
        initial_moisture: 0.2,
    };

    let balance = moisture::simulate(&[10.0, 0.0, 5.0], &[2.0, 2.0, 2.0], &params).unwrap();

    assert_eq!(balance.len(), 3);
    assert!(balance.final_soil_moisture().unwrap() > 0.0);
    assert_relative_eq!(balance.final_soil_moisture().unwrap(), 0.212);
}

#[test]
fn green_ampt_one_hour() {
    let params = GreenAmptParameters {
        saturated_conductivity: 1e-5,
        suction_head: 0.15,
        initial_moisture: 0.2,
        saturated_moisture: 0.4,
    };

    let result = infiltration::solve(3600.0, &params).unwrap();

    assert!(result.cumulative > 0.0);
    assert!(result.cumulative > 0.036);
}

#[test]
fn heat_profile_three_levels() {
    let config = HeatProfileConfig {
        diffusivity: 2e-7,
        time_step: 3600.0,
        node_spacing: 0.1,
        nodes: 10,
    };

    let profile = heat::simulate(
        &InitialTemperature::Uniform(10.0),
        &[15.0, 16.0, 15.5],
        &config,
    )
    .unwrap();

    let grid = profile.grid();
    assert_eq!(grid.dim(), (10, 3));
    assert_eq!(grid[[0, 1]], 15.0);
    assert_eq!(grid[[9, 2]], grid[[8, 2]]);
}

#[test]
fn green_ampt_rejects_non_positive_moisture_deficit() {
    for (initial_moisture, saturated_moisture) in [(0.4, 0.4), (0.4, 0.2)] {
        let params = GreenAmptParameters {
            saturated_conductivity: 1e-5,
            suction_head: 0.15,
            initial_moisture,
            saturated_moisture,
        };

        let err = infiltration::solve(3600.0, &params).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InputError::NonPositiveMoistureDeficit { .. })
        ));
    }
}

#[test]
fn green_ampt_repeats_bit_identically_per_method() {
    let params = GreenAmptParameters {
        saturated_conductivity: 3e-6,
        suction_head: 0.25,
        initial_moisture: 0.15,
        saturated_moisture: 0.45,
    };

    for method in [RootMethod::Newton, RootMethod::Bisection] {
        let soil = GreenAmpt::new(params).unwrap().with_method(method);
        let times = [30.0, 900.0, 7200.0];

        let first = soil.cumulative_series(&times).unwrap();
        let second = soil.cumulative_series(&times).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.cumulative.to_bits(), b.cumulative.to_bits());
        }
    }
}

#[test]
fn growing_season_batch() {
    let bucket = MoistureBalance::new(BucketParameters {
        field_capacity: 0.32,
        wilting_point: 0.12,
        root_depth: 0.8,
        initial_moisture: 0.25,
    })
    .unwrap();

    let seasons: Vec<Forcing> = [0.5, 1.0, 2.0]
        .iter()
        .map(|&wetness| {
            let precipitation: Vec<f64> = (0..120)
                .map(|day| if day % 7 == 0 { 25.0 * wetness } else { 0.0 })
                .collect();
            Forcing::new(precipitation, vec![4.0; 120]).unwrap()
        })
        .collect();

    let results: Vec<_> = bucket
        .simulate_batch(&seasons)
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(results.len(), 3);
    for balance in &results {
        assert_eq!(balance.len(), 120);
        for record in balance {
            assert!((0.12..=0.32).contains(&record.soil_moisture));
            assert!(record.runoff >= 0.0);
        }
    }
    assert!(results[2].total_runoff() >= results[0].total_runoff());
    assert!(results[0].total_wilting_point_fill() >= results[2].total_wilting_point_fill());
}
