use super::*;

use approx::assert_relative_eq;

fn loam() -> BucketParameters {
    BucketParameters {
        field_capacity: 0.3,
        wilting_point: 0.1,
        root_depth: 0.5,
        initial_moisture: 0.2,
    }
}

#[test]
fn derived_depths() {
    let bucket = MoistureBalance::new(loam()).unwrap();

    assert_relative_eq!(bucket.depth_factor(), 500.0);
    assert_relative_eq!(bucket.field_capacity_depth(), 150.0);
    assert_relative_eq!(bucket.wilting_point_depth(), 50.0);
    assert_relative_eq!(bucket.available_water_capacity(), 100.0);
    assert_eq!(bucket.parameters(), loam());
}

#[test]
fn three_day_balance() {
    let balance = simulate(&[10.0, 0.0, 5.0], &[2.0, 2.0, 2.0], &loam()).unwrap();

    assert_eq!(balance.len(), 3);
    let days: Vec<_> = balance.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![1, 2, 3]);

    let moisture = balance.soil_moisture();
    assert_relative_eq!(moisture[0], 0.2);
    assert_relative_eq!(moisture[1], 0.216);
    assert_relative_eq!(moisture[2], 0.212);
    assert_eq!(balance.runoff(), vec![0.0; 3]);

    let first = balance.records()[0];
    assert_eq!(first.precipitation, 10.0);
    assert_eq!(first.evapotranspiration, 2.0);
}

#[test]
fn forcing_applies_one_day_late() {
    // Rain on the last day never reaches the bucket.
    let balance = simulate(&[0.0, 0.0, 80.0], &[0.0, 0.0, 0.0], &loam()).unwrap();

    for moisture in balance.soil_moisture() {
        assert_relative_eq!(moisture, 0.2);
    }
}

#[test]
fn excess_above_field_capacity_becomes_runoff() {
    let params = BucketParameters {
        initial_moisture: 0.3,
        ..loam()
    };
    let balance = simulate(&[0.0, 20.0, 0.0], &[0.0, 0.0, 0.0], &params).unwrap();

    let last = balance.records()[2];
    assert_relative_eq!(last.soil_moisture, 0.3);
    assert_relative_eq!(last.runoff, 20.0);
    assert_relative_eq!(balance.total_runoff(), 20.0);
    assert_relative_eq!(balance.total_wilting_point_fill(), 0.0);
}

#[test]
fn deficit_below_wilting_point_is_filled() {
    let params = BucketParameters {
        initial_moisture: 0.1,
        ..loam()
    };
    let balance = simulate(&[0.0, 0.0], &[10.0, 0.0], &params).unwrap();

    let last = balance.records()[1];
    assert_relative_eq!(last.soil_moisture, 0.1);
    assert_relative_eq!(last.wilting_point_fill, 10.0);
    assert_relative_eq!(last.runoff, 0.0);
}

#[test]
fn initial_moisture_below_wilting_point_is_lifted() {
    let params = BucketParameters {
        initial_moisture: 0.05,
        ..loam()
    };
    let balance = simulate(&[0.0], &[0.0], &params).unwrap();

    let first = balance.records()[0];
    assert_relative_eq!(first.soil_moisture, 0.1);
    assert_relative_eq!(first.wilting_point_fill, 25.0, epsilon = 1e-9);
}

#[test]
fn moisture_stays_within_limits() {
    let days = 365;
    let precipitation: Vec<f64> = (0..days)
        .map(|d| if d % 9 < 2 { 40.0 + f64::from(d % 13) } else { 0.0 })
        .collect();
    let evapotranspiration: Vec<f64> = (0..days)
        .map(|d| 3.0 + 2.5 * (f64::from(d) * 0.0172).sin())
        .collect();

    let balance = simulate(&precipitation, &evapotranspiration, &loam()).unwrap();
    assert_eq!(balance.len(), 365);

    let mut previous_storage = 0.2 * 500.0;
    for (record, day) in balance.iter().zip(0_usize..) {
        assert!((0.1..=0.3).contains(&record.soil_moisture), "day {day}");
        assert!(record.runoff >= 0.0);
        assert!(record.wilting_point_fill >= 0.0);
        let raw = day.checked_sub(1).map(|d| {
            previous_storage + precipitation[d] - evapotranspiration[d]
        });
        if let Some(raw) = raw.filter(|raw| (raw - 150.0).abs() > 1e-9) {
            assert_eq!(record.runoff > 0.0, raw > 150.0, "day {day}");
        }
        previous_storage = record.soil_moisture * 500.0;
    }
}

#[test]
fn repeated_runs_are_identical() {
    let first = simulate(&[10.0, 0.0, 5.0], &[2.0, 2.0, 2.0], &loam()).unwrap();
    let second = simulate(&[10.0, 0.0, 5.0], &[2.0, 2.0, 2.0], &loam()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = simulate(&[10.0, 0.0], &[2.0], &loam()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InputError::LengthMismatch {
            precipitation: 2,
            evapotranspiration: 1,
        })
    ));
}

#[test]
fn empty_forcing_is_rejected() {
    let err = simulate(&[], &[], &loam()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidInput(InputError::EmptySeries {
            name: "precipitation"
        })
    ));
}

#[test]
fn invalid_parameters_are_rejected() {
    let inverted = BucketParameters {
        field_capacity: 0.1,
        wilting_point: 0.3,
        ..loam()
    };
    assert!(matches!(
        MoistureBalance::new(inverted),
        Err(InputError::MoistureLimits { .. })
    ));

    let shallow = BucketParameters {
        root_depth: 0.0,
        ..loam()
    };
    assert!(matches!(
        MoistureBalance::new(shallow),
        Err(InputError::Parameter {
            name: "root_depth",
            ..
        })
    ));

    let wet = BucketParameters {
        initial_moisture: 0.35,
        ..loam()
    };
    assert!(matches!(
        MoistureBalance::new(wet),
        Err(InputError::InitialAboveFieldCapacity { .. })
    ));

    let negative = BucketParameters {
        wilting_point: -0.1,
        ..loam()
    };
    assert!(MoistureBalance::try_from(negative).is_err());
}

#[test]
fn batch_matches_sequential_runs() {
    let bucket = MoistureBalance::new(loam()).unwrap();
    let forcings: Vec<Forcing> = (0..8)
        .map(|k| {
            let rain = f64::from(k) * 5.0;
            Forcing::new(vec![rain, 0.0, rain, 1.0], vec![2.0, 3.0, 2.0, 1.0]).unwrap()
        })
        .collect();

    let batch = bucket.simulate_batch(&forcings);

    assert_eq!(batch.len(), forcings.len());
    for (result, forcing) in batch.into_iter().zip(&forcings) {
        assert_eq!(result.unwrap(), bucket.simulate(forcing).unwrap());
    }
}

#[test]
fn records_serialize_with_column_names() {
    let balance = simulate(&[10.0], &[2.0], &loam()).unwrap();
    let json = serde_json::to_value(&balance).unwrap();

    let row = &json[0];
    assert_eq!(row["Day"], 1);
    assert_eq!(row["Precipitation"], 10.0);
    assert_eq!(row["ET"], 2.0);
    assert_eq!(row["SoilMoisture"], 0.2);
    assert_eq!(row["Runoff"], 0.0);
    assert_eq!(row["WiltingPointFill"], 0.0);
}

#[test]
fn parameters_reject_unknown_keys() {
    let json = r#"{
        "field_capacity": 0.3,
        "wilting_point": 0.1,
        "root_depth": 0.5,
        "initial_moisture": 0.2,
        "porosity": 0.45
    }"#;
    assert!(serde_json::from_str::<BucketParameters>(json).is_err());
}
