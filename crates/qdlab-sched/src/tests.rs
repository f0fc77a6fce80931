use std::collections::HashSet;
use std::path::Path;

use enum_iterator::IntoEnumIterator;
use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::association::AssociationMode;
use crate::combinations::{num_combinations, station_combinations};
use crate::output::combination_folder;
use crate::scenario::Scenario;
use crate::scheduler::TransmissionParams;

#[test]
fn station_universe() {
    let scenario = Scenario::new(1, 4, 3);
    assert_eq!(scenario.nb_stations(), 3);
    assert_eq!(scenario.station_ids(), vec![1, 2, 3]);

    let mut rng = Pcg64::seed_from_u64(1);
    for _ in 0..100 {
        let nb_aps = rng.gen_range(1..5);
        let nb_stations = rng.gen_range(1..10);
        let scenario = Scenario::new(nb_aps, nb_aps + nb_stations, nb_stations);
        let ids = scenario.station_ids();
        assert_eq!(ids.len(), nb_stations);
        assert_eq!(ids[0], nb_aps);
        assert_eq!(*ids.last().unwrap(), nb_aps + nb_stations - 1);
    }
}

#[test]
#[should_panic(expected = "Can't schedule")]
fn too_many_scheduled_stations() {
    Scenario::new(2, 5, 4);
}

#[test]
#[should_panic(expected = "at least one station")]
fn no_stations() {
    Scenario::new(3, 3, 1);
}

#[test]
fn binomial_coefficients() {
    assert_eq!(num_combinations(5, 0), 1);
    assert_eq!(num_combinations(5, 2), 10);
    assert_eq!(num_combinations(5, 5), 1);
    assert_eq!(num_combinations(3, 5), 0);
    assert_eq!(num_combinations(20, 10), 184756);
    for n in 0..15 {
        for k in 0..=n {
            assert_eq!(num_combinations(n, k), num_combinations(n, n - k));
        }
    }
}

#[test]
fn combination_count_matches_binomial() {
    let mut rng = Pcg64::seed_from_u64(2);
    for _ in 0..50 {
        let nb_aps = rng.gen_range(1..4);
        let nb_stations = rng.gen_range(1..10);
        let scenario = Scenario::new(nb_aps, nb_aps + nb_stations, nb_stations);
        let size = rng.gen_range(1..=nb_stations);
        let combinations = station_combinations(&scenario.station_ids(), size);
        assert_eq!(combinations.len(), num_combinations(nb_stations, size));
        for combination in combinations.iter() {
            assert_eq!(combination.len(), size);
            assert!(combination.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn combinations_are_lexicographic() {
    let combinations = station_combinations(&[1, 2, 3, 4], 2);
    assert_eq!(
        combinations,
        vec![
            vec![1, 2],
            vec![1, 3],
            vec![1, 4],
            vec![2, 3],
            vec![2, 4],
            vec![3, 4]
        ]
    );
    assert!(combinations.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn association_mode_labels() {
    let modes: Vec<AssociationMode> = AssociationMode::into_enum_iter().collect();
    assert_eq!(modes, vec![AssociationMode::BestAp, AssociationMode::SameAp]);
    assert_eq!(AssociationMode::BestAp.to_string(), "BEST_AP");
    assert_eq!(AssociationMode::SameAp.to_string(), "SAME_AP");
}

#[test]
fn all_stations_folder() {
    // the full combination gets a fixed name regardless of its members
    let folder = combination_folder(Path::new("out"), AssociationMode::BestAp, &[1, 2, 3], 3);
    assert_eq!(folder, Path::new("out").join("BEST_AP").join("AllSTAs"));
    let folder = combination_folder(Path::new("out"), AssociationMode::SameAp, &[4, 7, 9], 3);
    assert_eq!(folder, Path::new("out").join("SAME_AP").join("AllSTAs"));
}

#[test]
fn partial_combination_folders_are_unique() {
    let folder = combination_folder(Path::new("out"), AssociationMode::BestAp, &[1, 2], 4);
    assert_eq!(folder, Path::new("out").join("BEST_AP").join("2STAs_1_2"));

    let scenario = Scenario::new(1, 7, 6);
    let mut seen = HashSet::new();
    for size in 1..scenario.nb_stations() {
        for combination in station_combinations(&scenario.station_ids(), size) {
            for mode in AssociationMode::into_enum_iter() {
                let folder = combination_folder(Path::new("out"), mode, &combination, scenario.nb_stations());
                assert!(seen.insert(folder), "duplicate folder for {:?} {:?}", mode, combination);
            }
        }
    }
}

#[test]
fn transmission_params_typed_access() {
    let mut params = TransmissionParams::new();
    assert!(params.is_empty());
    params.set("mcs", 12);
    params.set("allocation_period_us", 1000);
    params.set("label", "office");
    assert_eq!(params.get::<u32, _>("mcs"), Some(12));
    assert_eq!(params.get::<f64, _>("allocation_period_us"), Some(1000.));
    assert_eq!(params.get::<String, _>("label"), Some("office".to_string()));
    assert_eq!(params.get::<u32, _>("label"), None);
    assert_eq!(params.get::<u32, _>("missing"), None);
    assert_eq!(params.to_string(), "allocation_period_us=1000,label=office,mcs=12");
}
