use std::convert::Infallible;

use delphi_bootstrap::{BootstrapConfig, Column, Dataset, FittedModel, estimate_intervals};

fn make_data() -> Dataset {
    Dataset::new()
        .with_column(
            "x",
            Column::Numeric((0..40).map(|i| (f64::from(i) * 1.3).sin() * 10.0).collect()),
        )
        .unwrap()
}

fn mean_fit(d: &Dataset) -> Result<FittedModel, Infallible> {
    let x = d.numeric("x").expect("column exists");
    Ok(FittedModel::from_terms([(
        "mean_x",
        x.iter().sum::<f64>() / x.len() as f64,
    )]))
}

#[test]
fn same_seed_is_bit_identical() {
    let data = make_data();
    let config = BootstrapConfig::new()
        .with_num_resamples(200)
        .with_keep_replicates(true)
        .with_seed(42);
    let a = estimate_intervals(&data, mean_fit, &config).unwrap();
    let b = estimate_intervals(&data, mean_fit, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let data = make_data();
    let a = estimate_intervals(
        &data,
        mean_fit,
        &BootstrapConfig::new().with_num_resamples(200).with_seed(1),
    )
    .unwrap();
    let b = estimate_intervals(
        &data,
        mean_fit,
        &BootstrapConfig::new().with_num_resamples(200).with_seed(2),
    )
    .unwrap();
    let (ra, rb) = (a.get("mean_x").unwrap(), b.get("mean_x").unwrap());
    assert!(ra.lower() != rb.lower() || ra.upper() != rb.upper());
}

#[test]
fn shared_prefix_across_resample_counts() {
    // Per-replicate sub-streams mean replicate i is the same draw whether
    // the run asks for 100 or 400 resamples.
    let data = make_data();
    let short = estimate_intervals(
        &data,
        mean_fit,
        &BootstrapConfig::new()
            .with_num_resamples(100)
            .with_keep_replicates(true)
            .with_seed(42),
    )
    .unwrap();
    let long = estimate_intervals(
        &data,
        mean_fit,
        &BootstrapConfig::new()
            .with_num_resamples(400)
            .with_keep_replicates(true)
            .with_seed(42),
    )
    .unwrap();
    let short_reps = short.get("mean_x").unwrap().replicates().unwrap();
    let long_reps = long.get("mean_x").unwrap().replicates().unwrap();
    assert_eq!(short_reps, &long_reps[..100]);
}

#[test]
fn intervals_stabilise_with_more_resamples() {
    // At B=2000 the Monte Carlo error on the bounds is a small fraction of
    // the interval width, so two unrelated seeds agree loosely.
    let data = make_data();
    let run = |seed: u64| {
        estimate_intervals(
            &data,
            mean_fit,
            &BootstrapConfig::new()
                .with_num_resamples(2000)
                .with_seed(seed),
        )
        .unwrap()
    };
    let (a, b) = (run(11), run(97));
    let (ra, rb) = (a.get("mean_x").unwrap(), b.get("mean_x").unwrap());
    let width = ra.upper() - ra.lower();
    assert!(width > 0.0);
    assert!((ra.lower() - rb.lower()).abs() < width / 4.0);
    assert!((ra.upper() - rb.upper()).abs() < width / 4.0);
}
