//! Behavioural properties of thinning-based generation

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spikegen::{
    generate_spikes, generate_spikes_seeded, sample_candidates, BoundPolicy, ConstantIntensity,
    SpikeGenError, SpikeGenerator, ThinningParams,
};

fn identity(times: &[f64]) -> Vec<f64> {
    times.to_vec()
}

/// Rate ramps linearly from 0 to `max` over the unit interval
fn ramp(xs: &[f64], _ts: &[f64]) -> Vec<f64> {
    xs.iter().map(|x| 8.0 * x).collect()
}

#[test]
fn zero_duration_is_empty() {
    for seed in 0..50 {
        let train = generate_spikes_seeded(&ConstantIntensity(3.0), 10.0, &identity, 0.0, seed).unwrap();
        assert!(train.is_empty());
        assert_eq!(train.duration(), 0.0);
    }
}

#[test]
fn zero_rate_is_empty() {
    for seed in 0..50 {
        let train = generate_spikes_seeded(&ConstantIntensity(0.0), 0.0, &identity, 5.0, seed).unwrap();
        assert!(train.is_empty());
    }
}

#[test]
fn negative_inputs_fail() {
    assert!(generate_spikes_seeded(&ConstantIntensity(1.0), -1.0, &identity, 1.0, 0).is_err());
    assert!(generate_spikes_seeded(&ConstantIntensity(1.0), 1.0, &identity, -1.0, 0).is_err());
}

#[test]
fn oversized_window_is_an_error_not_a_panic() {
    assert!(ThinningParams::new(1e15, 1e10).is_err());
    let err = generate_spikes_seeded(&ConstantIntensity(1.0), 1e15, &identity, 1e10, 1).unwrap_err();
    assert!(matches!(err, SpikeGenError::InvalidParameter { .. }), "unexpected error: {}", err);
}

#[test]
fn homogeneous_reduction_keeps_all_candidates() {
    let max_rate = 30.0;
    let total_time = 4.0;
    let seed = 2024;

    let train =
        generate_spikes_seeded(&ConstantIntensity(max_rate), max_rate, &identity, total_time, seed).unwrap();
    let candidates = sample_candidates(&mut StdRng::seed_from_u64(seed), max_rate, total_time).unwrap();

    assert_eq!(train.times(), candidates.as_slice());
}

#[test]
fn fixed_seed_is_deterministic() {
    let a = generate_spikes_seeded(&ramp, 8.0, &identity, 1.0, 77).unwrap();
    let b = generate_spikes_seeded(&ramp, 8.0, &identity, 1.0, 77).unwrap();
    assert_eq!(a, b);

    let mut rng1 = StdRng::seed_from_u64(5);
    let mut rng2 = StdRng::seed_from_u64(5);
    let c = generate_spikes(&ramp, 8.0, &identity, 1.0, &mut rng1).unwrap();
    let d = generate_spikes(&ramp, 8.0, &identity, 1.0, &mut rng2).unwrap();
    assert_eq!(c, d);
}

#[test]
fn mean_count_calibrates_to_intensity() {
    let _ = env_logger::builder().is_test(true).try_init();

    // λ = 5 under a dominating rate of 10 on [0, 1): counts are Poisson(5)
    let trials = 2000;
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let total: usize = (0..trials)
        .map(|_| {
            generate_spikes(&ConstantIntensity(5.0), 10.0, &identity, 1.0, &mut rng)
                .unwrap()
                .len()
        })
        .sum();

    let mean = total as f64 / trials as f64;
    let std_err = (5.0f64 / trials as f64).sqrt();
    assert!((mean - 5.0).abs() < 3.0 * std_err, "mean {} (se {})", mean, std_err);
}

#[test]
fn spikes_follow_the_intensity_profile() {
    // Ramp intensity: the second half of the window should hold ~3x the first
    let mut rng = StdRng::seed_from_u64(31);
    let (mut early, mut late) = (0usize, 0usize);
    for _ in 0..2000 {
        let train = generate_spikes(&ramp, 8.0, &identity, 1.0, &mut rng).unwrap();
        early += train.count_in(0.0, 0.5);
        late += train.count_in(0.5, 1.0);
    }
    let ratio = late as f64 / early as f64;
    assert!((2.5..3.5).contains(&ratio), "late/early ratio {}", ratio);
}

#[test]
fn warn_policy_matches_ignore() {
    let run = |policy| {
        let params = ThinningParams::new(4.0, 10.0)
            .unwrap()
            .with_seed(12)
            .with_bound_policy(policy);
        SpikeGenerator::from_params(params)
            .unwrap()
            .generate_with_report(&ConstantIntensity(6.0), &identity)
            .unwrap()
    };

    let ignored = run(BoundPolicy::Ignore);
    let warned = run(BoundPolicy::Warn);
    assert_eq!(ignored, warned);
    assert_eq!(ignored.bound_violations, ignored.candidate_count);
    assert_eq!(ignored.accepted_count(), ignored.candidate_count);
}

#[test]
fn positions_pass_through_to_intensity() {
    // Two-dimensional positions: only the y coordinate drives the rate
    let trajectory = |ts: &[f64]| ts.iter().map(|&t| (t, 1.0 - t)).collect::<Vec<(f64, f64)>>();
    let by_y = |ps: &[(f64, f64)], _ts: &[f64]| ps.iter().map(|&(_, y)| if y > 0.5 { 100.0 } else { 0.0 }).collect::<Vec<f64>>();

    let train = generate_spikes_seeded(&by_y, 100.0, &trajectory, 1.0, 3).unwrap();
    assert!(!train.is_empty());
    assert!(train.iter().all(|&t| t < 0.5));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_sorted_within_window(
        seed in any::<u64>(),
        max_rate in 0.0f64..200.0,
        total_time in 0.0f64..5.0,
        fraction in 0.0f64..=1.0,
    ) {
        let train = generate_spikes_seeded(
            &ConstantIntensity(fraction * max_rate), max_rate, &identity, total_time, seed,
        ).unwrap();

        prop_assert!(train.times().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(train.iter().all(|&t| t >= 0.0 && t < total_time));
    }

    #[test]
    fn output_is_subsequence_of_candidates(
        seed in any::<u64>(),
        max_rate in 0.1f64..100.0,
        total_time in 0.1f64..3.0,
    ) {
        let train = generate_spikes_seeded(&ramp, max_rate, &identity, total_time, seed).unwrap();
        let candidates = sample_candidates(&mut StdRng::seed_from_u64(seed), max_rate, total_time).unwrap();

        prop_assert!(train.len() <= candidates.len());
        let mut remaining = candidates.iter();
        for t in train.iter() {
            prop_assert!(remaining.any(|c| c == t), "{} not found in candidate order", t);
        }
    }
}
