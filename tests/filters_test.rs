use encoder_speed::LowPassFilter;

#[test]
fn low_pass_initialization() {
    let filter = LowPassFilter::new();
    assert_eq!(filter.output(), 0.0);
    assert_eq!(filter.previous_input(), 0.0);
}

#[test]
fn low_pass_step_response() {
    let mut filter = LowPassFilter::new();

    // Step from 0.0 to 1.0
    let out1 = filter.apply(1.0);
    assert!((out1 - 0.1367).abs() < 1e-6, "Expected 0.1367, got {}", out1);

    let out2 = filter.apply(1.0);
    let expected = 0.7265 * 0.1367 + 0.1367 + 0.1367;
    assert!((out2 - expected).abs() < 1e-6, "Expected {}, got {}", expected, out2);

    // Monotonic rise towards the input
    let out3 = filter.apply(1.0);
    assert!(out3 > out2 && out3 < 1.0);
}

#[test]
fn low_pass_is_linear_in_sign() {
    let mut positive = LowPassFilter::new();
    let mut negative = LowPassFilter::new();

    for &sample in &[3.0, 5.5, -1.25, 8.0] {
        assert_eq!(negative.apply(-sample), -positive.apply(sample));
    }
}

#[test]
fn low_pass_filters_noise() {
    let mut filter = LowPassFilter::new();

    // Settle on the mean first so the step response does not dominate
    for _ in 0..50 {
        filter.apply(100.0);
    }

    // Noisy speed samples around 100 RPM
    let noisy_samples = [100.0, 112.0, 91.0, 104.0, 95.0, 109.0, 88.0, 101.0];
    let mut outputs = Vec::new();

    for &sample in &noisy_samples {
        outputs.push(filter.apply(sample));
    }

    // Check that variance of output is less than variance of input
    let input_variance = variance(&noisy_samples);
    let output_variance = variance(&outputs);

    assert!(output_variance < input_variance);
}

#[test]
fn low_pass_decays_to_zero_after_stop() {
    let mut filter = LowPassFilter::new();
    for _ in 0..100 {
        filter.apply(250.0);
    }

    let mut output = filter.output();
    for _ in 0..100 {
        output = filter.apply(0.0);
    }

    assert!(output.abs() < 1e-3, "Got {}", output);
}

#[test]
fn low_pass_reset() {
    let mut filter = LowPassFilter::new();
    filter.apply(40.0);
    filter.apply(-12.0);

    filter.reset();

    assert_eq!(filter.output(), 0.0);
    assert_eq!(filter.apply(2.0), 0.1367 * 2.0);
}

fn variance(data: &[f32]) -> f32 {
    let mean: f32 = data.iter().sum::<f32>() / data.len() as f32;
    let variance: f32 = data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / data.len() as f32;
    variance
}
