//! End-to-end pipeline test over a synthetic labeled IMU trace.

use fallprep::config::PipelineConfig;
use fallprep::core::{stratified_split, ClassBalancer, ConfusionMatrix, DatasetBuilder, ScalerParams, ThresholdCalibrator};
use fallprep::trace::load_csv;
use std::io::Write;

/// 500 rows at 50 Hz: 200 "fall" rows followed by 300 "normal" rows.
fn write_fixture_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "xAcc,yAcc,zAcc,xGyro,yGyro,zGyro,label").expect("header");
    for i in 0..500 {
        let (acc, gyro, label) = if i < 200 {
            // impact-like burst
            (15.0 + (i % 7) as f64, 180.0, "fall")
        } else {
            // quiet standing
            (0.2 + (i % 3) as f64 * 0.1, 2.0, "normal")
        };
        writeln!(
            file,
            "{a},{a},{a},{g},{g},{g},{label}",
            a = acc,
            g = gyro,
            label = label
        )
        .expect("row");
    }
    file
}

#[test]
fn test_end_to_end_fixture() {
    let config = PipelineConfig::default();
    assert_eq!(config.window_len(), 100);
    assert_eq!(config.stride(), 50);

    let file = write_fixture_csv();
    let trace = load_csv(file.path()).expect("load");
    assert_eq!(trace.len(), 500);

    let builder = DatasetBuilder::from_config(&config);
    let dataset = builder.build(&trace);

    // floor((500 - 100) / 50) + 1 = 9 windows
    assert_eq!(dataset.len(), 9);
    assert!(dataset.features.iter().all(|f| f.len() == 44));

    // Window starts 0..400 step 50. The window at 150 straddles the
    // boundary 50/50 and takes its first sample's label ("fall"); the
    // label transitions 1 -> 0 exactly once, at the 200-start window.
    assert_eq!(dataset.labels, vec![1, 1, 1, 1, 0, 0, 0, 0, 0]);

    // ratio 5/4 = 1.25 <= 1.5: the balancer is the identity here
    let balanced = ClassBalancer::new(config.balance.clone()).balance(&dataset);
    assert_eq!(balanced.features, dataset.features);
    assert_eq!(balanced.labels, dataset.labels);

    let (train, validation) = stratified_split(&balanced, &config.split);
    assert_eq!(train.len() + validation.len(), 9);
    assert!(!train.is_empty());

    // Normalize: fit on train only, apply the frozen params everywhere
    let scaler = ScalerParams::fit(&train.features);
    let train_scaled = scaler.apply(&train.features);
    for feature in 0..44 {
        let n = train_scaled.len() as f64;
        let mean: f64 = train_scaled.iter().map(|r| r[feature]).sum::<f64>() / n;
        assert!(mean.abs() < 1e-9);
    }
    let validation_scaled = scaler.apply(&validation.features);
    assert_eq!(validation_scaled.len(), validation.len());

    // A well-separated model: probability equals the true label
    let probabilities: Vec<f64> = validation.labels.iter().map(|&l| l as f64).collect();
    let calibrator = ThresholdCalibrator::new(config.threshold.clone());
    let best = calibrator.calibrate(&validation.labels, &probabilities);
    let f1 = ConfusionMatrix::at_threshold(&validation.labels, &probabilities, best).f1_score();
    assert!((f1 - 1.0).abs() < 1e-9);
}

#[test]
fn test_trace_shorter_than_window_is_empty_not_error() {
    let config = PipelineConfig::default();
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "xAcc,yAcc,zAcc,xGyro,yGyro,zGyro,label").expect("header");
    for _ in 0..99 {
        writeln!(file, "0.1,0.1,9.8,1.0,1.0,1.0,normal").expect("row");
    }

    let trace = load_csv(file.path()).expect("load");
    let dataset = DatasetBuilder::from_config(&config).build(&trace);
    assert!(dataset.is_empty());

    // downstream stages tolerate the empty dataset
    let balanced = ClassBalancer::new(config.balance.clone()).balance(&dataset);
    assert!(balanced.is_empty());
    let (train, validation) = stratified_split(&balanced, &config.split);
    assert!(train.is_empty() && validation.is_empty());
    let scaler = ScalerParams::fit(&train.features);
    assert!(scaler.mean.is_empty());
}
