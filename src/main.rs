//! Fallprep CLI
//!
//! Raw IMU CSV in, trainer-ready splits and a deploy artifact out.

use chrono::Utc;
use clap::{Parser, Subcommand};
use fallprep::config::PipelineConfig;
use fallprep::core::{
    roc_auc, stratified_split, ClassBalancer, ConfusionMatrix, DatasetBuilder, ScalerParams,
    ThresholdCalibrator,
};
use fallprep::export::{read_predictions, DeployArtifact, SplitExport};
use fallprep::{trace, VERSION};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fallprep")]
#[command(version = VERSION)]
#[command(about = "Training-data pipeline for embedded IMU fall detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build normalized train/validation splits from a raw IMU trace
    Build {
        /// Input CSV (xAcc,yAcc,zAcc,xGyro,yGyro,zGyro,label)
        #[arg(long)]
        csv: PathBuf,

        /// Output directory for splits and scaler parameters
        #[arg(long, short, default_value = "artifacts")]
        output: PathBuf,

        /// Balance only the training split (split first, then oversample)
        #[arg(long)]
        balance_after_split: bool,
    },

    /// Calibrate the decision threshold from validation predictions
    Calibrate {
        /// CSV of validation predictions (label,probability)
        #[arg(long)]
        predictions: PathBuf,

        /// Scaler parameters produced by `build` (defaults to
        /// <output>/scaler.json)
        #[arg(long)]
        scaler: Option<PathBuf>,

        /// Output directory for the deploy artifact
        #[arg(long, short, default_value = "artifacts")]
        output: PathBuf,
    },

    /// Show configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            csv,
            output,
            balance_after_split,
        } => cmd_build(&csv, &output, balance_after_split),
        Commands::Calibrate {
            predictions,
            scaler,
            output,
        } => cmd_calibrate(&predictions, scaler, &output),
        Commands::Config => cmd_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_build(
    csv: &PathBuf,
    output: &PathBuf,
    balance_after_split: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = PipelineConfig::load()?;
    config.validate()?;

    println!("Fallprep v{VERSION}");
    println!(
        "  Window: {}s @ {} Hz = {} samples, stride {}",
        config.window_seconds,
        config.sample_rate_hz,
        config.window_len(),
        config.stride()
    );
    println!("  Target label: {:?}", config.target_label);
    println!();

    let trace = trace::load_csv(csv)?;
    println!("[{}] Loaded rows: {}", now(), trace.len());

    let builder = DatasetBuilder::from_config(&config);
    let dataset = builder.build(&trace);
    println!(
        "[{}] Windows built: {} | feature_dim: {}",
        now(),
        dataset.len(),
        builder.feature_len()
    );
    if dataset.is_empty() {
        println!("Trace is shorter than one window; nothing to export.");
        return Ok(());
    }

    let (n0, n1) = dataset.class_counts();
    println!("Label distribution (0=not_fall, 1=fall): {{0: {n0}, 1: {n1}}}");

    let balancer = ClassBalancer::new(config.balance.clone());
    let (train, validation) = if balance_after_split {
        // Corrected ordering: augmented copies stay out of validation
        let (train, validation) = stratified_split(&dataset, &config.split);
        let train = balancer.balance(&train);
        (train, validation)
    } else {
        let balanced = balancer.balance(&dataset);
        if balanced.len() > dataset.len() {
            println!("Balanced dataset: {} windows (augmented falls)", balanced.len());
        }
        stratified_split(&balanced, &config.split)
    };
    println!(
        "Train windows: {} | Validation windows: {}",
        train.len(),
        validation.len()
    );

    let scaler = ScalerParams::fit(&train.features);
    let mut train_scaled = train.clone();
    train_scaled.features = scaler.apply(&train.features);
    let mut validation_scaled = validation.clone();
    validation_scaled.features = scaler.apply(&validation.features);
    println!("Standardization done (mean/std per feature).");

    let feature_names = builder.feature_names();
    SplitExport::new(feature_names.clone(), &train_scaled).save(&output.join("train.json"))?;
    SplitExport::new(feature_names, &validation_scaled).save(&output.join("validation.json"))?;

    let scaler_json = serde_json::to_string_pretty(&scaler)?;
    std::fs::create_dir_all(output)?;
    std::fs::write(output.join("scaler.json"), scaler_json)?;

    println!();
    println!("Saved splits & scaler to {output:?}");
    println!("  - train.json");
    println!("  - validation.json");
    println!("  - scaler.json");
    println!();
    println!("Train your classifier on train.json, predict validation.json,");
    println!("then run `fallprep calibrate` with the predictions CSV.");
    Ok(())
}

fn cmd_calibrate(
    predictions: &PathBuf,
    scaler: Option<PathBuf>,
    output: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = PipelineConfig::load()?;

    let (labels, probabilities) = read_predictions(predictions)?;
    println!("Loaded {} validation predictions", labels.len());

    print_metrics(&labels, &probabilities, 0.5, "Validation @0.50");

    println!();
    println!("[Threshold sweep] trying thresholds:");
    let calibrator = ThresholdCalibrator::new(config.threshold.clone());
    for point in calibrator.sweep(&labels, &probabilities) {
        println!("  th={:.2} -> F1={:.4}", point.threshold, point.f1);
    }
    let best = calibrator.calibrate(&labels, &probabilities);
    println!("Best threshold by F1: {best:.2}");

    print_metrics(
        &labels,
        &probabilities,
        best,
        &format!("Validation @{best:.2}"),
    );

    let scaler_path = scaler.unwrap_or_else(|| output.join("scaler.json"));
    let scaler_json = std::fs::read_to_string(&scaler_path)?;
    let scaler_params: ScalerParams = serde_json::from_str(&scaler_json)?;

    let artifact = DeployArtifact::new(&scaler_params, best);
    let artifact_path = output.join("deploy.json");
    artifact.save(&artifact_path)?;

    println!();
    println!("Saved deploy artifact to {artifact_path:?}");
    println!("Embed the threshold in firmware as the fall-probability cutoff.");
    Ok(())
}

fn cmd_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = PipelineConfig::load()?;

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", PipelineConfig::config_path());
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn print_metrics(labels: &[u8], probabilities: &[f64], threshold: f64, title: &str) {
    let m = ConfusionMatrix::at_threshold(labels, probabilities, threshold);

    println!();
    println!("[{title}] threshold={threshold:.2}");
    println!("  Accuracy : {:.4}", m.accuracy());
    println!("  Precision: {:.4}", m.precision());
    println!("  Recall   : {:.4}", m.recall());
    println!("  F1-score : {:.4}", m.f1_score());
    match roc_auc(labels, probabilities) {
        Some(auc) => println!("  ROC-AUC  : {auc:.4}"),
        None => println!("  ROC-AUC  : undefined (single class in labels)"),
    }
    println!(
        "  TN={}  FP={}  FN={}  TP={}",
        m.true_negatives, m.false_positives, m.false_negatives, m.true_positives
    );
}

fn now() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}
