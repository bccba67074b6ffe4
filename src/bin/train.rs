use std::error::Error;
use std::path::Path;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use student_dashboard::data;
use student_dashboard::train;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let data_path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("data/student_dataset.csv");
    let out_dir = args.get(2).map(String::as_str).unwrap_or("model");

    if let Err(e) = run(data_path, out_dir) {
        error!("training failed: {e}");
        std::process::exit(1);
    }
}

fn run(data_path: &str, out_dir: &str) -> Result<(), Box<dyn Error>> {
    let records = data::load_dataset(data_path)?;
    info!("loaded {} student records from {data_path}", records.len());

    let (artifacts, report) = train::fit_artifacts(&records, 0.2)?;
    info!(
        "trained on {} records, held out {}",
        report.n_train, report.n_test
    );
    info!(
        "train MSE {:.3} | test MSE {:.3} | test R2 {:.3}",
        report.train_mse, report.test_mse, report.test_r2
    );

    artifacts.save(Path::new(out_dir))?;
    info!(
        "artifacts written to {out_dir}/ ({} features)",
        artifacts.n_features()
    );
    Ok(())
}
