use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use trapezoid::configuration::Configuration;
use trapezoid::math::integration::concurrenttrapezoid::trapezoid_con;
use trapezoid::math::integration::integrationerror::IntegrationError;
use trapezoid::math::integration::sequentialtrapezoid::trapezoid_seq;

fn run(config: Option<Configuration>) -> Result<(), IntegrationError> {
    let (seq_nodes, con_nodes, workers) = match config {
        Some(config) => (config.nodes(), config.nodes(), config.workers()),
        None => (1_000_000, 100_000, 8),
    };

    let square = trapezoid_seq(|x: f64| x.powi(2), -5.0, 5.0, seq_nodes)?;
    println!("{}", square);

    let wave = trapezoid_con(|x: f64| (12.0 * x).sin(), 0.0, 10.0, con_nodes, workers)?;
    println!("{}", wave);

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::args().nth(1) {
        Some(path) => match Configuration::from_file(&path) {
            Ok(config) => Some(config),
            Err(error) => {
                tracing::error!(%path, %error, "cannot load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "integration failed");
            ExitCode::FAILURE
        }
    }
}
