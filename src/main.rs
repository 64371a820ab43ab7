//! Gateway API entry point.
//!
//! Assembles the configuration before anything else starts; a
//! misconfigured environment aborts the process instead of running a
//! service on partial settings.

use std::process::ExitCode;

use gateway_api::infrastructure::config::{ConfigLoader, ProcessEnv};
use gateway_api::infrastructure::logging::Logger;

fn main() -> ExitCode {
    // The logger is configured from the tree itself, so config errors
    // can only go to stderr.
    let config = match ConfigLoader::load(&ProcessEnv) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let _logger = match Logger::init(&config) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("failed to initialize logger: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        port = %config.server.port,
        runmode = %config.server.runmode,
        domain = %config.server.domain,
        stage = %config.env.stage,
        app = %config.env.app_name,
        kinesis_streams = config.kinesis.len(),
        mqtt_clients = config.mqtt.len(),
        "configuration assembled"
    );

    ExitCode::SUCCESS
}
