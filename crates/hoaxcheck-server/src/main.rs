//! hoaxcheck
//!
//! Serves the hoax detection UI and API, or classifies a single text from
//! the command line.

use anyhow::Result;
use clap::Parser;
use hoaxcheck_classifiers::{load_bundles, normalize_with_trace, Bundles};
use hoaxcheck_core::Domain;
use hoaxcheck_server::cli::{Cli, Commands};
use hoaxcheck_server::{
    detect, run_server, AppState, ConfigOverrides, DetectionOutcome, HoaxcheckConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { port, address } => {
            let overrides = ConfigOverrides {
                address,
                port,
                artifacts_dir: cli.artifacts_dir,
            };
            let config = HoaxcheckConfig::load(&cli.config, &overrides)?;
            info!("Configuration loaded");
            info!("Artifacts: {}", config.artifacts.dir.display());

            let metrics_handle = init_metrics()?;

            // Nothing is served until every artifact has loaded
            let bundles = load_or_report(&config)?;
            for domain in Domain::ALL {
                metrics::gauge!("hoaxcheck_vocabulary_size", "domain" => domain.as_str())
                    .set(bundles.get(domain).n_features() as f64);
            }

            let state = AppState::from_bundles(&bundles).with_metrics(metrics_handle);
            let addr: SocketAddr =
                format!("{}:{}", config.server.address, config.server.port).parse()?;

            println!();
            println!("  📰 Identifikasi Berita & Sosmed Hoax");
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(state, addr, config.server.allow_any_origin).await?;
        }

        Commands::Detect { domain, text, json } => {
            let overrides = ConfigOverrides {
                artifacts_dir: cli.artifacts_dir,
                ..Default::default()
            };
            let config = HoaxcheckConfig::load(&cli.config, &overrides)?;

            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            if cli.verbose {
                let trace = normalize_with_trace(&text);
                eprintln!("cleaned: {:?}", trace.output);
                eprintln!("steps:   {:?} ({} passes)", trace.changed_steps, trace.passes);
            }

            let bundles = load_or_report(&config)?;
            let state = AppState::from_bundles(&bundles);
            let outcome = detect(&state.registry, domain, &text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            match outcome {
                DetectionOutcome::Report(report) => {
                    println!("Prediksi: {}", report.display_label);
                    println!("Tingkat Keyakinan Model: {}%", report.confidence_percent);
                    println!();
                    println!("{}", report.note);
                }
                DetectionOutcome::EmptyInput(warning) => {
                    println!("{}", warning.warning);
                }
            }
        }
    }

    Ok(())
}

/// Load the artifact bundles, printing a readable diagnostic on failure
fn load_or_report(config: &HoaxcheckConfig) -> Result<Arc<Bundles>> {
    load_bundles(&config.artifacts).map_err(|e| {
        error!("Artifact loading failed: {e}");
        match e.artifact() {
            Some(artifact) => eprintln!("❌ Gagal memuat model atau vectorizer: {artifact}"),
            None => eprintln!("❌ Gagal memuat model atau vectorizer"),
        }
        eprintln!("   Penyebab: {e}");
        eprintln!(
            "   Pastikan file artefak tersedia di {}",
            config.artifacts.dir.display()
        );
        anyhow::Error::new(e)
    })
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("hoaxcheck=debug,hoaxcheck_server=debug,hoaxcheck_classifiers=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("hoaxcheck=info,hoaxcheck_server=info,hoaxcheck_classifiers=info,tower_http=warn")
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Install the Prometheus recorder and return a handle for `/metrics`
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "hoaxcheck_detections_total",
        "Detections by domain and predicted label"
    );
    metrics::describe_counter!(
        "hoaxcheck_empty_input_total",
        "Requests rejected for blank input, by domain"
    );
    metrics::describe_histogram!(
        "hoaxcheck_prediction_latency_us",
        metrics::Unit::Microseconds,
        "Normalization plus prediction latency in microseconds"
    );
    metrics::describe_gauge!(
        "hoaxcheck_vocabulary_size",
        "Feature count of the loaded vectorizer, by domain"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
