//! # FX Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Load the currency directory (startup fails without it)
//! - Create the conversion service over the currencylayer client
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use currency_directory::CurrencyDirectory;
use currencylayer_client::CurrencyLayerClient;
use fx_hex::{ConversionService, inbound::HttpServer};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("fx-converter"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Export spans only when a collector is configured
    let otel = match std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Some(_) => Some(init_tracer()?),
        None => None,
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,fx_app=debug,fx_hex=debug,currencylayer_client=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let directory = match &config.directory_path {
        Some(path) => CurrencyDirectory::load(path)?,
        None => CurrencyDirectory::embedded()?,
    };
    tracing::info!("Loaded {} currencies", directory.len());

    let provider = CurrencyLayerClient::new(config.access_key.as_str())
        .with_base_url(config.provider_base_url.as_str());
    tracing::info!("Using rate provider at {}", provider.base_url());

    let service = ConversionService::new(provider);

    // Create and run the HTTP server
    let server = HttpServer::new(service, directory);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
