mod app_state;
mod cli;
mod headless;

use std::process::ExitCode;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use vinoria_common::VinoriaError;
use vinoria_config::VinoriaConfig;
use winit::event_loop::EventLoop;

/// Load the config file with a temporary subscriber so warnings raised
/// while loading reach stderr before the real filter is known.
fn load_config(args: &cli::Args) -> VinoriaConfig {
    if let Some(ref path) = args.config {
        eprintln!("Using config override: {}", path.display());
    }
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("vinoria=warn"))
        .finish();
    tracing::subscriber::with_default(bootstrap, || {
        vinoria_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            VinoriaConfig::default()
        })
    })
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("Ignoring invalid log directive {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_windowed(config: VinoriaConfig) -> Result<(), VinoriaError> {
    let event_loop = EventLoop::new().map_err(|e| VinoriaError::Window(e.to_string()))?;
    let mut app = app_state::VinoriaApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| VinoriaError::Window(e.to_string()))
}

fn main() -> ExitCode {
    let args = cli::parse();

    let mut config = load_config(&args);
    cli::apply_overrides(&args, &mut config);

    if args.print_config {
        println!("{}", vinoria_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    init_logging(&cli::log_directive(&args, &config));

    tracing::info!("Vinoria v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        variant = ?config.visual.variant,
        wine_type = ?config.visual.wine_type,
        particles = config.particles.count,
        seed = config.visual.seed,
        "Config loaded"
    );

    if let Some(frames) = args.headless {
        let reports = headless::run(&config, frames);
        tracing::info!("Headless run finished ({} phases)", reports.len());
        return ExitCode::SUCCESS;
    }

    match run_windowed(config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            ExitCode::FAILURE
        }
    }
}
