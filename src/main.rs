// ./src/main.rs
use anyhow::Context as _;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrail::{VitrailConfig, VitrailPipeline};

/// Erzeugt aus einem Bild ein animiertes Buntglasfenster als SVG.
#[derive(Parser, Debug)]
#[command(name = "vitrail", version, about)]
struct Cli {
    /// Eingabebild (PNG, JPEG, ...).
    input: PathBuf,

    /// Ausgabe-SVG.
    output: PathBuf,

    /// JSON-Konfiguration; fehlende Felder behalten ihre Standardwerte.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed für reproduzierbare Ergebnisse.
    #[arg(long)]
    seed: Option<u64>,

    /// Anzahl der inneren Seeds.
    #[arg(long)]
    cells: Option<usize>,

    /// Wahrscheinlichkeit, dass eine Zelle animiert wird.
    #[arg(long)]
    probability: Option<f64>,

    /// Zeitlimit für das Farb-Sampling in Sekunden.
    #[arg(long)]
    timeout_secs: Option<f64>,

    /// Debug-Ausgaben aktivieren.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    /// Datei-Konfiguration laden und Kommandozeilenwerte darüberlegen.
    fn resolve_config(&self) -> anyhow::Result<VitrailConfig> {
        let mut config = match &self.config {
            Some(path) => VitrailConfig::from_json_file(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => VitrailConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(cells) = self.cells {
            config = config.with_cells(cells);
        }
        if let Some(probability) = self.probability {
            config = config.with_animation_probability(probability);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_sampling_timeout(secs);
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.resolve_config()?;
    let pipeline = VitrailPipeline::new(config).context("invalid configuration")?;
    let scene = pipeline
        .render_file(&cli.input, &cli.output)
        .with_context(|| format!("render {} -> {}", cli.input.display(), cli.output.display()))?;

    info!(
        "Done: {} cells ({} animated) written to {}",
        scene.cell_count(),
        scene.animated_cells.len(),
        cli.output.display()
    );
    Ok(())
}
