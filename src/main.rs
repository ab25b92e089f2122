use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Args, Parser, Subcommand, ValueEnum};

use gumbel_rv::config::{ModelConfig, ValidationMode};
use gumbel_rv::error::ModelError;
use gumbel_rv::input::{read_document, write_document};
use gumbel_rv::model::{DensityCurve, Field, GumbelModel, InputMode};
use gumbel_rv::report::{SampleFormat, render_parameters_text, render_samples, write_output};

#[derive(Debug, Parser)]
#[command(name = "gumbel-rv")]
#[command(about = "Gumbel random variable: conversions, PDF samples and state documents")]
#[command(version)]
struct Cli {
    /// Default log level, overridden by RUST_LOG.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// JSON model configuration (precision, validation).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject non-positive scale when validating.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print both parameterizations.
    Convert {
        #[command(subcommand)]
        from: ConvertFrom,
        #[arg(long)]
        json: bool,
    },
    /// Build a state document from raw form text.
    Export(ExportArgs),
    /// Load a state document and write the PDF samples.
    Pdf {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "tsv")]
        format: FormatArg,
    },
}

#[derive(Debug, Subcommand)]
enum ConvertFrom {
    Parameters {
        #[arg(long, allow_hyphen_values = true)]
        alpha: f64,
        #[arg(long, allow_hyphen_values = true)]
        beta: f64,
    },
    Moments {
        #[arg(long, allow_hyphen_values = true)]
        mean: f64,
        #[arg(long, allow_hyphen_values = true)]
        std_dev: f64,
    },
}

#[derive(Debug, Args)]
struct ExportArgs {
    #[arg(long, value_enum)]
    mode: ModeArg,
    #[arg(long, allow_hyphen_values = true)]
    alpha: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    beta: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    mean: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    std_dev: Option<String>,
    #[arg(long)]
    data_dir: Option<String>,
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Parameters,
    Moments,
    Dataset,
}

impl From<ModeArg> for InputMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Parameters => InputMode::Parameters,
            ModeArg::Moments => InputMode::Moments,
            ModeArg::Dataset => InputMode::Dataset,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Tsv,
    Json,
}

impl From<FormatArg> for SampleFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Tsv => SampleFormat::Tsv,
            FormatArg::Json => SampleFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    gumbel_rv::logging::init(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ModelError> {
    let config = resolve_config(cli.config.as_deref(), cli.strict)?;
    tracing::debug!(?config, "model configuration");

    match cli.command {
        Command::Convert { from, json } => {
            let model = match from {
                ConvertFrom::Parameters { alpha, beta } => {
                    let mut m = GumbelModel::with_config(InputMode::Parameters, config);
                    m.set_from_parameters(alpha, beta);
                    m
                }
                ConvertFrom::Moments { mean, std_dev } => {
                    let mut m = GumbelModel::with_config(InputMode::Moments, config);
                    m.set_from_moments(mean, std_dev);
                    m
                }
            };
            model.validate()?;
            let Some(params) = model.parameters() else {
                return Ok(());
            };
            let text = if json {
                let mut s = serde_json::to_string_pretty(&params)?;
                s.push('\n');
                s
            } else {
                render_parameters_text(&params)
            };
            write_output(None, &text)
        }
        Command::Export(args) => {
            let model = model_from_form(&args, config)?;
            let doc = model.export_state()?;
            match &args.out {
                Some(path) => {
                    write_document(path, &doc)?;
                    tracing::info!("wrote {}", path.display());
                    Ok(())
                }
                None => {
                    let mut s = serde_json::to_string_pretty(&doc)?;
                    s.push('\n');
                    write_output(None, &s)
                }
            }
        }
        Command::Pdf { input, out, format } => {
            let doc = read_document(&input)?;
            let mut model = GumbelModel::with_config(InputMode::Parameters, config);
            let plotted: Rc<RefCell<Option<DensityCurve>>> = Rc::default();
            let sink = Rc::clone(&plotted);
            model.subscribe(move |curve: &DensityCurve| {
                *sink.borrow_mut() = Some(curve.clone());
            });
            model.import_state(&doc)?;
            let Some(curve) = plotted.borrow_mut().take() else {
                tracing::warn!(
                    "{}: no density to plot for {} input",
                    input.display(),
                    model.mode()
                );
                return Ok(());
            };
            let text = render_samples(&curve, format.into())?;
            write_output(out.as_deref(), &text)
        }
    }
}

fn resolve_config(path: Option<&Path>, strict: bool) -> Result<ModelConfig, ModelError> {
    let mut config = match path {
        Some(p) => ModelConfig::load(p)?,
        None => ModelConfig::default_v1(),
    };
    if strict {
        config.validation = ValidationMode::Strict;
    }
    Ok(config)
}

/// Replays the raw form text through the model, as the form would on edits.
fn model_from_form(args: &ExportArgs, config: ModelConfig) -> Result<GumbelModel, ModelError> {
    let mode = InputMode::from(args.mode);
    let mut model = GumbelModel::with_config(mode, config);
    let fields = [
        (Field::Alpha, &args.alpha),
        (Field::Beta, &args.beta),
        (Field::Mean, &args.mean),
        (Field::StdDev, &args.std_dev),
        (Field::DataPath, &args.data_dir),
    ];
    for (field, text) in fields {
        let Some(text) = text else {
            continue;
        };
        if field.mode() != mode {
            tracing::warn!("ignoring {field}: not used in {mode} mode");
            continue;
        }
        model.on_field_changed(field, text)?;
    }
    Ok(model)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
