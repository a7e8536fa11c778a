//! palletload command-line runner.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use palletload_engine::wire::{PackRequest, PalletRecord};
use palletload_engine::{verify_layout, LoadMode, LoadSummary};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "palletload")]
#[command(about = "Pallet loading planner for ISO containers and trailers")]
#[command(version)]
struct Cli {
    /// Log debug output (cursor rollovers, region hand-offs) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the pallets of a JSON file and write the report
    Pack {
        /// Request envelope or bare array of pallet records
        file: PathBuf,

        /// Loading mode; overrides the mode of a request envelope
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Output file for the report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the report
        #[arg(long)]
        pretty: bool,

        /// Check containment and non-overlap of the result
        #[arg(long)]
        verify: bool,
    },

    /// Show the container constants and preset configurations
    Presets,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum ModeArg {
    /// ISO container, catalog slot filling
    Container,
    /// Road trailer, shelf placement with gap
    Trailer,
}

impl From<ModeArg> for LoadMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Container => LoadMode::Container,
            ModeArg::Trailer => LoadMode::Trailer,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds a request from a JSON document: either a full envelope or a bare
/// array of pallet records.
fn parse_request(json: &str, mode: Option<ModeArg>) -> anyhow::Result<PackRequest> {
    let value: Value = serde_json::from_str(json).context("input is not valid JSON")?;

    let mut request = match value {
        Value::Array(_) => {
            let pallets: Vec<PalletRecord> =
                serde_json::from_value(value).context("invalid pallet record")?;
            PackRequest {
                mode: LoadMode::default(),
                pallets,
                config: None,
            }
        }
        Value::Object(_) => serde_json::from_value(value).context("invalid request envelope")?,
        _ => bail!("expected a request object or an array of pallet records"),
    };

    if let Some(mode) = mode {
        request.mode = mode.into();
    }
    Ok(request)
}

fn pack(
    file: &Path,
    mode: Option<ModeArg>,
    output: Option<&Path>,
    pretty: bool,
    verify: bool,
) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let request = parse_request(&json, mode)?;
    let container = request.mode.container();
    log::info!(
        "Packing {} pallets in {:?} mode",
        request.pallets.len(),
        request.mode
    );

    let (result, report) = request.solve().context("packing failed")?;

    if verify {
        verify_layout(&container, &result.packed).context("layout verification failed")?;
        log::info!("Layout verified: {} placements", result.packed_count());
    }

    let body = report.to_json(pretty)?;
    match output {
        Some(path) => {
            std::fs::write(path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;

            let summary = LoadSummary::from(&result);
            println!(
                "Packed {} of {} pallets ({} unpacked), volume utilization {:.1}%",
                summary.packed,
                summary.total_considered,
                summary.unpacked,
                summary.utilization_percent
            );
            println!("Report saved to: {}", path.display());
        }
        None => println!("{}", body),
    }

    Ok(())
}

fn print_presets() {
    println!("Loading modes:");
    println!("{:-<60}", "");
    for mode in [LoadMode::Container, LoadMode::Trailer] {
        let container = mode.container();
        let config = mode.config();
        println!(
            "  {:<10} {} x {} x {}  strategy={:<12} gap={}",
            format!("{:?}", mode).to_lowercase(),
            container.length(),
            container.width(),
            container.height(),
            config.strategy.name(),
            config.spacing
        );
    }
    let catalog = LoadMode::Container.config().catalog;
    println!(
        "\nCatalog: Type A narrow side {}, Type B narrow side {}",
        catalog.type_a_narrow_side, catalog.type_b_narrow_side
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack {
            file,
            mode,
            output,
            pretty,
            verify,
        } => pack(&file, mode, output.as_deref(), pretty, verify)?,

        Commands::Presets => print_presets(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "partNumber": "PN-1",
        "palletSerial": "S1",
        "itemName": "Hood",
        "dimensions": {"width": 59, "depth": 39, "height": 50}
    }"#;

    #[test]
    fn test_bare_array_uses_flag_mode() {
        let json = format!("[{}]", RECORD);

        let default = parse_request(&json, None).unwrap();
        assert_eq!(default.mode, LoadMode::Container);

        let trailer = parse_request(&json, Some(ModeArg::Trailer)).unwrap();
        assert_eq!(trailer.mode, LoadMode::Trailer);
        assert_eq!(trailer.pallets.len(), 1);
    }

    #[test]
    fn test_envelope_mode_overridden_by_flag() {
        let json = format!(r#"{{"mode": "trailer", "pallets": [{}]}}"#, RECORD);

        assert_eq!(parse_request(&json, None).unwrap().mode, LoadMode::Trailer);
        assert_eq!(
            parse_request(&json, Some(ModeArg::Container)).unwrap().mode,
            LoadMode::Container
        );
    }

    #[test]
    fn test_rejects_other_documents() {
        assert!(parse_request("42", None).is_err());
        assert!(parse_request("not json", None).is_err());
        assert!(parse_request(r#"[{"palletSerial": "S1"}]"#, None).is_err());
    }

    #[test]
    fn test_cli_parses_pack() {
        let cli = Cli::try_parse_from([
            "palletload",
            "pack",
            "load.json",
            "--mode",
            "trailer",
            "--pretty",
            "--verify",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Pack {
                file,
                mode,
                pretty,
                verify,
                output,
            } => {
                assert_eq!(file, PathBuf::from("load.json"));
                assert_eq!(mode, Some(ModeArg::Trailer));
                assert!(pretty && verify);
                assert!(output.is_none());
            }
            Commands::Presets => panic!("expected pack"),
        }
    }
}
