use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Instant;
use weft::prelude::*;

/// Rewrites an Azure Data Factory pipeline definition into its Microsoft
/// Fabric-native form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the ADF pipeline definition JSON file
    pipeline_path: String,
    /// Path to the dataset definitions JSON file (an array of dataset documents)
    datasets_path: String,

    /// Optional path to a global parameter context JSON file (an object of name -> value)
    #[arg(short, long)]
    globals_path: Option<String>,

    /// Write the transformed definition to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File loading and parsing ---
    let load_start = Instant::now();
    let pipeline_json = fs::read_to_string(&cli.pipeline_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read pipeline file '{}': {}",
            &cli.pipeline_path, e
        ))
    });
    let datasets_json = fs::read_to_string(&cli.datasets_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read datasets file '{}': {}",
            &cli.datasets_path, e
        ))
    });

    let pipeline = PipelineDefinition::from_json(&pipeline_json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let catalog =
        DatasetCatalog::from_json(&datasets_json).unwrap_or_else(|e| exit_with_error(&e.to_string()));

    let global_parameters = match &cli.globals_path {
        Some(path) => {
            let globals_json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read globals file '{}': {}", path, e))
            });
            serde_json::from_str::<JsonMap>(&globals_json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse globals file '{}': {}", path, e))
            })
        }
        None => JsonMap::new(),
    };
    let load_duration = load_start.elapsed();

    // The pipeline document's own name wins; fall back to the file stem.
    let pipeline_name = pipeline.name.clone().unwrap_or_else(|| {
        Path::new(&cli.pipeline_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.pipeline_path.clone())
    });

    // --- 2. Transform ---
    eprintln!(
        "Transforming pipeline '{}' against {} known datasets...",
        pipeline_name,
        catalog.len()
    );
    let transform_start = Instant::now();
    let transformer = PipelineTransformer::new(&catalog);
    let outcome = transformer.transform(&pipeline, &global_parameters, &pipeline_name);
    let transform_duration = transform_start.elapsed();

    for warning in &outcome.warnings {
        eprintln!("  warning: {}", warning);
    }
    if outcome.is_clean() {
        eprintln!("Transform complete; all references resolved.");
    } else {
        eprintln!(
            "Transform complete with {} warning(s); the definition may need manual follow-up.",
            outcome.warnings.len()
        );
    }

    // --- 3. Output ---
    let rendered = if cli.compact {
        serde_json::to_string(&outcome.pipeline)
    } else {
        serde_json::to_string_pretty(&outcome.pipeline)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output file '{}': {}", path, e))
            });
            eprintln!("Wrote transformed definition to '{}'", path);
        }
        None => println!("{}", rendered),
    }

    eprintln!("\n--- Performance Summary ---");
    eprintln!("File Loading:   {:?}", load_duration);
    eprintln!("Transform:      {:?}", transform_duration);
    eprintln!("Total:          {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
