use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use strokekit::{
    build_service, init_logging, ApiKeys, Collaborators, Config, DrawingData, ShapeInfo,
    BUILD_DATE, VERSION,
};
use strokekit_core::{MemoryStore, StaticShapeCatalog};

const USAGE: &str = "\
usage: strokekit <drawing.json> --catalog <catalog.json> [--config <config.toml|config.json>]

Recognizes one drawing and prints the client response as JSON.
The catalog file holds either a list of shapes or {\"shapes\": [...], \"scenes\": {...}}.";

struct Args {
    drawing: PathBuf,
    catalog: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut drawing = None;
    let mut catalog = None;
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-V" | "--version" => {
                println!("strokekit {} (built {})", VERSION, BUILD_DATE);
                std::process::exit(0);
            }
            "--catalog" => {
                catalog = Some(PathBuf::from(args.next().context("--catalog needs a value")?))
            }
            "--config" => {
                config = Some(PathBuf::from(args.next().context("--config needs a value")?))
            }
            other if other.starts_with('-') => bail!("unknown option `{}`\n\n{}", other, USAGE),
            other => {
                if drawing.is_some() {
                    bail!("unexpected argument `{}`\n\n{}", other, USAGE);
                }
                drawing = Some(PathBuf::from(other));
            }
        }
    }

    let Some(drawing) = drawing else {
        return Ok(None);
    };
    let catalog = catalog.with_context(|| format!("missing --catalog\n\n{}", USAGE))?;
    Ok(Some(Args {
        drawing,
        catalog,
        config,
    }))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    let default_path = Config::default_path();
    if default_path.exists() {
        return Config::load_from_file(&default_path)
            .with_context(|| format!("loading config {}", default_path.display()));
    }
    Ok(Config::default())
}

fn load_catalog(path: &PathBuf) -> anyhow::Result<StaticShapeCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    if let Ok(shapes) = serde_json::from_str::<Vec<ShapeInfo>>(&content) {
        return Ok(StaticShapeCatalog::new(shapes));
    }
    serde_json::from_str(&content).with_context(|| format!("parsing catalog {}", path.display()))
}

fn load_drawing(path: &PathBuf) -> anyhow::Result<DrawingData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading drawing {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing drawing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args()? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = load_config(args.config.as_ref())?;
    init_logging(&config.logging)?;
    tracing::info!("StrokeKit {} (built {})", VERSION, BUILD_DATE);

    let keys = ApiKeys::load(&config.secrets)?;
    let catalog = load_catalog(&args.catalog)?;
    let drawing = load_drawing(&args.drawing)?;

    let store = Arc::new(MemoryStore::new());
    let service = build_service(
        &config,
        &keys,
        Collaborators::in_memory(Arc::new(catalog), store.clone()),
    )?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let response = runtime.block_on(service.handle_drawing(&drawing));

    match response {
        Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        None => tracing::info!("Drawing {} did not request recognition", drawing.drawing_id),
    }

    for error in store.errors() {
        tracing::warn!("Error {} logged: {}", error.error_id, error.error_message);
    }
    Ok(())
}
