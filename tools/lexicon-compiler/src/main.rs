use anyhow::Context;
use clap::Parser;
use headmix_protocol::Lexicon;
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON headline lexicon to an rkyv archive")]
struct Cli {
    /// JSON lexicon; the built-in English lexicon is used when omitted
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn read_lexicon(path: &Path) -> anyhow::Result<Lexicon> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let lexicon = serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    Ok(lexicon)
}

fn compile(lexicon: &Lexicon) -> anyhow::Result<Vec<u8>> {
    let mut serializer = AllocSerializer::<1024>::default();
    serializer
        .serialize_value(lexicon)
        .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {:?}", e))?;
    Ok(serializer.into_serializer().into_inner().to_vec())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .init();

    let lexicon = match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "reading JSON lexicon");
            read_lexicon(path)?
        }
        None => {
            info!("using built-in English lexicon");
            Lexicon::english()
        }
    };

    info!(
        version = lexicon.version,
        irregular = lexicon.irregular_verbs.len(),
        common_verbs = lexicon.common_verbs.len(),
        never_verbs = lexicon.never_verbs.len(),
        "compiling lexicon"
    );

    let bytes = compile(&lexicon)?;
    fs::write(&cli.output, &bytes).with_context(|| format!("writing {}", cli.output.display()))?;

    let written = fs::read(&cli.output)?;
    let loaded = Lexicon::from_archive(&written).context("written archive failed validation")?;
    anyhow::ensure!(loaded == lexicon, "archive does not round-trip");

    info!(path = %cli.output.display(), bytes = bytes.len(), "archive written");
    Ok(())
}
