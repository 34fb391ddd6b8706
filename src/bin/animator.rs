use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use animator::{
    AnimatorConfig, Catalogue, CredentialSet, ExportMode, FileStorage, GenerateOutcome,
    GenerationState, MockGateway, Provider, classify,
};

const DEFAULT_STORAGE: &str = ".animator/storage.json";

#[derive(Parser, Debug)]
#[command(name = "animator", version)]
struct Cli {
    /// Config file (JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Credential storage file (overrides the config).
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a script from a description.
    Generate(GenerateArgs),
    /// Browse the template catalogue.
    #[command(subcommand)]
    Templates(TemplatesCmd),
    /// Wrap an existing script for export.
    Export(ExportArgs),
    /// Manage provider API keys.
    #[command(subcommand)]
    Keys(KeysCmd),
    /// Print sampled property values of the effect a description resolves to.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Effect description.
    #[arg(long)]
    prompt: String,

    /// Provider to use (qianwen, openai, doubao, deepseek).
    #[arg(long)]
    provider: Option<Provider>,

    /// Override the simulated latency.
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Export format (raw, page, component).
    #[arg(long, default_value = "raw")]
    format: ExportMode,

    /// Write the result here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum TemplatesCmd {
    /// List templates, optionally filtered by category.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one template's script.
    Show {
        id: String,

        #[arg(long, default_value = "raw")]
        format: ExportMode,
    },
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Script file, or `-` for stdin.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    format: ExportMode,

    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum KeysCmd {
    /// Store an API key for a provider.
    Set {
        #[arg(long)]
        provider: Provider,
        #[arg(long)]
        key: String,
    },
    /// Show which providers have a key.
    Show,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[arg(long)]
    prompt: String,

    /// Samples per second.
    #[arg(long, default_value_t = 10)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => AnimatorConfig::from_path(path)?,
        None => AnimatorConfig::default(),
    };
    let storage_path = cli
        .storage
        .clone()
        .or_else(|| cfg.storage_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE));
    let mut storage = FileStorage::new(storage_path);

    match cli.cmd {
        Command::Generate(args) => cmd_generate(args, &cfg, &storage),
        Command::Templates(cmd) => cmd_templates(cmd),
        Command::Export(args) => cmd_export(args),
        Command::Keys(cmd) => cmd_keys(cmd, &mut storage),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn emit(text: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
            Ok(())
        }
    }
}

fn cmd_generate(args: GenerateArgs, cfg: &AnimatorConfig, storage: &FileStorage) -> anyhow::Result<()> {
    let credentials = CredentialSet::load(storage);
    let mut state = GenerationState::new(cfg.default_provider);
    if let Some(provider) = args.provider {
        state.set_provider(provider);
    }
    let gateway = match args.latency_ms {
        Some(ms) => MockGateway::new(std::time::Duration::from_millis(ms)),
        None => MockGateway::from_config(cfg),
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("start runtime")?;
    let outcome = rt.block_on(animator::generate(
        &mut state,
        &args.prompt,
        &credentials,
        &gateway,
    ));

    match outcome {
        GenerateOutcome::Generated { explanation } => {
            eprintln!("{explanation}");
            emit(
                &animator::format(state.current_code(), args.format),
                args.out.as_deref(),
            )
        }
        GenerateOutcome::Failed { message } => bail!("generation failed: {message}"),
        GenerateOutcome::Rejected(rejected) => bail!("{rejected}"),
    }
}

fn cmd_templates(cmd: TemplatesCmd) -> anyhow::Result<()> {
    let catalogue = Catalogue::builtin();
    match cmd {
        TemplatesCmd::List { category } => {
            let templates = match &category {
                Some(c) => catalogue.by_category(c),
                None => catalogue.all().iter().collect(),
            };
            for t in templates {
                println!("{:<16} {:<12} {}", t.id, t.category, t.name);
            }
            Ok(())
        }
        TemplatesCmd::Show { id, format } => {
            let mut state = GenerationState::default();
            if !state.select_template(catalogue, &id) {
                bail!("unknown template '{id}'");
            }
            emit(&animator::format(state.current_code(), format), None)
        }
    }
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let script = if args.in_path.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read script from stdin")?;
        s
    } else {
        std::fs::read_to_string(&args.in_path)
            .with_context(|| format!("read script '{}'", args.in_path.display()))?
    };
    emit(&animator::format(&script, args.format), args.out.as_deref())
}

fn cmd_keys(cmd: KeysCmd, storage: &mut FileStorage) -> anyhow::Result<()> {
    let mut credentials = CredentialSet::load(storage);
    match cmd {
        KeysCmd::Set { provider, key } => {
            credentials.set(provider, key);
            credentials.save(storage)?;
            eprintln!("saved {} API key to {}", provider, storage.path().display());
        }
        KeysCmd::Show => {
            for p in Provider::ALL {
                let status = if credentials.has(p) { "set" } else { "unset" };
                println!("{:<10} {status}", p.id());
            }
        }
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        bail!("--fps must be > 0");
    }
    let effect = classify(&args.prompt);
    let tween = effect.tween();
    println!("# {effect:?} ({}s, {})", tween.total_duration(), tween.ease);

    let frames = (tween.total_duration() * f64::from(args.fps)).ceil() as u64;
    for frame in 0..=frames {
        let t = frame as f64 / f64::from(args.fps);
        let values: Vec<String> = tween
            .sample(t)
            .into_iter()
            .map(|(prop, v)| format!("{}={v:.3}", prop.name()))
            .collect();
        println!("{t:>6.2} {}", values.join(" "));
    }
    Ok(())
}
