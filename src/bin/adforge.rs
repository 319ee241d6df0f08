//! CLI for AdForge - sale-ad creative generation.

use adforge::{
    AdParameters, AdSession, AspectRatio, AssetSlot, CreativeBackend, EnvCredentialGate,
    GeminiBackend, ResolutionTier,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "adforge")]
#[command(about = "Generate sale-ad creatives via the Gemini image API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output a JSON summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an ad creative from assets and sale details
    Generate(GenerateArgs),

    /// Check that the generation service is reachable and authenticated
    Check,
}

#[derive(Args)]
struct GenerateArgs {
    /// Brand name rendered on the creative
    #[arg(long)]
    brand: String,

    /// Headline / slogan overlay
    #[arg(long)]
    slogan: String,

    /// Regular price (shown struck through)
    #[arg(long)]
    price: String,

    /// Sale price (the dominant element)
    #[arg(long)]
    sale_price: String,

    /// Currency label
    #[arg(long)]
    currency: String,

    /// Product photo (required)
    #[arg(long)]
    product: PathBuf,

    /// Style-reference photo
    #[arg(long)]
    concept: Option<PathBuf>,

    /// Brand logo
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Target aspect ratio
    #[arg(long, value_enum, default_value = "square")]
    aspect_ratio: AspectRatioArg,

    /// Output resolution tier (high and premium use the upgraded model)
    #[arg(long, value_enum, default_value = "standard")]
    resolution: ResolutionArg,

    /// Output file path (defaults to "<brand>-Meta-Ad.png")
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AspectRatioArg {
    /// 1:1 post
    Square,
    /// 9:16 story
    Portrait,
    /// 16:9 banner
    Landscape,
}

impl From<AspectRatioArg> for AspectRatio {
    fn from(arg: AspectRatioArg) -> Self {
        match arg {
            AspectRatioArg::Square => AspectRatio::Square,
            AspectRatioArg::Portrait => AspectRatio::Portrait,
            AspectRatioArg::Landscape => AspectRatio::Landscape,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResolutionArg {
    /// 1K
    Standard,
    /// 2K
    High,
    /// 4K
    Premium,
}

impl From<ResolutionArg> for ResolutionTier {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::Standard => ResolutionTier::Standard,
            ResolutionArg::High => ResolutionTier::High,
            ResolutionArg::Premium => ResolutionTier::Premium,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => run_generate(args, cli.json).await,
        Commands::Check => run_check(cli.json).await,
    }
}

async fn run_generate(args: GenerateArgs, json: bool) -> ExitCode {
    let backend = match GeminiBackend::builder().build() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = AdSession::new(backend, EnvCredentialGate);
    session.params = AdParameters {
        brand_name: args.brand,
        slogan: args.slogan,
        actual_price: args.price,
        sale_price: args.sale_price,
        currency: args.currency,
        resolution: args.resolution.into(),
        aspect_ratio: args.aspect_ratio.into(),
    };

    if let Err(err) = session.assets.load(AssetSlot::Product, &args.product).await {
        eprintln!("failed to read {}: {err}", args.product.display());
        return ExitCode::FAILURE;
    }
    if let Some(path) = &args.concept {
        if let Err(err) = session.assets.load(AssetSlot::Concept, path).await {
            eprintln!("failed to read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = &args.logo {
        if let Err(err) = session.assets.load(AssetSlot::Logo, path).await {
            eprintln!("failed to read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    session.generate_ad().await;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(session.download_file_name()));

    match session.sink().creative() {
        Some(creative) => {
            if let Err(err) = creative.save(&output) {
                eprintln!("failed to save {}: {err}", output.display());
                return ExitCode::FAILURE;
            }
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "output": output,
                        "bytes": creative.size(),
                        "mime_type": creative.format.mime_type(),
                        "prompt": creative.prompt,
                    })
                );
            } else {
                println!("Saved {} ({} bytes)", output.display(), creative.size());
            }
            ExitCode::SUCCESS
        }
        None => {
            let message = session
                .sink()
                .error()
                .unwrap_or("Ad generation failed.")
                .to_owned();
            if json {
                println!("{}", serde_json::json!({ "error": message }));
            } else {
                eprintln!("{message}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run_check(json: bool) -> ExitCode {
    let backend = match GeminiBackend::builder().build() {
        Ok(backend) => backend,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match backend.health_check().await {
        Ok(()) => {
            if json {
                println!("{}", serde_json::json!({ "ok": true }));
            } else {
                println!("{}: ok", backend.name());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if json {
                println!("{}", serde_json::json!({ "ok": false, "error": err.to_string() }));
            } else {
                eprintln!("{}: {err}", backend.name());
            }
            ExitCode::FAILURE
        }
    }
}
