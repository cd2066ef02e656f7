use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use toothbuddy_animator::actions::{ActionExtractor, GeminiClient, LanguageModel};
use toothbuddy_animator::animation::{AnimationEngine, ExportFormat};
use toothbuddy_animator::api::routes::{create_router, AppState};
use toothbuddy_animator::config::Config;
use toothbuddy_animator::error::AppError;
use toothbuddy_animator::pipeline::AnimationGenerator;

#[derive(Parser, Debug)]
#[command(name = "toothbuddy-animator")]
#[command(about = "Generate character animations from ToothBuddy storyboards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a storyboard and write per-scene animations, a manifest and a timeline
    Generate {
        /// Markdown storyboard
        storyboard: PathBuf,

        #[arg(short, long, default_value = "./assets/output/animations")]
        output_dir: PathBuf,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Threejs)]
        format: ExportFormat,

        /// Combined timeline path [default: <output-dir>/timeline.json]
        #[arg(short, long)]
        timeline: Option<PathBuf>,
    },
    /// Print the action descriptor for one line of dialogue
    Extract {
        dialogue: String,

        #[arg(short, long, default_value = "")]
        context: String,
    },
    /// Serve the preview API and an exported animation directory
    Serve {
        #[arg(short, long, default_value = "./assets/output/animations")]
        dir: PathBuf,
    },
}

fn build_extractor(config: &Config) -> ActionExtractor {
    let Some(model_config) = &config.model else {
        tracing::info!("No GEMINI_API_KEY set, using keyword extraction");
        return ActionExtractor::offline();
    };

    match GeminiClient::new(model_config) {
        Ok(client) => {
            tracing::info!("Using language model {}", model_config.model);
            let model: Box<dyn LanguageModel> = Box::new(client);
            ActionExtractor::new(Some(model))
        }
        Err(e) => {
            tracing::warn!("Could not create model client, using keywords: {}", e);
            ActionExtractor::offline()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let extractor = build_extractor(&config);

    match cli.command {
        Command::Generate {
            storyboard,
            output_dir,
            format,
            timeline,
        } => {
            let mut generator = AnimationGenerator::new(extractor);
            generator.process(&storyboard).await?;
            generator.export_all(&output_dir, format)?;
            let timeline = timeline.unwrap_or_else(|| output_dir.join("timeline.json"));
            generator.export_combined_timeline(&timeline)?;
        }
        Command::Extract { dialogue, context } => {
            let descriptor = extractor.extract(&dialogue, &context).await;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
        }
        Command::Serve { dir } => {
            let addr: SocketAddr = format!("{}:{}", config.host, config.port)
                .parse()
                .map_err(|_| AppError::Config(format!("Invalid address {}:{}", config.host, config.port)))?;

            tracing::info!("ToothBuddy Animator v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Starting server on http://{}", addr);
            tracing::info!("Animations directory: {}", dir.display());

            let state = Arc::new(AppState {
                extractor,
                engine: AnimationEngine::new(),
            });
            let app = create_router(state, &dir);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
