//! CLI definition, configuration resolution, and tracing setup.

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use schooldesk_core::ResponseRenderer;
use schooldesk_knowledge::{KnowledgeBase, KnowledgeStore};
use schooldesk_shared::{AppConfig, load_config, load_config_from};
use tracing::info;

/// Topic name that lists all topics instead of rendering one.
const LIST_TOPIC: &str = "list";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// SchoolDesk: ready-made answers for typical school IT problems.
#[derive(Parser)]
#[command(
    name = "schooldesk",
    version,
    about = "Сформировать подсказку для учителей и сотрудников школы по типовой ИТ-задаче.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Topic id, or 'list' to show all topics.
    pub topic: String,

    /// Request details (room, computer, name).
    #[arg(long)]
    pub details: Option<String>,

    /// Do not append the reminder about filing a request.
    #[arg(long)]
    pub no_escalation: bool,

    /// Topic file (TOML or JSON) to use instead of the built-in topics.
    #[arg(long, env = "SCHOOLDESK_KNOWLEDGE_BASE")]
    pub knowledge_base: Option<PathBuf>,

    /// Greeting line that starts every answer.
    #[arg(long)]
    pub greeting: Option<String>,

    /// Config file (defaults to ~/.schooldesk/schooldesk.toml).
    #[arg(long, env = "SCHOOLDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so stdout only
/// carries the answer.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(cli.config.as_deref())?;

    let greeting = cli.greeting.unwrap_or(config.assistant.greeting);
    let kb_path = cli
        .knowledge_base
        .or_else(|| config.assistant.knowledge_base.map(PathBuf::from));
    let kb = load_knowledge_base(kb_path.as_deref())?;

    let renderer = ResponseRenderer::with_greeting(&kb, greeting);

    if cli.topic == LIST_TOPIC {
        cmd_list(&renderer);
    } else {
        cmd_render(
            &renderer,
            &cli.topic,
            cli.details.as_deref(),
            !cli.no_escalation,
        );
    }

    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config_from(path)
            .wrap_err_with(|| format!("cannot load config '{}'", path.display())),
        None => Ok(load_config()?),
    }
}

fn load_knowledge_base(path: Option<&Path>) -> Result<KnowledgeBase> {
    match path {
        Some(path) => KnowledgeBase::load(path)
            .wrap_err_with(|| format!("cannot load knowledge base '{}'", path.display())),
        None => Ok(KnowledgeBase::builtin()?),
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_list<S: KnowledgeStore>(renderer: &ResponseRenderer<'_, S>) {
    let topics = renderer.topics_with_titles();
    info!(count = topics.len(), "listing topics");

    for (key, title) in topics {
        println!("{key} — {title}");
    }
}

fn cmd_render<S: KnowledgeStore>(
    renderer: &ResponseRenderer<'_, S>,
    topic: &str,
    details: Option<&str>,
    include_escalation: bool,
) {
    info!(topic, include_escalation, "rendering answer");
    println!("{}", renderer.render(topic, details, include_escalation));
}
