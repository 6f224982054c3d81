use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use flowcard::parsers::{DebugPrinter, TemplateParser};
use flowcard::{AppManifest, CardDefinition, ComposeOptions, FlowCardComposer, locale, render};
use tracing::warn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

/// Render the flow cards of an app manifest.
#[derive(Parser, Debug)]
#[command(name = "flowcard", version)]
struct Cli {
    /// Path to app.json (or app.yaml).
    manifest: PathBuf,
    /// Only render the card with this id.
    #[arg(long)]
    card: Option<String>,
    /// Language code, falls back to `en`.
    #[arg(long, default_value = "en")]
    lang: String,
    #[arg(long, default_value = flowcard::compose::DEFAULT_ICON_URL)]
    icon_url: String,
    /// Icon tint; defaults to the app's brand color.
    #[arg(long)]
    icon_color: Option<String>,
    /// Clamp titles to two lines.
    #[arg(long)]
    clamp_title: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Open the chip of this argument before rendering. Repeatable.
    #[arg(long = "open", value_name = "ARG")]
    open: Vec<String>,
    /// Print the parsed title segments of each card.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let manifest = AppManifest::from_file(&cli.manifest)?;
    let meta = manifest.meta();

    let cards: Vec<&CardDefinition> = match &cli.card {
        Some(id) => vec![manifest.card(id)?],
        None => manifest.cards().map(|(_, card)| card).collect(),
    };

    let options = ComposeOptions {
        lang: cli.lang.clone(),
        icon_url: cli.icon_url.clone(),
        icon_color: cli.icon_color.clone(),
        clamp_title: cli.clamp_title,
    };
    let composer = FlowCardComposer::new(&meta);

    for card in cards {
        if cli.debug {
            let source = locale::resolve_first(&[card.title_formatted.as_ref(), Some(&card.title)], &cli.lang)
                .unwrap_or("");
            let segments = TemplateParser::new(&card.args, &cli.lang).parse(source);
            print!("{}", DebugPrinter::format(&segments));
        }

        let Some(mut rendered) = composer.compose(Some(card), &options) else {
            continue;
        };
        for name in &cli.open {
            if !rendered.activate(name) {
                warn!(arg = %name, card = card.id.as_deref().unwrap_or(""), "no chip for argument");
            }
        }

        match cli.format {
            Format::Text => println!("{}", render::text(&rendered)),
            Format::Html => println!("{}", render::html(&rendered)),
        }
    }

    Ok(())
}
