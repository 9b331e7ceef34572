//! Demo harness for the folio interaction layer
//!
//! The portfolio's markup is an external collaborator; this binary stands
//! in for it, wiring the adapters into the four state slices with
//! dependency injection and walking through every interaction once.

use anyhow::Result;
use clap::Parser;
use folio_application::{
    AmbientScheme, ContactFormService, IdeaService, PreferenceStore, ThemeService, ToastNotifier,
};
use folio_domain::ContactField;
use folio_infrastructure::{
    CannedGenerator, ConfigLoader, EnvAmbientScheme, FilePreferenceStore, FixedAmbientScheme,
    MemoryPreferenceStore, NoopDelivery, TracingThemeApplier,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio", about = "Walk through the portfolio interaction layer")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Explicit configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the theme preference in memory instead of on disk
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
    info!("Starting folio walkthrough for {}", config.profile.name);

    // === Dependency Injection ===
    let store: Arc<dyn PreferenceStore> = if cli.ephemeral {
        Arc::new(MemoryPreferenceStore::new())
    } else {
        match FilePreferenceStore::default_location() {
            Some(store) => Arc::new(store),
            None => Arc::new(MemoryPreferenceStore::new()),
        }
    };
    let ambient: Arc<dyn AmbientScheme> = match config.theme.ambient {
        Some(mode) => Arc::new(FixedAmbientScheme(Some(mode))),
        None => Arc::new(EnvAmbientScheme::new()),
    };
    let generator = Arc::new(CannedGenerator::new());
    let toasts = Arc::new(ToastNotifier::new());

    let theme = ThemeService::new(store, ambient, Arc::new(TracingThemeApplier));
    let contact = ContactFormService::new(toasts.clone(), generator.clone(), Arc::new(NoopDelivery));
    let ideas = IdeaService::new(toasts.clone(), generator).with_skills(config.profile.skills.clone());

    // === Walkthrough ===
    println!("{} — {}", config.profile.name, config.profile.tagline);
    println!();

    let resolved = theme.initialize().await;
    println!("Theme resolved at mount: {resolved}");
    println!("Toggled to: {}", theme.toggle());
    println!("Toggled back to: {}", theme.toggle());
    println!();

    contact.update_field(ContactField::Name, "Ada");
    contact.update_field(ContactField::Email, "ada@example.com");
    contact.update_field(
        ContactField::Message,
        "I'd love to talk about a data visualization project for my team.",
    );
    contact.request_draft();
    while contact.is_drafting() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    println!("Drafted AI Response:");
    println!("  {}", contact.drafted_response());
    println!();

    // The surrounding form control enforces required-field presence
    if contact.draft().is_complete() {
        contact.submit().await;
    }
    println!("Toast: {}", toasts.current().message);
    println!();

    ideas.generate();
    while ideas.is_generating() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    println!("{}", ideas.idea());

    // Explicit lifecycle end: cancel anything still pending
    contact.teardown();
    ideas.teardown();
    theme.teardown();
    toasts.teardown();

    Ok(())
}
