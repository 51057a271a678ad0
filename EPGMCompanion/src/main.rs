use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use epgmcalendar::{DevotionalCatalog, MonthView};
use epgmconfig::get_config;
use epgmcontent::{BRANCHES, LIVE_STREAMS};
use epgmprofile::ProfileStore;
use epgmradio::{HttpStreamBackend, PlaybackEvent, PlaybackSession, StationCatalog};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ========== PHASE 1 : Configuration et logging ==========

    let config = get_config();

    if config.get_log_enable_console() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.get_log_min_level().to_lowercase()));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("✝️ {} starting...", config.get_app_name());

    // ========== PHASE 2 : Profil et calendrier ==========

    let profile_store = ProfileStore::new(config.get_profile_path());
    match profile_store.load() {
        Ok(Some(profile)) => info!("👤 Welcome back, {} {}", profile.name, profile.avatar),
        Ok(None) => info!("👤 No profile yet, onboarding required"),
        Err(e) => warn!("⚠️ Failed to read profile: {}", e),
    }

    let catalog = DevotionalCatalog::builtin();
    info!("📖 Devotional catalog loaded ({} month(s))", catalog.len());

    let today = Local::now().date_naive();
    let view = MonthView::open(&catalog, today);
    if let Some(month) = view.month_data() {
        info!(
            "📅 Showing {:04}-{:02}: {}",
            view.year(),
            view.month(),
            month.theme
        );
    }
    if let Some(verse) = view.selected_verse() {
        info!("🙏 Today's verse: {}", verse);
    }

    // ========== PHASE 3 : Radio ==========

    let stations = StationCatalog::builtin();
    info!("📻 {} radio station(s) available", stations.len());
    for station in stations.all() {
        info!("  - {} ({})", station.name, station.id);
    }

    let backend = HttpStreamBackend::new()?
        .with_connect_timeout(Duration::from_secs(config.get_connect_timeout_secs()));
    let session = Arc::new(PlaybackSession::new(Arc::new(backend)));

    // Journaliser les changements d'état de lecture
    let events = session.subscribe();
    std::thread::spawn(move || {
        for event in events {
            let PlaybackEvent::StateChanged { snapshot } = event;
            match &snapshot.active_station {
                Some(station) if snapshot.is_playing => {
                    info!("▶️ Playing {}", station.name)
                }
                Some(station) => info!("⏸️ Paused on {}", station.name),
                None => info!("⏹️ Playback stopped"),
            }
        }
    });

    let default_station = config.get_default_station();
    if !default_station.is_empty() {
        match stations.get(&default_station) {
            Some(station) => {
                info!("📻 Auto-playing default station '{}'", station.name);
                if let Err(e) = session.play(station).await {
                    warn!("⚠️ Failed to start default station: {}", e);
                }
            }
            None => warn!("⚠️ Unknown default station '{}'", default_station),
        }
    }

    // ========== PHASE 4 : Contenu statique ==========

    info!("📡 {} live stream platform(s)", LIVE_STREAMS.len());
    info!("⛪ {} branch(es) in the directory", BRANCHES.len());

    info!("✅ {} is ready!", config.get_app_name());
    info!("Press Ctrl+C to stop...");
    tokio::signal::ctrl_c().await?;

    info!("🛑 Shutting down...");
    session.stop().await;

    Ok(())
}
