//! SLCM Dashboard - a student dashboard with the "Manny" chat assistant
//!
//! Architecture:
//! - Main thread: runs the egui UI (dashboard regions + chat widget)
//! - Responder thread: runs a Tokio runtime that produces delayed bot replies
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slcm_dashboard::app::DashboardApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SLCM Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
