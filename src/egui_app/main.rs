/**
 * todocount Desktop Client - Main Entry Point
 *
 * Owns the tokio runtime the synchronizers spawn their requests on and
 * implements eframe::App around `AppState`.
 */
use eframe::egui;
use std::time::Duration;
use todocount::egui_app::{views, AppState, Config};
use tokio::runtime::Runtime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let runtime = Runtime::new()?;
    let config = Config::from_env()?;
    let state = AppState::new(config, runtime.handle().clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Todo & Counter",
        options,
        Box::new(move |_cc| Ok(Box::new(TodoCountApp { _runtime: runtime, state }))),
    )?;

    Ok(())
}

/// Main application state
struct TodoCountApp {
    // Kept alive for the requests spawned by `state`
    _runtime: Runtime,
    state: AppState,
}

impl eframe::App for TodoCountApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_notices(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Results arrive over channels and notices expire; keep polling while either is live
        if self.state.is_busy() || self.state.has_notices() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
