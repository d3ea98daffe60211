#![warn(clippy::all)]

//! Indicator Explorer - a web-based choropleth map explorer for global
//! health indicators.
//!
//! The application loads an indicator catalog, provisions country- and
//! region-level metric tables, and renders an interactive choropleth with
//! date, aggregation, and boundary-level controls.

mod config;
mod data;
mod geo;
mod state;
mod ui;

use config::{ConfigLoadChannel, ConfigLoadResult};
use eframe::egui;
use state::{AppState, DisplaySettings, UrlParams};
use ui::visualization::{VisualizationEvent, VisualizationParams};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Indicator Explorer",
        native_options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application: owns all state and drives the UI.
pub struct ExplorerApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Channel for the async configuration load
    config_channel: ConfigLoadChannel,

    /// URL parameters captured at startup, applied once config loads
    pending_url: Option<UrlParams>,

    /// Monotonic instant of last URL push (for throttling to ~1/sec)
    last_url_push: web_time::Instant,
}

impl ExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::new();

        // Restore persisted display preferences
        let settings = DisplaySettings::load();
        state.viz_state.agg_type = settings.agg_type;
        state.viz_state.bound_level = settings.bound_level;
        state.viz_state.use_per_capita = settings.use_per_capita;

        // Capture shareable-URL parameters; indicator and date need the
        // catalog for validation, so they wait for the config load
        let pending_url = Some(state::parse_from_url());

        let config_channel = ConfigLoadChannel::new();
        config_channel.load(cc.egui_ctx.clone());

        Self {
            state,
            config_channel,
            pending_url,
            last_url_push: web_time::Instant::now(),
        }
    }

    /// Non-blocking poll for a completed configuration load.
    fn poll_config(&mut self) {
        if let Some(result) = self.config_channel.try_recv() {
            match result {
                ConfigLoadResult::Loaded(config) => {
                    log::info!(
                        "Configuration loaded: {} indicators, {} to {}",
                        config.indicators.len(),
                        config.start_date,
                        config.end_date
                    );
                    self.state.apply_config(config);
                    self.apply_pending_url();
                }
                ConfigLoadResult::Error(msg) => {
                    log::warn!("Configuration load failed: {}", msg);
                    self.state.status_message = format!("Config error: {msg}");
                }
            }
        }
    }

    /// Applies startup URL parameters once the catalog can validate them.
    fn apply_pending_url(&mut self) {
        let Some(params) = self.pending_url.take() else {
            return;
        };
        let Some(config) = &self.state.config else {
            return;
        };

        if let Some(indicator) = params.indicator {
            if config.indicator(&indicator).is_some() {
                self.state.viz_state.indicator = indicator;
            }
        }
        if let Some(date) = params.date {
            if self.state.dates.contains(&date) {
                self.state.viz_state.active_date = date;
            }
        }
        if let (Some(lat), Some(lon)) = (params.lat, params.lon) {
            self.state.viz_state.viewport.center_lat = lat;
            self.state.viz_state.viewport.center_lon = lon;
        }
    }

    /// Pushes the shareable view state into the URL, throttled.
    fn push_url_state(&mut self) {
        if self.last_url_push.elapsed().as_secs_f32() < 1.0 {
            return;
        }
        let viz = &self.state.viz_state;
        state::push_to_url(
            &viz.indicator,
            viz.active_date,
            viz.viewport.center_lat,
            viz.viewport.center_lon,
        );
        self.last_url_push = web_time::Instant::now();
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_config();

        ui::render_top_bar(ctx, &self.state);
        ui::render_controls_panel(ctx, &mut self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.state;
            let viz = &mut state.viz_state;

            let params = VisualizationParams {
                agg_type: viz.agg_type,
                use_per_capita: viz.use_per_capita,
                bound_level: viz.bound_level,
                indicator: &viz.indicator,
                active_date: viz.active_date,
                country_data: &state.country_data,
                region_data: &state.region_data,
                dates: &state.dates,
                config_loaded: state.config.is_some(),
            };

            if let Some(VisualizationEvent::ActiveDateChanged(date)) =
                ui::render_visualization(ui, &params, &mut viz.viewport)
            {
                log::info!("Active date changed to {}", date);
                viz.active_date = date;
            }
        });

        self.push_url_state();
    }
}
