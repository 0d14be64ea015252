//! DLAY standalone editor.

use clap::Parser;
use dlay_config::{FACTORY_PRESET_NAMES, list_user_presets, preset_name_from_path};
use dlay_gui::{AppConfig, DlayApp, window_size};
use dlay_gui_core::DelayEditor;
use eframe::egui;

/// WSTD DLAY stereo delay editor.
#[derive(Parser, Debug)]
#[command(name = "dlay")]
#[command(about = "Standalone editor for the WSTD DLAY stereo delay")]
#[command(version)]
struct Args {
    /// Preset to load at startup (factory name, user preset name, or path)
    #[arg(long)]
    preset: Option<String>,

    /// UI scale factor
    #[arg(long, default_value = "1.0")]
    scale: f32,

    /// Tempo in BPM used to show synced delay times
    #[arg(long, default_value = "120")]
    bpm: f32,

    /// Print the available presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge legacy log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    if args.list_presets {
        println!("Factory presets:");
        for name in FACTORY_PRESET_NAMES {
            println!("  {name}");
        }
        let user = list_user_presets();
        if !user.is_empty() {
            println!("User presets:");
            for path in &user {
                if let Some(name) = preset_name_from_path(path) {
                    println!("  {name}  ({})", path.display());
                }
            }
        }
        return Ok(());
    }

    tracing::info!(scale = args.scale, bpm = args.bpm, "starting DLAY");

    let config = AppConfig {
        scale: args.scale,
        bpm: args.bpm,
        preset: args.preset,
    };
    let size = window_size(&DelayEditor::new(config.scale));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_title("WSTD DLAY"),
        ..Default::default()
    };

    eframe::run_native(
        "WSTD DLAY",
        options,
        Box::new(move |cc| Ok(Box::new(DlayApp::new(cc, &config)))),
    )
}
