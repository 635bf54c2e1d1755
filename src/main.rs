// src/main.rs
//
// 98kalculator : point d'entrée natif
// -----------------------------------
// - eframe::run_native + NativeOptions (fenêtre 500x750, min 480x680)
// - journalisation env_logger : RUST_LOG=debug pour tracer le noyau
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d'entrée seulement

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "98kalculator";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([500.0, 750.0])
            .with_min_inner_size([480.0, 680.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
