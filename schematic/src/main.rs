use std::env;
use std::fs;

use offset_core::{AppState, Locale, render_fields};
use schematic_core::{build_schematic_svg, font_database, render_png};

const USAGE: &str =
    "Usage: schematic <bit> <bush> <target> <output.(png|svg)> [de|en] [px_per_unit]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    let output = &args[4];
    let locale = match args.get(5) {
        Some(code) => Locale::from_code(code).unwrap_or_else(|| {
            eprintln!("warning: unknown language '{code}', using de");
            Locale::De
        }),
        None => Locale::default(),
    };
    let px_per_unit: f64 = args.get(6).and_then(|s| s.parse().ok()).unwrap_or(3.0);

    let app = AppState { locale };
    let display = render_fields(&app, &args[1], &args[2], &args[3]);
    if display.is_error() {
        eprintln!("warning: {}: {}", display.result, display.formula);
    } else {
        eprintln!("{} / {}", display.result, display.template_result);
    }

    let (svg, w_px, h_px) = build_schematic_svg(&display, locale, px_per_unit);
    if output.to_ascii_lowercase().ends_with(".svg") {
        fs::write(output, svg)?;
        return Ok(());
    }
    if !output.to_ascii_lowercase().ends_with(".png") {
        eprintln!("warning: unknown extension for {output}; writing PNG");
    }

    let mut fontdb = font_database(fonts::FONT_BYTES);
    if fontdb.len() == 0 {
        eprintln!("warning: no embedded font, falling back to system fonts");
        fontdb.load_system_fonts();
    }
    let png = render_png(&svg, w_px, h_px, fontdb)?;
    fs::write(output, png)?;
    Ok(())
}
