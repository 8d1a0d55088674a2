use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use zip::ZipArchive;

const FONT_FILE: &str = "DejaVuSans.ttf";
const ZIP_URL: &str =
    "https://github.com/dejavu-fonts/dejavu-fonts/releases/download/version_2_37/dejavu-fonts-ttf-2.37.zip";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FONT_TTF");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target_font = out_dir.join(FONT_FILE);

    // Incremental build
    if target_font.exists() && fs::metadata(&target_font).map(|m| m.len() > 0).unwrap_or(false) {
        return;
    }

    if let Ok(path) = env::var("FONT_TTF") {
        match fs::copy(&path, &target_font) {
            Ok(_) => return,
            Err(e) => println!("cargo:warning=failed to copy FONT_TTF {path}: {e}"),
        }
    }

    if let Err(e) = fetch_font(&out_dir, &target_font) {
        // Text is dropped from rasterized output, the rest still renders.
        println!("cargo:warning=no embedded font ({e}); set FONT_TTF to embed one");
        fs::write(&target_font, b"").expect("write empty font placeholder");
    }
}

fn download(url: &str, dest: &Path) -> bool {
    let dest = dest.to_string_lossy();
    let curl = Command::new("curl")
        .args(["-L", "-f", "-s", "-o", &*dest, url])
        .status();
    if let Ok(st) = curl
        && st.success()
    {
        return true;
    }
    let wget = Command::new("wget").args(["-q", "-O", &*dest, url]).status();
    matches!(wget, Ok(st) if st.success())
}

fn fetch_font(out_dir: &Path, target_font: &Path) -> Result<(), String> {
    let zip_path = out_dir.join("dejavu-fonts.zip");
    if !download(ZIP_URL, &zip_path) {
        return Err(format!("download of {ZIP_URL} failed"));
    }

    let mut data = Vec::new();
    fs::File::open(&zip_path)
        .and_then(|mut f| f.read_to_end(&mut data))
        .map_err(|e| format!("zip read failed: {e}"))?;
    let mut zip = ZipArchive::new(std::io::Cursor::new(data)).map_err(|e| format!("zip parse failed: {e}"))?;
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).map_err(|e| format!("zip entry {i}: {e}"))?;
        if file.name().ends_with(&format!("/ttf/{FONT_FILE}")) {
            let mut buf = Vec::new();
            std::io::copy(&mut file, &mut buf).map_err(|e| format!("extract failed: {e}"))?;
            fs::write(target_font, &buf).map_err(|e| format!("write font failed: {e}"))?;
            return Ok(());
        }
    }
    Err(format!("{FONT_FILE} not found in archive"))
}
