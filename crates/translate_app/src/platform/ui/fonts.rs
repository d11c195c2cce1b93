use std::fs;
use std::path::PathBuf;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use translate_logging::{translate_info, translate_warn};

const CJK_FONT_NAME: &str = "cjk_fallback";

/// Adds a system CJK font behind egui's defaults so Japanese text renders.
pub fn install_cjk_fallback(ctx: &egui::Context) {
    let Some(bytes) = load_cjk_font() else {
        translate_warn!("No CJK font found; Japanese text will render as boxes");
        return;
    };

    let mut definitions = FontDefinitions::default();
    definitions
        .font_data
        .insert(CJK_FONT_NAME.to_string(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        if let Some(fonts) = definitions.families.get_mut(&family) {
            fonts.push(CJK_FONT_NAME.to_string());
        }
    }
    ctx.set_fonts(definitions);
}

fn load_cjk_font() -> Option<Vec<u8>> {
    for path in candidates() {
        if !path.exists() {
            continue;
        }
        match fs::read(&path) {
            Ok(bytes) => {
                translate_info!("Loaded CJK font from {}", path.display());
                return Some(bytes);
            }
            Err(err) => translate_warn!("Failed to read font {}: {}", path.display(), err),
        }
    }
    None
}

fn candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from("/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc"));
        paths.push(PathBuf::from("/System/Library/Fonts/Hiragino Sans GB.ttc"));
        paths.push(PathBuf::from("/Library/Fonts/Arial Unicode.ttf"));
    }

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from(r"C:\Windows\Fonts\YuGothM.ttc"));
        paths.push(PathBuf::from(r"C:\Windows\Fonts\meiryo.ttc"));
        paths.push(PathBuf::from(r"C:\Windows\Fonts\msgothic.ttc"));
    }

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from(
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        ));
        paths.push(PathBuf::from(
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        ));
        paths.push(PathBuf::from(
            "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
        ));
    }

    paths
}
