// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul glyphs. Product names in the bundled
// dataset are Korean, so borrow a CJK-capable system font when one exists.

use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CANDIDATES: &[&str] = &[
    "C:/Windows/Fonts/malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

const FONT_NAME: &str = "hangul-fallback";

pub fn install(ctx: &egui::Context) {
    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
    else {
        logw!("Fonts: no CJK system font found; Hangul will not render");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));
    // Fallback only: Latin text keeps egui's default look.
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(FONT_NAME));
    }
    ctx.set_fonts(fonts);
    logf!("Fonts: loaded {}", path);
}
