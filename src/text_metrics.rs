//! Optional font-backed label measurement (feature `font-metrics`). The
//! layout core takes label extents as input; this helper fills them in from
//! the system sans-serif font so CLI scenes don't need pre-measured text.

use crate::scene::LabelText;
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use ttf_parser::Face;

static MEASURER: Lazy<Mutex<LabelMeasurer>> = Lazy::new(|| Mutex::new(LabelMeasurer::new()));

/// Measures `text` at `font_size` px and returns a ready-to-use label.
/// Returns `None` when no usable system font is found.
pub fn measure_label(text: &str, font_size: f32) -> Option<LabelText> {
    if font_size <= 0.0 {
        return None;
    }
    let mut guard = MEASURER.lock().ok()?;
    let (width, height) = guard.measure(text, font_size)?;
    Some(LabelText::new(text, width, height))
}

struct FontData {
    bytes: Vec<u8>,
    index: u32,
}

struct LabelMeasurer {
    db: Database,
    loaded: bool,
    /// Resolved sans-serif face bytes; `Some(None)` caches a failed lookup.
    font: Option<Option<FontData>>,
}

impl LabelMeasurer {
    fn new() -> Self {
        Self {
            db: Database::new(),
            loaded: false,
            font: None,
        }
    }

    fn measure(&mut self, text: &str, font_size: f32) -> Option<(f32, f32)> {
        if self.font.is_none() {
            self.font = Some(self.resolve_font());
        }
        let font = self.font.as_ref()?.as_ref()?;
        let face = Face::parse(&font.bytes, font.index).ok()?;

        let units_per_em = face.units_per_em().max(1) as f32;
        let scale = font_size / units_per_em;
        let fallback = font_size * 0.56;

        let mut width = 0.0f32;
        for ch in text.chars() {
            if ch == '\n' || ch == '\r' {
                continue;
            }
            match face.glyph_index(ch).and_then(|id| face.glyph_hor_advance(id)) {
                Some(advance) => width += advance as f32 * scale,
                None => width += fallback,
            }
        }
        let height = (face.ascender() as f32 - face.descender() as f32) * scale;
        Some((width, height))
    }

    fn resolve_font(&mut self) -> Option<FontData> {
        if !self.loaded {
            self.db.load_system_fonts();
            self.loaded = true;
        }
        let query = Query {
            families: &[Family::SansSerif],
            weight: Weight::NORMAL,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;
        let face = self.db.face(id)?;
        let index = face.index;
        let bytes = match &face.source {
            Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            Source::File(path) => std::fs::read(path).ok()?,
            Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
        };
        Some(FontData { bytes, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_measures_zero_width() {
        // Skip when the environment has no fonts at all.
        let Some(label) = measure_label("", 13.0) else {
            return;
        };
        assert_eq!(label.width, 0.0);
        assert!(label.height > 0.0);
    }

    #[test]
    fn longer_text_is_wider() {
        let (Some(short), Some(long)) = (measure_label("Gate", 13.0), measure_label("Gate Epsilon", 13.0))
        else {
            return;
        };
        assert!(long.width > short.width);
    }
}
