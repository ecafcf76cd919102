//! UFO format conversion
//!
//! Pure data transformation from a [`FontDocument`] into the norad UFO
//! model. Every outline subpath becomes one closed contour of `line` points.

use crate::document::{DocumentGlyph, FontDocument};
use crate::outline::{GlyphOutline, OutlineSubpath};
use anyhow::{anyhow, Result};
use kurbo::Point;
use norad::Font;

/// `openTypeHeadCreated` format
const HEAD_CREATED_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// UFO lib key holding the glyph order
pub const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

impl OutlineSubpath {
    pub fn to_norad_contour(&self) -> norad::Contour {
        let points = self.points.iter().map(|p| line_point(*p)).collect();
        norad::Contour::new(points, None)
    }
}

fn line_point(point: Point) -> norad::ContourPoint {
    norad::ContourPoint::new(
        point.x,
        point.y,
        norad::PointType::Line,
        false, // smooth
        None,  // name
        None,  // identifier
    )
}

impl GlyphOutline {
    pub fn to_norad_contours(&self) -> Vec<norad::Contour> {
        self.subpaths()
            .iter()
            .map(OutlineSubpath::to_norad_contour)
            .collect()
    }
}

impl DocumentGlyph {
    pub fn to_norad_glyph(&self) -> Result<norad::Glyph> {
        self.name
            .parse::<norad::Name>()
            .map_err(|e| anyhow!("Invalid glyph name {:?}: {}", self.name, e))?;
        let mut glyph = norad::Glyph::new(&self.name);
        glyph.width = self.advance_width;

        let codepoint = char::from_u32(self.codepoint).ok_or_else(|| {
            anyhow!("Glyph {} has invalid codepoint {:#X}", self.name, self.codepoint)
        })?;
        glyph.codepoints.insert(codepoint);
        glyph.contours = self.outline.to_norad_contours();

        Ok(glyph)
    }
}

impl FontDocument {
    pub fn to_norad_font_info(&self) -> norad::FontInfo {
        let mut info = norad::FontInfo::default();
        info.family_name = Some(self.family_name.clone());
        info.style_name = Some(self.style_name.clone());
        if let Some(units_per_em) =
            norad::fontinfo::NonNegativeIntegerOrFloat::new(self.units_per_em)
        {
            info.units_per_em = Some(units_per_em);
        }
        info.ascender = Some(self.ascender);
        info.descender = Some(self.descender);
        info.open_type_head_created =
            Some(chrono::Utc::now().format(HEAD_CREATED_FORMAT).to_string());
        info
    }

    /// Convert to a complete norad Font, preserving glyph order
    pub fn to_norad_font(&self) -> Result<Font> {
        let mut font = Font::new();
        font.font_info = self.to_norad_font_info();

        let mut order = Vec::with_capacity(self.glyphs.len());
        let layer = font.default_layer_mut();
        for glyph_data in &self.glyphs {
            let glyph = glyph_data.to_norad_glyph()?;
            order.push(plist::Value::String(glyph.name().to_string()));
            layer.insert_glyph(glyph);
        }
        font.lib
            .insert(GLYPH_ORDER_KEY.to_string(), plist::Value::Array(order));

        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::BrutalitaSettings;
    use crate::document::build_font_document;
    use crate::font_source::{CharNames, GlyphSource};

    fn document() -> FontDocument {
        let sources = vec![
            GlyphSource::from_raw('a', &[vec![vec![0.0, 0.0], vec![1.0, 0.0]]]),
            GlyphSource::from_raw('á', &[vec![vec![0.0, 0.0]]]),
        ];
        build_font_document(
            &sources,
            &CharNames::parse("aacute,E1\n"),
            &BrutalitaSettings::default(),
            true,
        )
    }

    #[test]
    fn test_contour_points_are_closed_lines() {
        let document = document();
        let glyph = document.glyph("a").unwrap().to_norad_glyph().unwrap();

        // one quad and two vertex caps
        assert_eq!(glyph.contours.len(), 3);
        let quad = &glyph.contours[0];
        assert_eq!(quad.points.len(), 4);
        assert!(quad.points.iter().all(|p| p.typ == norad::PointType::Line));
        assert!(glyph.contours[1..].iter().all(|c| c.points.len() == 16));
        assert_eq!(glyph.width, 600.0);
        assert_eq!(glyph.codepoints.iter().collect::<Vec<_>>(), vec!['a']);
    }

    #[test]
    fn test_font_info_and_order() {
        let font = document().to_norad_font().unwrap();

        assert_eq!(font.font_info.family_name.as_deref(), Some("Brutalita"));
        assert_eq!(font.font_info.style_name.as_deref(), Some("Regular"));
        assert_eq!(font.font_info.ascender, Some(1000.0));
        assert_eq!(font.font_info.descender, Some(-200.0));
        assert!(font.font_info.open_type_head_created.is_some());

        let order: Vec<_> = font
            .lib
            .get(GLYPH_ORDER_KEY)
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .filter_map(|v| v.as_string())
            .collect();
        assert_eq!(order, vec![".notdef", "a", "aacute"]);
        assert!(font.default_layer().get_glyph(".notdef").unwrap().contours.is_empty());
    }
}
