//! Utility functions for visualization: colors, locale mapping, label sizing, file names.

use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;
use regex::Regex;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// Whole-number tick label with locale thousands separators.
pub fn format_count(v: f64, locale: &Locale) -> String {
    let n = v.round() as i64;
    n.to_formatted_string(locale)
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Width of the left label area, sized to the widest y tick label in `ymin..ymax`.
pub fn compute_left_label_area_px(
    ymin: f64,
    ymax: f64,
    ticks: usize,
    font_px: u32,
    locale: &Locale,
) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let v = ymin + (ymax - ymin) * t;
        max_px = max_px.max(estimate_text_width_px(&format_count(v, locale), font_px));
    }

    // Padding for tick marks plus room for the rotated axis description.
    let with_padding = max_px.saturating_add(34);
    with_padding.clamp(56, 160)
}

/// File-name friendly form of a chart title.
pub fn slugify(title: &str) -> String {
    let re = Regex::new(r"[^A-Za-z0-9]+").expect("valid regex");
    let slug = re.replace_all(title, "_").trim_matches('_').to_lowercase();
    if slug.is_empty() {
        "chart".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_file_safe() {
        assert_eq!(
            slugify("Daily Deaths (Washtenaw County, Michigan, US)"),
            "daily_deaths_washtenaw_county_michigan_us"
        );
        assert_eq!(slugify("Total Confirmed Cases (Taiwan*)"), "total_confirmed_cases_taiwan");
        assert_eq!(slugify("***"), "chart");
    }

    #[test]
    fn counts_use_locale_separators() {
        assert_eq!(format_count(1234567.4, map_locale("en")), "1,234,567");
        assert_eq!(format_count(1234567.0, map_locale("DE")), "1.234.567");
        assert_eq!(format_count(-1500.0, map_locale("xx")), "-1,500");
    }
}
