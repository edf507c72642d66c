//! Static width tables of the PDF standard fonts and the word wrapping built on top of them.
//!
//! The standard fonts are never embedded into the document, every PDF reader ships them, so the
//! layout only needs their advance widths. The tables hold the AFM widths (in thousandths of an em)
//! of the printable ASCII characters, `WIDTHS[i]` being the width of the character `(i + 32)`.
//! Characters outside that range fall back to a per-font width.

use crate::style::FontFamily;

/// The weight or slant of a font within its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
}

/// The subset of the fourteen standard PDF fonts used by the presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    Courier,
    CourierBold,
    CourierOblique,
}

impl StandardFont {
    pub fn from_family(font_family: FontFamily, font_variant: FontVariant) -> StandardFont {
        match (font_family, font_variant) {
            (FontFamily::Helvetica, FontVariant::Regular) => StandardFont::Helvetica,
            (FontFamily::Helvetica, FontVariant::Bold) => StandardFont::HelveticaBold,
            (FontFamily::Helvetica, FontVariant::Italic) => StandardFont::HelveticaOblique,
            (FontFamily::Times, FontVariant::Regular) => StandardFont::TimesRoman,
            (FontFamily::Times, FontVariant::Bold) => StandardFont::TimesBold,
            (FontFamily::Times, FontVariant::Italic) => StandardFont::TimesItalic,
            (FontFamily::Courier, FontVariant::Regular) => StandardFont::Courier,
            (FontFamily::Courier, FontVariant::Bold) => StandardFont::CourierBold,
            (FontFamily::Courier, FontVariant::Italic) => StandardFont::CourierOblique,
        }
    }

    /// The `BaseFont` name of the font as defined by the PDF specification.
    pub fn base_font_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
        }
    }

    /// The width of a single character in thousandths of an em.
    pub fn character_width(self, character: char) -> u16 {
        let widths = match self {
            // The oblique cut shares the advance widths of the upright one
            StandardFont::Helvetica | StandardFont::HelveticaOblique => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
            StandardFont::TimesRoman => &TIMES_ROMAN_WIDTHS,
            StandardFont::TimesBold => &TIMES_BOLD_WIDTHS,
            StandardFont::TimesItalic => &TIMES_ITALIC_WIDTHS,
            StandardFont::Courier | StandardFont::CourierBold | StandardFont::CourierOblique => {
                return COURIER_WIDTH
            }
        };

        let code = character as usize;
        match character {
            ' '..='~' => widths[code - 32],
            '•' => 350,
            _ => widths[usize::from(b'o') - 32],
        }
    }

    /// The width of the text, in points, when set at the given font size.
    pub fn text_width(self, text: &str, font_size: f32) -> f32 {
        let thousandths: u32 = text
            .chars()
            .map(|character| u32::from(self.character_width(character)))
            .sum();

        thousandths as f32 * font_size / 1000.0
    }

    /// Breaks the text into lines no wider than `maximum_width`, breaking at whitespace and, for
    /// the words which do not fit on a line on their own, between characters. Blank text yields no
    /// lines at all.
    pub fn split_text_to_size(self, text: &str, font_size: f32, maximum_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current_line = String::new();

        for word in text.split_whitespace() {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };
            if self.text_width(&candidate, font_size) <= maximum_width {
                current_line = candidate;
                continue;
            }

            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if self.text_width(word, font_size) <= maximum_width {
                current_line = word.to_string();
            } else {
                // The word is too long for any line, so it is broken where it overflows
                for character in word.chars() {
                    current_line.push(character);
                    if self.text_width(&current_line, font_size) > maximum_width
                        && current_line.chars().count() > 1
                    {
                        current_line.pop();
                        lines.push(std::mem::replace(&mut current_line, character.to_string()));
                    }
                }
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }

        lines
    }
}

const COURIER_WIDTH: u16 = 600;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 675, 675, 675, 500, 920,
    611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
    667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
    389, 278, 389, 422, 500, 333,
    500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
    500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
    400, 275, 400, 541,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_the_font_metrics() {
        // "Hello" in Helvetica: 722 + 556 + 222 + 222 + 556
        assert_eq!(StandardFont::Helvetica.text_width("Hello", 10.0), 22.78);
        assert_eq!(StandardFont::Courier.text_width("abc", 10.0), 18.0);
        assert!(
            StandardFont::HelveticaBold.text_width("Resume", 12.0)
                > StandardFont::Helvetica.text_width("Resume", 12.0)
        );
    }

    #[test]
    fn families_map_to_their_standard_fonts() {
        assert_eq!(
            StandardFont::from_family(FontFamily::Times, FontVariant::Italic).base_font_name(),
            "Times-Italic"
        );
        assert_eq!(
            StandardFont::from_family(FontFamily::Courier, FontVariant::Bold).base_font_name(),
            "Courier-Bold"
        );
    }

    #[test]
    fn wrapping_keeps_every_line_within_the_width() {
        let text = "Led the architecture and development of a new microservices-based platform, \
                    improving system scalability by 40% and reducing latency by 20%.";
        let lines = StandardFont::Helvetica.split_text_to_size(text, 12.0, 200.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(StandardFont::Helvetica.text_width(line, 12.0) <= 200.0, "{:?}", line);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn overlong_words_are_broken_between_characters() {
        let url = "linkedin.com/in/an-unreasonably-long-profile-identifier-for-a-sidebar";
        let lines = StandardFont::Helvetica.split_text_to_size(url, 11.0, 100.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), url);
        for line in &lines {
            assert!(StandardFont::Helvetica.text_width(line, 11.0) <= 100.0);
        }
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(StandardFont::TimesRoman
            .split_text_to_size("   ", 11.0, 100.0)
            .is_empty());
    }
}
