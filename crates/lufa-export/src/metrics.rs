//! Helvetica text metrics and greedy word wrap.
//!
//! Widths are the standard Type 1 AFM advance widths in thousandths of an
//! em, so line breaks depend only on the text, the font size and the line
//! width, never on the PDF backend.

/// Helvetica advance widths for ASCII 32..=126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

/// Advance width of one character in thousandths of an em.
pub fn glyph_width(c: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    let ascii = match c {
        ' '..='~' => c,
        // Accented Latin letters share their base letter's advance.
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ñ' => 'N',
        'Ç' => 'C',
        '\t' => ' ',
        '•' => return 350,
        '¿' => return 611,
        '¡' => return 333,
        '°' => return 400,
        '–' => return 556,
        '—' => return 1000,
        '€' => return 556,
        _ => return FALLBACK_WIDTH,
    };
    table[(ascii as usize) - 32]
}

/// Width of `text` in thousandths of an em.
pub fn text_units(text: &str, bold: bool) -> u64 {
    text.chars().map(|c| u64::from(glyph_width(c, bold))).sum()
}

/// Width of `text` in points at `font_size`.
pub fn text_width(text: &str, font_size: f64, bold: bool) -> f64 {
    units_to_points(text_units(text, bold), font_size)
}

fn units_to_points(units: u64, font_size: f64) -> f64 {
    units as f64 * font_size / 1000.0
}

/// Break `text` into lines no wider than `max_width` points.
///
/// Words are separated by whitespace and packed greedily; each `\n` starts
/// a new line and blank input lines are kept. A single word wider than the
/// line is split between characters. Empty text yields one empty line.
pub fn wrap_text(text: &str, font_size: f64, bold: bool, max_width: f64) -> Vec<String> {
    let space = u64::from(glyph_width(' ', bold));
    let fits = |units: u64| units_to_points(units, font_size) <= max_width;

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        let mut current = String::new();
        let mut current_units = 0u64;
        let mut produced = false;

        for word in paragraph.split_whitespace() {
            let word_units = text_units(word, bold);

            if !current.is_empty() && fits(current_units + space + word_units) {
                current.push(' ');
                current.push_str(word);
                current_units += space + word_units;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                produced = true;
            }

            if fits(word_units) {
                current.push_str(word);
                current_units = word_units;
                continue;
            }

            // Split an over-long word; the tail stays open for the next word.
            current_units = 0;
            for c in word.chars() {
                let c_units = u64::from(glyph_width(c, bold));
                if !current.is_empty() && !fits(current_units + c_units) {
                    lines.push(std::mem::take(&mut current));
                    produced = true;
                    current_units = 0;
                }
                current.push(c);
                current_units += c_units;
            }
        }

        if !current.is_empty() || !produced {
            lines.push(current);
        }
    }
    lines
}
