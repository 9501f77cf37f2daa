use lufa_export::metrics::{glyph_width, text_units, text_width, wrap_text};

#[test]
fn widths_follow_helvetica_metrics() {
    assert_eq!(glyph_width('a', false), 556);
    assert_eq!(glyph_width('i', false), 222);
    assert_eq!(glyph_width('i', true), 278);
    assert_eq!(glyph_width('W', false), 944);
    // 556 + 556 + 500 at 10pt
    assert_eq!(text_width("abc", 10.0, false), 16.12);
}

#[test]
fn accented_letters_measure_like_their_base() {
    assert_eq!(glyph_width('ó', false), glyph_width('o', false));
    assert_eq!(glyph_width('Ñ', true), glyph_width('N', true));
    assert_eq!(text_width("Producción", 10.0, false), text_width("Produccion", 10.0, false));
}

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap_text("Hola mundo", 10.0, false, 500.0), vec!["Hola mundo"]);
}

#[test]
fn empty_text_yields_one_empty_line() {
    assert_eq!(wrap_text("", 10.0, false, 100.0), vec![String::new()]);
}

#[test]
fn words_are_packed_greedily() {
    // "aa" is 11.12pt at 10pt; "aa aa" is 25.02pt.
    let lines = wrap_text("aa aa aa aa aa", 10.0, false, 26.0);

    assert_eq!(lines, vec!["aa aa", "aa aa", "aa"]);
}

#[test]
fn newlines_start_new_lines_and_blank_lines_survive() {
    let lines = wrap_text("uno\r\n\ndos", 10.0, false, 500.0);

    assert_eq!(lines, vec!["uno", "", "dos"]);
}

#[test]
fn runs_of_whitespace_collapse() {
    assert_eq!(wrap_text("  a \t  b  ", 10.0, false, 500.0), vec!["a b"]);
}

#[test]
fn overlong_word_is_split_between_characters() {
    // Each "a" is 5.56pt; four fit in 23pt.
    let lines = wrap_text("aaaaaaaaaa", 10.0, false, 23.0);

    assert_eq!(lines, vec!["aaaa", "aaaa", "aa"]);
}

#[test]
fn split_word_tail_joins_following_word() {
    let lines = wrap_text("aaaaa b", 10.0, false, 23.0);

    assert_eq!(lines, vec!["aaaa", "a b"]);
}

#[test]
fn every_line_fits_the_width() {
    let text = "La exportación de esponjas de lufa orgánica hacia Canadá requiere \
                certificaciones fitosanitarias y un empaque biodegradable.";
    let max = 120.0;

    let lines = wrap_text(text, 9.0, false, max);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width(line, 9.0, false) <= max, "{line:?} is too wide");
    }
    assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
}

#[test]
fn very_long_words_do_not_overflow_the_width_sum() {
    // More than u32::MAX thousandths of an em in total.
    let word = "@".repeat(4_300_000);

    assert_eq!(text_units(&word, false), 4_300_000 * 1015);

    let lines = wrap_text(&word, 10.0, false, 480.0);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| text_width(l, 10.0, false) <= 480.0));
    assert_eq!(lines.iter().map(|l| l.len()).sum::<usize>(), word.len());
}
