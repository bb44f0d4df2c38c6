use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductSlug;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Digit runs this long are treated as numeric spam and dropped whole.
static LONG_DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{5,}").expect("digit run pattern must compile"));

const MAX_REPEAT: usize = 2;

/// Underscore-separated slug generator used for product URLs.
///
/// The pipeline order matters: long digit runs are removed before symbols
/// are stripped, and repeated characters are collapsed before whitespace
/// becomes `_`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn generate(&self, input: &str) -> DomainResult<ProductSlug> {
        generate_slug(input)
    }
}

pub fn generate_slug(input: &str) -> DomainResult<ProductSlug> {
    if input.trim_matches(is_separator).is_empty() {
        return Err(DomainError::Validation(
            "title cannot be empty for slug generation".into(),
        ));
    }

    let lowered = input.to_lowercase();
    let stripped = strip_diacritics(lowered.trim_matches(is_separator));
    let without_spam = LONG_DIGIT_RUN.replace_all(&stripped, "");
    let kept: String = without_spam
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_separator(*c) || *c == '_')
        .collect();
    let collapsed = collapse_repeats(&kept);
    let joined = join_with_underscores(&collapsed);
    let slug = joined.trim_matches('_');

    if slug.is_empty() {
        return Err(DomainError::Validation(
            "cannot generate slug from provided input".into(),
        ));
    }

    tracing::debug!(input, slug, "generated slug");
    ProductSlug::new(slug)
}

/// Word separators: the ECMAScript `\s` class. Unlike `char::is_whitespace`
/// this includes U+FEFF and excludes U+0085, so titles pasted with a BOM
/// still split into words.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000b}'
            | '\u{000c}'
            | '\r'
            | ' '
            | '\u{00a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

fn strip_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

fn collapse_repeats(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous = None;
    let mut run = 0usize;
    for ch in value.chars() {
        if previous == Some(ch) {
            run += 1;
        } else {
            previous = Some(ch);
            run = 1;
        }
        if run <= MAX_REPEAT {
            out.push(ch);
        }
    }
    out
}

// Whitespace runs become one `_`, and `_` runs collapse to one.
fn join_with_underscores(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if is_separator(ch) || ch == '_' {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        generate_slug(input).expect("slug should generate").into_inner()
    }

    fn assert_invalid_input(input: &str) {
        match generate_slug(input) {
            Err(DomainError::Validation(_)) => {}
            other => panic!("expected validation error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn strips_accents() {
        assert_eq!(slug("Café Olé"), "cafe_ole");
        assert_eq!(slug("Crème Brûlée Ñandú"), "creme_brulee_nandu");
    }

    #[test]
    fn drops_long_digit_runs_and_keeps_short_ones() {
        assert_eq!(slug("Item 12345 Special"), "item_special");
        assert_eq!(slug("iPhone 15"), "iphone_15");
        assert_eq!(slug("Pizza 2025"), "pizza_2025");
        assert_eq!(slug("Galaxy S24"), "galaxy_s24");
    }

    #[test]
    fn digit_runs_are_measured_before_symbols_are_removed() {
        assert_eq!(slug("Serial 12-345-678"), "serial_12345678");
        assert_eq!(slug("Lot 1111111"), "lot");
    }

    #[test]
    fn collapses_repeated_characters() {
        assert_eq!(slug("Pizzzza"), "pizza");
        assert_eq!(slug("Ssstop"), "sstop");
        assert_eq!(slug("Coffee"), "coffee");
        assert_eq!(slug("Boooo!!!ok"), "book");
    }

    #[test]
    fn collapses_and_trims_underscores() {
        assert_eq!(slug("  __Hot   Deal__  "), "hot_deal");
        assert_eq!(slug("one _ two\t\nthree"), "one_two_three");
    }

    #[test]
    fn separators_follow_the_ecmascript_space_class() {
        assert_eq!(slug("red\u{feff}shoes"), "red_shoes");
        assert_eq!(slug("red\u{3000}shoes\u{2028}box"), "red_shoes_box");
        assert_eq!(slug("red\u{85}shoes"), "redshoes");
        assert_eq!(slug("\u{feff}Red Shoes\u{feff}"), "red_shoes");
        assert_invalid_input("\u{feff}\u{a0}");
    }

    #[test]
    fn removes_symbols_and_non_latin_scripts() {
        assert_eq!(slug("Red & Blue: 50% off!"), "red_blue_50_off");
        assert_eq!(slug("Tee 東京"), "tee");
    }

    #[test]
    fn rejects_empty_or_symbol_only_input() {
        assert_invalid_input("");
        assert_invalid_input("   ");
        assert_invalid_input("!!!@@@");
        assert_invalid_input("123456789");
    }

    #[test]
    fn output_is_deterministic_and_structurally_valid() {
        let inputs = ["Café Olé", "Pizzzza", "  __Hot   Deal__  ", "iPhone 15 Pro Max"];
        for input in inputs {
            let first = slug(input);
            assert_eq!(first, slug(input));
            assert!(ProductSlug::is_valid(&first), "{first} should be valid");
            assert_eq!(slug(&first), first);
        }
    }

    #[test]
    fn validity_check_does_not_apply_generation_policies() {
        assert!(ProductSlug::is_valid("pizzzza"));
        assert_eq!(slug("pizzzza"), "pizza");
    }
}
