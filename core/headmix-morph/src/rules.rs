//! Regular English verb inflection.

use alloc::string::{String, ToString};

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// True when `word` ends in a consonant followed by `y` ("try", not "play").
fn consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('y'), Some(prev)) => !is_vowel(prev),
        _ => false,
    }
}

/// Third-person singular present of a base form: "run" -> "runs",
/// "watch" -> "watches", "try" -> "tries".
pub fn third_singular(base: &str) -> String {
    if ["ch", "sh", "x", "z", "o", "s"].iter().any(|end| base.ends_with(end)) {
        format!("{}es", base)
    } else if consonant_y(base) {
        format!("{}ies", &base[..base.len() - 1])
    } else {
        format!("{}s", base)
    }
}

/// Inverse of [`third_singular`]: "runs" -> "run", "watches" -> "watch".
/// Forms without a 3rd-singular suffix are returned unchanged.
pub fn strip_third_singular(form: &str) -> String {
    if form.len() > 3 && form.ends_with("ies") {
        return format!("{}y", &form[..form.len() - 3]);
    }
    if ["ches", "shes", "sses", "xes", "zes", "oes"].iter().any(|end| form.ends_with(end)) {
        return form[..form.len() - 2].to_string();
    }
    if form.ends_with('s') && !form.ends_with("ss") && form.len() > 1 {
        return form[..form.len() - 1].to_string();
    }
    form.to_string()
}

/// Simple past of a regular verb. Forms already ending in "-ed" are kept.
pub fn regular_past(base: &str) -> String {
    if base.ends_with("ed") {
        base.to_string()
    } else if base.ends_with('e') {
        format!("{}d", base)
    } else if consonant_y(base) {
        format!("{}ied", &base[..base.len() - 1])
    } else {
        format!("{}ed", base)
    }
}

/// Carries the capitalisation of `surface` over to `form`.
pub fn match_case(surface: &str, form: &str) -> String {
    let letters = surface.chars().filter(|c| c.is_alphabetic()).count();
    if letters > 1 && surface.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase) {
        return form.to_uppercase();
    }
    match (surface.chars().next(), form.chars().next()) {
        (Some(s), Some(f)) if s.is_uppercase() && !f.is_uppercase() => {
            let mut out: String = f.to_uppercase().collect();
            out.push_str(&form[f.len_utf8()..]);
            out
        }
        _ => form.to_string(),
    }
}

/// A lemma the regular rules can work on: letters, with inner hyphens or
/// apostrophes allowed ("re-elect").
pub fn is_inflectable(lemma: &str) -> bool {
    let first_last_alpha = matches!(
        (lemma.chars().next(), lemma.chars().last()),
        (Some(a), Some(b)) if a.is_alphabetic() && b.is_alphabetic()
    );
    first_last_alpha && lemma.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')
}
