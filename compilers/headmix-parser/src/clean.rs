//! Feed text normalisation ahead of annotation.

use nom::{
    bytes::complete::{is_not, take_till1},
    character::complete::char,
    combinator::recognize,
    sequence::delimited,
    IResult,
};

/// An HTML/XML tag such as `<b>` or `</a>`. Empty brackets are not a tag.
fn markup(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('<'), is_not(">"), char('>')))(input)
}

fn text(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == '<')(input)
}

/// Strips markup, collapses whitespace runs and trims surrounding quotes.
///
/// "<b>Mayor</b>  resigns" -> "Mayor resigns", "\"Quoted\"" -> "Quoted".
pub fn clean_headline(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut input = raw;

    while !input.is_empty() {
        if let Ok((rest, _)) = markup(input) {
            input = rest;
            continue;
        }
        match text(input) {
            Ok((rest, chunk)) => {
                stripped.push_str(chunk);
                input = rest;
            }
            Err(_) => {
                // A '<' that does not open a tag is literal text.
                stripped.push('<');
                input = &input[1..];
            }
        }
    }

    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches(|c| c == '"' || c == '\'').trim().to_string()
}
