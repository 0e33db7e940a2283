use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{multispace0, one_of, satisfy},
    combinator::{map, recognize},
    multi::many0,
    sequence::pair,
    IResult,
};
use crate::token::{RawToken, Span};

/// Letters and digits from any script; headlines carry names like "Pokémon".
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// A run of word characters, optionally joined by inner connectors:
/// "U.S", "Coca-Cola", "AT&T", "don't", "3.5".
fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_word_char),
        many0(pair(one_of("'’-.&"), take_while1(is_word_char))),
    ))(input)
}

fn punct(input: &str) -> IResult<&str, char> {
    satisfy(|c| !c.is_whitespace())(input)
}

/// Splits a trailing possessive clitic off a word: "Biden's" -> ("Biden", "'s").
fn split_possessive(word: &str) -> Option<(&str, &str)> {
    for clitic in ["'s", "’s", "'S", "’S"] {
        if word.len() > clitic.len() && word.ends_with(clitic) {
            let at = word.len() - clitic.len();
            return Some((&word[..at], &word[at..]));
        }
    }
    None
}

pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        let start = original_input.len() - input.len();
        let parse_res: IResult<&str, RawToken> = alt((
            map(word, RawToken::Word),
            map(punct, RawToken::Punct),
        ))(input);

        match parse_res {
            Ok((next_input, RawToken::Word(w))) => {
                match split_possessive(w) {
                    Some((stem, clitic)) => {
                        let mid = start + stem.len();
                        result.push((Span::new(start, mid), RawToken::Word(stem)));
                        result.push((Span::new(mid, mid + clitic.len()), RawToken::Possessive(clitic)));
                    }
                    None => result.push((Span::new(start, start + w.len()), RawToken::Word(w))),
                }
                input = next_input;
            }
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Unreachable for non-empty input, but never loop forever.
                match input.chars().next() {
                    Some(c) => input = &input[c.len_utf8()..],
                    None => break,
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        parse_with_spans(input)
            .into_iter()
            .map(|(span, _)| &input[span.start..span.end])
            .collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            texts("Scientists discover new species, again!"),
            vec!["Scientists", "discover", "new", "species", ",", "again", "!"]
        );
    }

    #[test]
    fn test_inner_connectors_stay_in_word() {
        assert_eq!(texts("U.S. backs AT&T's re-elect bid"), vec!["U.S", ".", "backs", "AT&T", "'s", "re-elect", "bid"]);
        assert_eq!(texts("Prices rise 3.5% in Zürich"), vec!["Prices", "rise", "3.5", "%", "in", "Zürich"]);
    }

    #[test]
    fn test_possessive_split() {
        let input = "Biden’s plan";
        let tokens = parse_with_spans(input);
        assert_eq!(tokens[0].1, RawToken::Word("Biden"));
        assert_eq!(tokens[1].1, RawToken::Possessive("’s"));
        assert_eq!(tokens[1].0, Span::new(5, 9));
    }

    #[test]
    fn test_leading_quote_is_punct() {
        let tokens = parse_with_spans("'Hello' world");
        assert_eq!(tokens[0].1, RawToken::Punct('\''));
        assert_eq!(tokens[1].1, RawToken::Word("Hello"));
        assert_eq!(tokens[2].1, RawToken::Punct('\''));
    }
}
