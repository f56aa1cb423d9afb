//! Lexer for formation labels using logos

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
pub enum Token {
    #[regex("[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Number(u32),

    // ASCII hyphen-minus plus the typographic dashes providers emit
    #[regex(r"[-\x{2010}-\x{2015}\x{2212}\x{FE58}\x{FE63}\x{FF0D}]")]
    Dash,
}

/// Lex a formation label into tokens, or `None` if any character is not
/// a digit, a dash variant or whitespace.
pub fn tokenize(source: &str) -> Option<Vec<Token>> {
    Token::lexer(source).collect::<Result<Vec<_>, _>>().ok()
}
