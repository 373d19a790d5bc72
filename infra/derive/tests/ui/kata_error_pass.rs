use std::borrow::Cow;

#[kata_derive::kata_error]
pub enum ParseError {
    #[error("Bad number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Empty input{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Internal parse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::Empty { context: None }).context("parsing");
    }
    Ok(raw.parse::<i64>().context("parsing raw input")?)
}

fn main() {
    let _ = parse("12");
    let _: ParseError = "boom".into();
}
