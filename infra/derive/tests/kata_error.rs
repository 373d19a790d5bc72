use std::borrow::Cow;

#[kata_derive::kata_error]
pub enum SampleError {
    #[error("Parse failure{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Out of range{}: {value}", format_context(.context))]
    OutOfRange { value: i64, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_positive(raw: &str) -> Result<i64, SampleError> {
    let value = raw.parse::<i64>().context("reading value")?;
    if value < 0 {
        return Err(SampleError::OutOfRange { value, context: None });
    }
    Ok(value)
}

#[test]
fn kata_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/kata_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn inner() -> Result<i64, SampleError> {
        Ok("nope".parse::<i64>()?)
    }

    let err = inner().expect_err("parse should fail");
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
    assert!(err.to_string().starts_with("Parse failure: "));
}

#[test]
fn context_is_rendered_in_message() {
    let err = parse_positive("x").expect_err("parse should fail");
    assert!(matches!(&err, SampleError::Parse { context: Some(c), .. } if c == "reading value"));
    assert!(err.to_string().starts_with("Parse failure (reading value): "));
}

#[test]
fn context_can_be_added_to_own_errors() {
    let err = parse_positive("-3").context("validating input").expect_err("negative rejected");
    assert_eq!(err.to_string(), "Out of range (validating input): -3");
}

#[test]
fn internal_variant_accepts_strings() {
    let from_static: SampleError = "static failure".into();
    let from_owned: SampleError = String::from("owned failure").into();

    assert_eq!(from_static.to_string(), "Internal sample error: static failure");
    assert_eq!(from_owned.to_string(), "Internal sample error: owned failure");
}

#[test]
fn source_is_exposed_through_std_error() {
    use std::error::Error as _;

    let err = parse_positive("1.5").expect_err("float rejected");
    assert!(err.source().is_some());
}
