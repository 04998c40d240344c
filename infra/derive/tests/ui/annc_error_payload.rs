use annc_derive::annc_error;
use std::borrow::Cow;

#[annc_error]
#[derive(Debug)]
pub enum PayloadError {
    #[error("Parse error at line {line}{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, line: usize, context: Option<Cow<'static, str>> },

    #[error("Rejected{}", format_context(.context))]
    Rejected { context: Option<Cow<'static, str>> },
}

fn main() {
    let source = "x".parse::<u8>().unwrap_err();
    let err = PayloadError::Parse { source, line: 3, context: None };
    let _ = err.to_string();
}
