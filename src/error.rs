use thiserror::Error;

/// A listing item whose markup did not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("item #{index} has no title element matching `{selector}`")]
    MissingName { index: usize, selector: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("{month}月{day}日 is not a valid date in {year}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
