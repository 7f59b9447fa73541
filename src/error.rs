use std::fmt::Display;
use std::path::PathBuf;

/// Every way a run can fail. All of them are terminal.
#[derive(Debug)]
pub enum IconError {
    /// Wrong number of command-line arguments
    Usage(String),
    /// The input path does not exist or is not a regular file
    NotFound(PathBuf),
    /// The input file could not be decoded as an image
    Decode(String),
    /// Anything that went wrong after decoding: conversion, resizing, directories, writing files
    Processing(String),
}

impl Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconError::Usage(usage) => f.write_str(usage),
            IconError::NotFound(path) => {
                write!(f, "icon file not found: {}", path.display())
            }
            IconError::Decode(msg) => write!(f, "unable to decode image: {msg}"),
            IconError::Processing(msg) => write!(f, "error processing icon: {msg}"),
        }
    }
}

impl std::error::Error for IconError {}

#[macro_export]
macro_rules! icon_err {
    ($msg:expr) => {
        $crate::error::IconError::Processing(format!(
            "{} @ {}:{}:{}",
            $msg,
            file!(),
            line!(),
            column!()
        ))
    };
    ($fmt:literal, $($arg:tt)+) => {
        $crate::icon_err!(format!($fmt, $($arg)+))
    };
}

#[macro_export]
macro_rules! icon_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::icon_err!(err));
            }
        }
    };
}
