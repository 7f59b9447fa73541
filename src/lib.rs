//! `iconsizer` is not a library.
//! This interface is unstable and subject to change at any time.
//! It exists so that the binaries and the integration tests can share code.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod config;
pub mod debug_icons;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod init;
pub mod operations;
pub mod plan;
mod utils;
