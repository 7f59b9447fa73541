pub mod filename;
#[cfg(test)]
pub mod arbitrary;
