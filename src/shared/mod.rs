pub mod cache;
pub mod constants;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod views;
