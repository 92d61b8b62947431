pub mod errors;
pub mod db;
pub mod account;

#[cfg(test)]
mod tests;
