#![doc = include_str!("../README.md")]

pub mod association;
pub mod combinations;
pub mod experiment;
pub mod output;
pub mod scenario;
pub mod scheduler;
pub mod schedulers;

#[cfg(test)]
mod tests;
