pub mod logging;
pub mod selftest;
pub mod vectors;
