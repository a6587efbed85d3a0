pub mod clock_seeded;
pub mod fixed;
pub mod random;
pub mod strategy;
