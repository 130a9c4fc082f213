// Interval seeding and seeded opportunity generation
pub mod countdown;
pub mod interval_seed;
pub mod opportunity_generator;
pub mod random;
