//! Session data provider implementations

pub mod fixture;

pub use fixture::FixtureProvider;
