//! Profile module - Owner and buyer user records
//!
//! Both records always exist in the application state; the platform the user
//! picked decides which one is active.

pub mod models;
pub mod persona;
pub mod seed;

// Re-export models
pub use models::{
    BuyerProfile, BuyerProfileUpdate, ChargingBehavior, CurrentVehicle, EvInterest, OwnerProfile,
    OwnerProfileUpdate, Persona, UsagePattern,
};
pub use seed::SeedProfiles;
