// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod collection;
pub mod place;

pub use collection::*;
pub use place::*;
