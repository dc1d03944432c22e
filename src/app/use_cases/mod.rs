//! Use-Cases der Application-Layer-Orchestrierung.

pub mod distances;
pub mod locate;
pub mod options;
