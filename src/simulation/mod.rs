//! Hand-off to the external combat simulation service.

pub mod client;
pub mod export_csv;
pub mod request;
pub mod response;

pub use client::{SimulationClient, SimulationError, DEFAULT_TIMEOUT, RUN_PATH};
pub use export_csv::{export_damage_csv, write_damage_csv};
pub use request::{ItemRef, SimulatedUnit, SimulationRequest};
pub use response::{ArchivedEvent, DamageStats, SimulationResponse, SimulationRun, UnitResult};
