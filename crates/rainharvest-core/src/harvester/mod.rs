/// Roof harvesting and storage tank model.
///
/// Converts daily rainfall to collected volume and runs a single-store tank
/// with constant daily demand to size the storage capacity.
pub mod fluxes;
pub mod params;
pub mod processes;
pub mod run;
pub mod state;
