//! Application layer: the cursor confinement use case.

pub mod confinement;
