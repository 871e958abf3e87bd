//! Theme state models.
//!
//! DESIGN
//! ======
//! Pure values and decisions only; effects live in `controller`.

pub mod theme;
