//! Document composition: template views and inline icon assets.

pub mod icons;
pub mod views;
