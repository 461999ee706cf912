//! Data model - sheet configuration and overlay state

pub mod overlay;
pub mod sheet;
