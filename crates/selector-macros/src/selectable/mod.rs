//! `#[derive(Selectable)]`: field accessors for the selector query form.

mod attrs;
mod derive;

pub use derive::selectable_derive_impl;
