//! Worked examples of the `selector` operations over a product catalog.
//!
//! The catalog comes from [`product::get_products`]; each [`samples::Sample`]
//! selects one product from a fresh copy of it, in either the declarative
//! query form or the chained method form.

pub mod output;
pub mod product;
pub mod samples;

pub use output::{render, OutputError, OutputMode};
pub use product::{get_products, Product};
pub use samples::{run_samples, Form, Sample, SampleOutcome, SampleReport, SampleSettings};
