//! The selection samples.
//!
//! Every operation is shown twice: once through the declarative [`Query`]
//! (the `*Query` samples) and once through closures chained off the
//! collection with [`SelectExt`] (the `*Method` samples). Both forms of a
//! pair select the same product.

use clap::ValueEnum;
use log::{debug, info};
use selector::{Query, SelectError, SelectExt, Selectable};
use serde::{Serialize, Serializer};

use crate::product::{get_products, Product};

/// Product id looked up by the single samples.
pub const DEFAULT_PRODUCT_ID: i64 = 706;

/// One sample of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    FirstQuery,
    FirstMethod,
    FirstOrDefaultQuery,
    FirstOrDefaultMethod,
    FirstOrDefaultWithDefaultQuery,
    FirstOrDefaultWithDefaultMethod,
    LastQuery,
    LastMethod,
    LastOrDefaultQuery,
    LastOrDefaultMethod,
    SingleQuery,
    SingleMethod,
    SingleOrDefaultQuery,
    SingleOrDefaultMethod,
}

/// Syntactic form a sample is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    Query,
    Method,
}

/// What a sample produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SampleOutcome {
    /// A product was selected (possibly the fallback).
    Found { product: Product },
    /// Nothing matched and no fallback was given.
    Empty,
    /// The selection failed.
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: SelectError,
    },
}

impl SampleOutcome {
    fn from_required(result: selector::Result<&Product>) -> Self {
        match result {
            Ok(product) => SampleOutcome::Found {
                product: product.clone(),
            },
            Err(error) => SampleOutcome::Failed { error },
        }
    }

    fn from_optional(found: Option<&Product>) -> Self {
        match found {
            Some(product) => SampleOutcome::Found {
                product: product.clone(),
            },
            None => SampleOutcome::Empty,
        }
    }

    /// The selected product, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            SampleOutcome::Found { product } => Some(product),
            _ => None,
        }
    }
}

fn serialize_display<S: Serializer>(error: &SelectError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// The result of running one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    pub sample: &'static str,
    pub operation: &'static str,
    pub form: Form,
    #[serde(flatten)]
    pub outcome: SampleOutcome,
}

/// Knobs for the samples that take an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSettings {
    /// Id searched for by [`Sample::SingleOrDefaultMethod`].
    pub product_id: i64,
}

impl Default for SampleSettings {
    fn default() -> Self {
        SampleSettings {
            product_id: DEFAULT_PRODUCT_ID,
        }
    }
}

impl Sample {
    /// All samples in presentation order.
    pub fn all() -> &'static [Sample] {
        Sample::value_variants()
    }

    /// Kebab-case name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Sample::FirstQuery => "first-query",
            Sample::FirstMethod => "first-method",
            Sample::FirstOrDefaultQuery => "first-or-default-query",
            Sample::FirstOrDefaultMethod => "first-or-default-method",
            Sample::FirstOrDefaultWithDefaultQuery => "first-or-default-with-default-query",
            Sample::FirstOrDefaultWithDefaultMethod => "first-or-default-with-default-method",
            Sample::LastQuery => "last-query",
            Sample::LastMethod => "last-method",
            Sample::LastOrDefaultQuery => "last-or-default-query",
            Sample::LastOrDefaultMethod => "last-or-default-method",
            Sample::SingleQuery => "single-query",
            Sample::SingleMethod => "single-method",
            Sample::SingleOrDefaultQuery => "single-or-default-query",
            Sample::SingleOrDefaultMethod => "single-or-default-method",
        }
    }

    /// Name of the selection operation the sample demonstrates.
    pub fn operation(self) -> &'static str {
        match self {
            Sample::FirstQuery | Sample::FirstMethod => "first",
            Sample::FirstOrDefaultQuery
            | Sample::FirstOrDefaultMethod
            | Sample::FirstOrDefaultWithDefaultQuery
            | Sample::FirstOrDefaultWithDefaultMethod => "first_or_default",
            Sample::LastQuery | Sample::LastMethod => "last",
            Sample::LastOrDefaultQuery | Sample::LastOrDefaultMethod => "last_or_default",
            Sample::SingleQuery | Sample::SingleMethod => "single",
            Sample::SingleOrDefaultQuery | Sample::SingleOrDefaultMethod => "single_or_default",
        }
    }

    pub fn form(self) -> Form {
        match self {
            Sample::FirstQuery
            | Sample::FirstOrDefaultQuery
            | Sample::FirstOrDefaultWithDefaultQuery
            | Sample::LastQuery
            | Sample::LastOrDefaultQuery
            | Sample::SingleQuery
            | Sample::SingleOrDefaultQuery => Form::Query,
            _ => Form::Method,
        }
    }

    /// Runs the sample against `products`.
    pub fn run(self, products: &[Product], settings: &SampleSettings) -> SampleOutcome {
        let red = || Query::new().and_eq(Product::COLOR, "Red");
        let is_red = |p: &&Product| p.color.as_deref() == Some("Red");

        match self {
            Sample::FirstQuery => {
                SampleOutcome::from_required(red().first(products, Product::accessor))
            }
            Sample::FirstMethod => {
                SampleOutcome::from_required(products.iter().select_first(is_red))
            }

            Sample::FirstOrDefaultQuery => SampleOutcome::from_optional(
                red().first_or_default(products, Product::accessor, None),
            ),
            Sample::FirstOrDefaultMethod => {
                SampleOutcome::from_optional(products.iter().select_first_or_default(is_red, None))
            }

            Sample::FirstOrDefaultWithDefaultQuery => {
                let fallback = Product::placeholder(-1, "PRODUCT NOT FOUND");
                SampleOutcome::from_optional(red().first_or_default(
                    products,
                    Product::accessor,
                    Some(&fallback),
                ))
            }
            Sample::FirstOrDefaultWithDefaultMethod => {
                let fallback = Product::placeholder(-1, "NOT FOUND");
                SampleOutcome::from_optional(
                    products
                        .iter()
                        .select_first_or_default(is_red, Some(&fallback)),
                )
            }

            Sample::LastQuery => {
                SampleOutcome::from_required(red().last(products, Product::accessor))
            }
            Sample::LastMethod => SampleOutcome::from_required(products.iter().select_last(is_red)),

            Sample::LastOrDefaultQuery => SampleOutcome::from_optional(
                red().last_or_default(products, Product::accessor, None),
            ),
            Sample::LastOrDefaultMethod => SampleOutcome::from_optional(
                products
                    .iter()
                    .select_last_or_default(|p| p.color.as_deref() == Some("Brown"), None),
            ),

            Sample::SingleQuery => SampleOutcome::from_required(
                Query::new()
                    .and_eq(Product::ID, DEFAULT_PRODUCT_ID)
                    .single(products, Product::accessor),
            ),
            Sample::SingleMethod => SampleOutcome::from_required(
                products
                    .iter()
                    .select_single(|p| p.id == DEFAULT_PRODUCT_ID),
            ),

            Sample::SingleOrDefaultQuery => {
                let found = Query::new()
                    .and_eq(Product::ID, DEFAULT_PRODUCT_ID)
                    .single_or_default(products, Product::accessor, None);
                match found {
                    Ok(found) => SampleOutcome::from_optional(found),
                    Err(error) => SampleOutcome::Failed { error },
                }
            }
            Sample::SingleOrDefaultMethod => {
                let found = products
                    .iter()
                    .select_single_or_default(|p| p.id == settings.product_id, None);
                match found {
                    Ok(found) => SampleOutcome::from_optional(found),
                    Err(error) => SampleOutcome::Failed { error },
                }
            }
        }
    }

    /// Runs the sample against a fresh copy of the catalog.
    pub fn report(self, settings: &SampleSettings) -> SampleReport {
        let products = get_products();
        debug!(
            "running {} over {} products",
            self.as_str(),
            products.len()
        );

        let outcome = self.run(&products, settings);
        match &outcome {
            SampleOutcome::Found { product } => {
                debug!("{} selected product {}", self.as_str(), product.id)
            }
            SampleOutcome::Empty => debug!("{} selected nothing", self.as_str()),
            SampleOutcome::Failed { error } => info!("{} failed: {}", self.as_str(), error),
        }

        SampleReport {
            sample: self.as_str(),
            operation: self.operation(),
            form: self.form(),
            outcome,
        }
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs `samples` in order, each over its own copy of the catalog.
pub fn run_samples(samples: &[Sample], settings: &SampleSettings) -> Vec<SampleReport> {
    samples.iter().map(|sample| sample.report(settings)).collect()
}
