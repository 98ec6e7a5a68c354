//! Product data fetching.
//!
//! - **Pipeline** (`pipeline`): named remote calls with a JSON input record
//! - **Variants** (`variants`): fetch-or-reuse cache for product variants
//!
//! # Error Handling
//!
//! Remote calls fail with [`PipelineError`]. The variant cache never hands
//! that error to its caller: failures are logged and turned into an error
//! entry in the store.
//!
//! # Example
//!
//! ```ignore
//! use pwa_product::VariantFetcher;
//!
//! let fetcher = VariantFetcher::new(store.clone(), client, TtlFreshness::default(), Handle::current());
//! if let FetchOutcome::Started(task) = fetcher.fetch_variants("P1") {
//!     task.await?;
//! }
//! ```

pub mod error;
pub mod pipeline;
pub mod variants;

pub use error::{PipelineError, Result};
pub use pipeline::{PipelineClient, PipelineRequest};
pub use variants::{
    FetchOutcome, GET_PRODUCT_VARIANTS, VariantCacheConfig, VariantFetcher,
};
