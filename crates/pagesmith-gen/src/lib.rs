//! LLM-backed generation pipeline for landing-page assets: schema-driven
//! data generation, component selection, and React-to-TypeScript
//! conversion, with tolerant extraction of model output.
//!
//! The heavy lifting happens at the provider boundary (`engine`); the local
//! code assembles prompts, recovers structured data from free-form
//! responses (`extract`), and normalizes the result (`postprocess`).

pub mod component;
pub mod convert;
pub mod engine;
pub mod error;
pub mod extract;
pub mod generate;
pub mod landing;
pub mod postprocess;
mod prompt;

pub use component::{ComponentProcessor, ProcessedComponent};
pub use convert::{ConvertedComponent, TsConverter};
pub use engine::Completion;
pub use error::CompletionError;
pub use generate::DataGenerator;
pub use landing::TagFinder;
