pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fortune;
pub mod matching;
pub mod service;

pub use catalog::{FortuneCategory, FortuneMessage, Gender, NameCatalog, NameEntry};
pub use core::normalize::{normalize_name, normalize_romanization};
pub use core::romanizer::romanize_korean_text;
pub use error::{NaeilumError, Result};
pub use fortune::{daily_fortune, FortuneResult};
pub use matching::{compute_similarity_score, select_korean_names};
pub use service::NaeilumService;
