pub mod aggregate;
pub mod engine;
pub mod index;
pub mod landing;
pub mod llms_txt;
pub mod pipeline;

pub use crate::domain::model::{DiataxisTag, Grouping, ServiceSummary};
pub use crate::domain::ports::{CommandRunner, Fetcher, Pipeline};
pub use crate::utils::error::Result;
