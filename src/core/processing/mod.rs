pub mod chroma_key;
pub mod crop;
pub mod flatten;
pub mod pipeline;
pub mod resize;
pub mod save;
