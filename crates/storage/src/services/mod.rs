pub mod feedback;
pub mod sampler;
pub mod scoring;
