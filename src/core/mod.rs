// Core algorithm exports
pub mod age;
pub mod aggregator;
pub mod assembler;
pub mod fusion;
pub mod profiler;

pub use age::bin_age;
pub use aggregator::{aggregate_audience, top_region, format_region};
pub use assembler::{assemble_final_vector, AssemblyError};
pub use fusion::EnsembleFuser;
pub use profiler::InfluencerProfiler;
