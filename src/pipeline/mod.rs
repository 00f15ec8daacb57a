//! Column-by-column profiling pipeline.

pub mod profiler;

pub use profiler::TableProfiler;
