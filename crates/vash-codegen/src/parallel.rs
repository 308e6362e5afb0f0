//! Generating several templates at once.
//!
//! Passes share no state, so each job runs on the rayon pool with its own tree
//! and options. Node visits go to `tracing` through [`TracingSink`].

use rayon::prelude::*;

use crate::error::CodegenError;
use crate::node::Node;
use crate::options::CodegenOptions;
use crate::trace::TracingSink;

/// One template to generate.
#[derive(Debug, Clone, Copy)]
pub struct GenerateJob<'a> {
    pub root: &'a Node,
    pub options: &'a CodegenOptions,
}

/// Generate every job in parallel. Results are returned in job order; a
/// failing job does not stop the others.
pub fn generate_parallel(jobs: &[GenerateJob<'_>]) -> Vec<Result<String, CodegenError>> {
    jobs.par_iter()
        .map(|job| crate::generate_with_trace(job.root, job.options, &mut TracingSink))
        .collect()
}
