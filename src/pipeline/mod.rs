use thiserror::Error;

use crate::input::InputError;
use crate::report::ReportError;

pub mod stage1_catalog;
pub mod stage2_snapshot;
pub mod stage3_candidates;
pub mod stage4_report;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
