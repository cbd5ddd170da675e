//! Score → diagnose → recommend.
//!
//! Each stage is a pure function of the previous stages' outputs, so the
//! pipeline can run concurrently for independent requests without any
//! coordination.

use crate::config::AnalysisConfig;
use crate::diagnosis::diagnose;
use crate::models::{LeadAnalysis, LeadInput};
use crate::recommendations::recommend;
use crate::scoring::score;

/// Runs the full qualification pipeline for one lead.
pub fn analyze(lead: &LeadInput, config: &AnalysisConfig) -> LeadAnalysis {
    let scoring = score(lead);
    let diagnosis = diagnose(lead, &scoring, config);
    let recommendations = recommend(lead, &scoring, &diagnosis, config);

    LeadAnalysis {
        scoring,
        diagnosis,
        recommendations,
    }
}
