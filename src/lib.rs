//! Sherlock Lead Qualification API Library
//!
//! Scores prospective customers, diagnoses their fit and turns the result
//! into task lists for the content, paid-media and follow-up teams.
//!
//! # Modules
//!
//! - `api`: HTTP-facing namespace (handlers, router).
//! - `core`: Pure qualification pipeline and its models.
//! - `agents`: Content agent trait and capability registry.
//! - `config`: Configuration management.
//! - `diagnosis`: Strengths, weaknesses, digital profile and pain points.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request, pipeline and response models.
//! - `pipeline`: Runs scoring, diagnosis and recommendations in order.
//! - `recommendations`: Per-team task lists and next steps.
//! - `scoring`: Sub-scores, total and tier.
//! - `server`: Router assembly and middleware.

pub mod api;
pub mod core;

pub mod agents;
pub mod config;
pub mod diagnosis;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod recommendations;
pub mod scoring;
pub mod server;
