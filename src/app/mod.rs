// Application layer: the presentation collaborator around the core estimator.

pub mod pipelines;
pub mod render;
