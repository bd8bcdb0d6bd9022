mod common;

mod correlation;
mod evaluators;
