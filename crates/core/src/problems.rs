pub mod minimization;

pub use minimization::MinimizationProblem;
