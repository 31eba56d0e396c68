pub mod drop_evaluator;

pub use drop_evaluator::DropEvaluator;
