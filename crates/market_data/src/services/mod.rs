pub mod batch_scheduler;

pub use batch_scheduler::BatchScheduler;
