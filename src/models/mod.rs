pub mod goal;
pub mod phase;
pub mod task;

pub use goal::{Goal, GoalCategory, GoalDefinition, GoalIcon};
pub use phase::{Phase, ScheduleDay};
pub use task::{DetailedStep, Task, TaskIcon, TaskOverride, TaskType};
