pub mod tutorial_flow;

pub use tutorial_flow::{ProcessResult, TutorialFlow};
