pub mod classic;
pub mod loaders;
pub mod tutorial;

pub use classic::{ClassicLevel, ClassicProblem};
pub use loaders::{load_tutorial_source, source_path};
pub use tutorial::{TutorialProblem, TutorialRecord, DEFAULT_DIFFICULTY};
