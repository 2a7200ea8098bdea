//! 经典模式题库
//!
//! 五个难度关卡、每关十道题，全部为编译期常量。`ClassicCatalog::builtin()`
//! 把常量表转换成校验过的 `ClassicLevel` 列表，作为显式的值交给编排层。

mod levels;

use crate::error::ValidationError;
use crate::models::classic::{ClassicLevel, ClassicProblem};

/// 编译期题目模板
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProblemTemplate {
    pub premises: &'static [&'static str],
    pub conclusion: &'static str,
    pub expected_operations: u32,
    pub description: &'static str,
    pub solution: &'static str,
}

/// 编译期关卡模板
#[derive(Debug, Clone, Copy)]
pub(crate) struct LevelTemplate {
    pub level: u32,
    pub description: &'static str,
    pub problems: &'static [ProblemTemplate],
}

/// 全部经典关卡，编号与位置一致（从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicCatalog {
    levels: Vec<ClassicLevel>,
}

impl ClassicCatalog {
    /// 由关卡列表构造，要求第 i 个关卡的编号为 i + 1
    pub fn new(levels: Vec<ClassicLevel>) -> Result<Self, ValidationError> {
        for (position, level) in levels.iter().enumerate() {
            if level.level() as usize != position + 1 {
                return Err(ValidationError::LevelOutOfOrder {
                    position: position + 1,
                    level: level.level(),
                });
            }
        }
        Ok(Self { levels })
    }

    /// 内置的五关经典题库
    pub fn builtin() -> Result<Self, ValidationError> {
        let levels = levels::CLASSIC_LEVELS
            .iter()
            .map(build_level)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels)
    }

    pub fn levels(&self) -> &[ClassicLevel] {
        &self.levels
    }

    /// 所有关卡的题目总数
    pub fn problem_count(&self) -> usize {
        self.levels.iter().map(|l| l.problems().len()).sum()
    }
}

fn build_level(template: &LevelTemplate) -> Result<ClassicLevel, ValidationError> {
    let problems = template
        .problems
        .iter()
        .map(build_problem)
        .collect::<Result<Vec<_>, _>>()?;
    ClassicLevel::new(template.level, template.description, problems)
}

fn build_problem(template: &ProblemTemplate) -> Result<ClassicProblem, ValidationError> {
    ClassicProblem::new(
        template.premises.iter().map(|p| p.to_string()).collect(),
        template.conclusion,
        template.expected_operations,
        template.description,
        template.solution,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalog = ClassicCatalog::builtin().unwrap();

        assert_eq!(catalog.levels().len(), 5);
        assert_eq!(catalog.problem_count(), 50);
        for (i, level) in catalog.levels().iter().enumerate() {
            assert_eq!(level.level() as usize, i + 1);
            assert_eq!(level.problems().len(), 10);
            assert!(level.description().starts_with(&format!("Level {}:", i + 1)));
        }
    }

    #[test]
    fn test_level_one_first_and_last_problem() {
        let catalog = ClassicCatalog::builtin().unwrap();
        let level = &catalog.levels()[0];

        let first = &level.problems()[0];
        assert_eq!(first.premises(), ["P → Q", "P"]);
        assert_eq!(first.conclusion(), "Q");
        assert_eq!(first.description(), "Modus Ponens");

        let last = &level.problems()[9];
        assert_eq!(last.description(), "Disjunctive Syllogism (variant)");
        assert_eq!(last.conclusion(), "R");
    }

    #[test]
    fn test_level_one_json_round_trip_is_identical() {
        let catalog = ClassicCatalog::builtin().unwrap();
        let level = &catalog.levels()[0];

        let json = serde_json::to_string_pretty(level).unwrap();
        let reparsed: ClassicLevel = serde_json::from_str(&json).unwrap();

        assert_eq!(&reparsed, level);
        assert_eq!(serde_json::to_string_pretty(&reparsed).unwrap(), json);
    }

    #[test]
    fn test_catalog_rejects_out_of_order_levels() {
        let catalog = ClassicCatalog::builtin().unwrap();
        let mut levels = catalog.levels().to_vec();
        levels.swap(0, 1);

        assert_eq!(
            ClassicCatalog::new(levels).unwrap_err(),
            ValidationError::LevelOutOfOrder { position: 1, level: 2 }
        );
    }
}
