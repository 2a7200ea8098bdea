//! 经典模式数据结构
//!
//! 经典题目只能通过校验构造：前提非空、结论非空、预期操作数为正。
//! 反序列化同样走校验，所以读回的 JSON 也满足这些约束。

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 一个难度关卡
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClassicLevel")]
pub struct ClassicLevel {
    level: u32,
    description: String,
    problems: Vec<ClassicProblem>,
}

impl ClassicLevel {
    pub fn new(
        level: u32,
        description: impl Into<String>,
        problems: Vec<ClassicProblem>,
    ) -> Result<Self, ValidationError> {
        if level == 0 {
            return Err(ValidationError::ZeroLevel);
        }
        if problems.is_empty() {
            return Err(ValidationError::EmptyLevel { level });
        }
        Ok(Self {
            level,
            description: description.into(),
            problems,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn problems(&self) -> &[ClassicProblem] {
        &self.problems
    }
}

/// 一道经典题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClassicProblem")]
pub struct ClassicProblem {
    premises: Vec<String>,
    conclusion: String,
    expected_operations: u32,
    description: String,
    solution: String,
}

impl ClassicProblem {
    pub fn new(
        premises: Vec<String>,
        conclusion: impl Into<String>,
        expected_operations: u32,
        description: impl Into<String>,
        solution: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let conclusion = conclusion.into();
        if premises.is_empty() {
            return Err(ValidationError::EmptyPremises);
        }
        if conclusion.is_empty() {
            return Err(ValidationError::EmptyConclusion);
        }
        if expected_operations == 0 {
            return Err(ValidationError::ZeroExpectedOperations);
        }
        Ok(Self {
            premises,
            conclusion,
            expected_operations,
            description: description.into(),
            solution: solution.into(),
        })
    }

    pub fn premises(&self) -> &[String] {
        &self.premises
    }

    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }

    pub fn expected_operations(&self) -> u32 {
        self.expected_operations
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }
}

// 反序列化中间结构，字段与输出 JSON 一一对应

#[derive(Deserialize)]
struct RawClassicLevel {
    level: u32,
    description: String,
    problems: Vec<ClassicProblem>,
}

impl TryFrom<RawClassicLevel> for ClassicLevel {
    type Error = ValidationError;

    fn try_from(raw: RawClassicLevel) -> Result<Self, Self::Error> {
        ClassicLevel::new(raw.level, raw.description, raw.problems)
    }
}

#[derive(Deserialize)]
struct RawClassicProblem {
    premises: Vec<String>,
    conclusion: String,
    expected_operations: u32,
    description: String,
    solution: String,
}

impl TryFrom<RawClassicProblem> for ClassicProblem {
    type Error = ValidationError;

    fn try_from(raw: RawClassicProblem) -> Result<Self, Self::Error> {
        ClassicProblem::new(
            raw.premises,
            raw.conclusion,
            raw.expected_operations,
            raw.description,
            raw.solution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premises(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_problem_rejects_empty_fields() {
        assert_eq!(
            ClassicProblem::new(Vec::new(), "Q", 1, "", "").unwrap_err(),
            ValidationError::EmptyPremises
        );
        assert_eq!(
            ClassicProblem::new(premises(&["P"]), "", 1, "", "").unwrap_err(),
            ValidationError::EmptyConclusion
        );
        assert_eq!(
            ClassicProblem::new(premises(&["P"]), "P", 0, "", "").unwrap_err(),
            ValidationError::ZeroExpectedOperations
        );
    }

    #[test]
    fn test_level_rejects_zero_and_empty() {
        assert_eq!(
            ClassicLevel::new(0, "", Vec::new()).unwrap_err(),
            ValidationError::ZeroLevel
        );
        assert_eq!(
            ClassicLevel::new(2, "", Vec::new()).unwrap_err(),
            ValidationError::EmptyLevel { level: 2 }
        );
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let json = r#"{"premises":[],"conclusion":"Q","expected_operations":1,"description":"","solution":""}"#;
        let err = serde_json::from_str::<ClassicProblem>(json).unwrap_err();
        assert!(err.to_string().contains("前提列表不能为空"));

        let json = r#"{"premises":["P ∧ Q"],"conclusion":"P","expected_operations":1,"description":"Simplification","solution":"Drop Q."}"#;
        let problem: ClassicProblem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.premises(), ["P ∧ Q"]);
        assert_eq!(problem.conclusion(), "P");
    }

    #[test]
    fn test_serialized_field_order() {
        let problem = ClassicProblem::new(premises(&["P"]), "P", 1, "d", "s").unwrap();
        let level = ClassicLevel::new(1, "Level 1", vec![problem]).unwrap();
        assert_eq!(
            serde_json::to_string(&level).unwrap(),
            r#"{"level":1,"description":"Level 1","problems":[{"premises":["P"],"conclusion":"P","expected_operations":1,"description":"d","solution":"s"}]}"#
        );
    }
}
