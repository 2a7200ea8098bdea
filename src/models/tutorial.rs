use serde::{Deserialize, Serialize};

/// 教程题目的默认难度
pub const DEFAULT_DIFFICULTY: &str = "Easy";

/// 单条推理规则的教程记录
///
/// 字段顺序即输出 JSON 的字段顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialRecord {
    /// 规则名称，取自第一个一级标题
    pub rule_name: String,
    /// 描述段落，多行以单个空格拼接
    pub description: String,
    /// 规则模式（最后一行生效）
    pub rule_pattern: String,
    /// 请求时使用的教程标识
    pub tutorial_key: String,
    pub problems: Vec<TutorialProblem>,
}

impl TutorialRecord {
    /// 创建只带教程标识的空记录
    pub fn empty(tutorial_key: impl Into<String>) -> Self {
        Self {
            rule_name: String::new(),
            description: String::new(),
            rule_pattern: String::new(),
            tutorial_key: tutorial_key.into(),
            problems: Vec::new(),
        }
    }
}

/// 教程中的一道练习题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialProblem {
    /// 题号，按文档顺序从 1 开始连续编号
    pub problem_number: u32,
    pub difficulty: String,
    pub premises: Vec<String>,
    pub conclusion: String,
    pub solution: String,
}

impl TutorialProblem {
    pub fn new(problem_number: u32, difficulty: impl Into<String>) -> Self {
        Self {
            problem_number,
            difficulty: difficulty.into(),
            premises: Vec::new(),
            conclusion: String::new(),
            solution: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_order() {
        let mut record = TutorialRecord::empty("addition");
        record.problems.push(TutorialProblem::new(1, DEFAULT_DIFFICULTY));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"rule_name":"","description":"","rule_pattern":"","tutorial_key":"addition","problems":[{"problem_number":1,"difficulty":"Easy","premises":[],"conclusion":"","solution":""}]}"#
        );
    }
}
