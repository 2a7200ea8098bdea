//! 教程解析服务 - 业务能力层
//!
//! 把一篇教程 Markdown 转成 `TutorialRecord`。纯函数：不做 I/O，不会失败，
//! 缺失的段落只会让对应字段保持默认值。
//!
//! 扫描状态是一个显式的 `ScanState` 值，逐行 `fold`：
//!
//! ```text
//! # <规则名>               → rule_name（只取第一次）
//! ## Description           → 描述段，非空行以空格拼接
//! ## Rule Pattern          → 模式段，最后一行生效
//! ## Problems              → 题目段
//! ### Problem N (Level: X) → 结束上一题，开始新题
//! **Premises:**            → 只收集 "- " 开头的行
//! **Conclusion:**          → 最后一个非空行生效
//! **Brief Solution:**      → 最后一个非空行生效
//! ```

use crate::models::tutorial::{TutorialProblem, TutorialRecord, DEFAULT_DIFFICULTY};

const TITLE_MARKER: &str = "# ";
const DESCRIPTION_HEADING: &str = "## Description";
const PATTERN_HEADING: &str = "## Rule Pattern";
const PROBLEMS_HEADING: &str = "## Problems";
const PROBLEM_HEADING: &str = "### Problem";
const PREMISES_MARKER: &str = "**Premises:**";
const CONCLUSION_MARKER: &str = "**Conclusion:**";
const SOLUTION_MARKER: &str = "**Brief Solution:**";
const BULLET: &str = "- ";
const SEPARATOR: &str = "---";

/// 当前所在的一级段落
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    None,
    Description,
    Pattern,
    Problems,
}

/// 当前题目中正在填充的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Field {
    #[default]
    None,
    Premises,
    Conclusion,
    Solution,
}

/// 单次前向扫描的完整状态
#[derive(Debug, Clone)]
struct ScanState {
    record: TutorialRecord,
    section: Section,
    field: Field,
    current: Option<TutorialProblem>,
    problem_count: u32,
}

impl ScanState {
    fn new(tutorial_key: &str) -> Self {
        Self {
            record: TutorialRecord::empty(tutorial_key),
            section: Section::None,
            field: Field::None,
            current: None,
            problem_count: 0,
        }
    }

    /// 处理一行，按顺序匹配规则，第一个命中的规则生效
    fn step(mut self, line: &str) -> Self {
        let line = line.trim();

        if self.record.rule_name.is_empty() {
            if let Some(title) = line.strip_prefix(TITLE_MARKER) {
                self.record.rule_name = title.trim().to_string();
                return self;
            }
        }

        if let Some(section) = section_heading(line) {
            self.section = section;
            return self;
        }

        if line.starts_with(PROBLEM_HEADING) {
            return self.start_problem(line);
        }

        let section = self.section;
        match section {
            Section::Problems if self.current.is_some() => self.problem_line(line),
            Section::Description => {
                if !line.is_empty() && !line.starts_with('#') {
                    if !self.record.description.is_empty() {
                        self.record.description.push(' ');
                    }
                    self.record.description.push_str(line);
                }
                self
            }
            Section::Pattern => {
                if !line.is_empty() && !line.starts_with('#') {
                    self.record.rule_pattern = line.to_string();
                }
                self
            }
            _ => self,
        }
    }

    fn start_problem(mut self, heading: &str) -> Self {
        self.flush();
        self.problem_count += 1;
        self.current = Some(TutorialProblem::new(
            self.problem_count,
            parse_difficulty(heading),
        ));
        self.field = Field::None;
        self
    }

    fn problem_line(mut self, line: &str) -> Self {
        if let Some(field) = field_marker(line) {
            self.field = field;
            return self;
        }
        if line.is_empty() || line == SEPARATOR {
            self.field = Field::None;
            return self;
        }

        let field = self.field;
        if let Some(problem) = self.current.as_mut() {
            match field {
                Field::Premises => {
                    if let Some(premise) = line.strip_prefix(BULLET) {
                        problem.premises.push(premise.trim().to_string());
                    }
                }
                // 结论和解答只保留最后一行，与前提的追加行为不同
                Field::Conclusion if !line.starts_with("**") => problem.conclusion = line.to_string(),
                Field::Solution if !line.starts_with("**") => problem.solution = line.to_string(),
                _ => {}
            }
        }
        self
    }

    fn flush(&mut self) {
        if let Some(problem) = self.current.take() {
            self.record.problems.push(problem);
        }
    }

    fn finish(mut self) -> TutorialRecord {
        self.flush();
        self.record
    }
}

fn section_heading(line: &str) -> Option<Section> {
    if line.starts_with(DESCRIPTION_HEADING) {
        Some(Section::Description)
    } else if line.starts_with(PATTERN_HEADING) {
        Some(Section::Pattern)
    } else if line.starts_with(PROBLEMS_HEADING) {
        Some(Section::Problems)
    } else {
        None
    }
}

fn field_marker(line: &str) -> Option<Field> {
    if line.starts_with(PREMISES_MARKER) {
        Some(Field::Premises)
    } else if line.starts_with(CONCLUSION_MARKER) {
        Some(Field::Conclusion)
    } else if line.starts_with(SOLUTION_MARKER) {
        Some(Field::Solution)
    } else {
        None
    }
}

/// 从题目标题中解析难度
///
/// `### Problem 1 (Difficulty: Hard)` → `Hard`；没有括号、括号未闭合或括号内
/// 没有冒号时返回默认难度。冒号后只取到下一个冒号为止。
fn parse_difficulty(heading: &str) -> String {
    let label = heading.find('(').and_then(|start| {
        let inner = &heading[start + 1..];
        inner.find(')').map(|end| &inner[..end])
    });

    label
        .and_then(|label| label.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string())
}

/// 解析一篇教程文档
///
/// # 参数
/// - `text`: Markdown 原文
/// - `tutorial_key`: 教程标识，原样写入记录
pub fn parse_tutorial(text: &str, tutorial_key: &str) -> TutorialRecord {
    text.lines()
        .fold(ScanState::new(tutorial_key), ScanState::step)
        .finish()
}
