use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::error::{AppResult, ConfigError};

/// 默认的教程标识列表（按处理顺序）
pub const DEFAULT_TUTORIAL_KEYS: [&str; 18] = [
    "modus-ponens",
    "modus-tollens",
    "hypothetical-syllogism",
    "disjunctive-syllogism",
    "simplification",
    "conjunction",
    "addition",
    "de-morgans-and",
    "de-morgans-or",
    "double-negation",
    "resolution",
    "biconditional",
    "distributivity",
    "commutativity",
    "associativity",
    "idempotent",
    "absorption",
    "negation-laws",
];

/// 指向 TOML 配置文件的环境变量
pub const CONFIG_FILE_ENV: &str = "EXTRACT_CONFIG";

/// 教程标识格式：小写 kebab-case，不能包含路径分隔符
const KEY_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 教程 Markdown 源文件目录
    pub docs_dir: PathBuf,
    /// 教程 JSON 输出目录
    pub tutorial_output_dir: PathBuf,
    /// 经典关卡 JSON 输出目录
    pub classic_output_dir: PathBuf,
    /// 缺失源文件的警告记录
    pub warn_file: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 需要提取的教程标识，按顺序处理
    pub tutorial_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs/game"),
            tutorial_output_dir: PathBuf::from("data/tutorial"),
            classic_output_dir: PathBuf::from("data/classic"),
            warn_file: PathBuf::from("extract_warn.txt"),
            verbose_logging: false,
            tutorial_keys: DEFAULT_TUTORIAL_KEYS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Config {
    /// 加载配置：设置了 `EXTRACT_CONFIG` 时读取该 TOML 文件，否则读取环境变量
    pub fn load() -> AppResult<Self> {
        let config = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_toml_file(Path::new(path.trim()))?,
            _ => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// 按变量名查询配置值，未设置或无法解析时使用默认值
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            docs_dir: var("DOCS_DIR").map(PathBuf::from).unwrap_or(default.docs_dir),
            tutorial_output_dir: var("TUTORIAL_OUTPUT_DIR").map(PathBuf::from).unwrap_or(default.tutorial_output_dir),
            classic_output_dir: var("CLASSIC_OUTPUT_DIR").map(PathBuf::from).unwrap_or(default.classic_output_dir),
            warn_file: var("WARN_FILE").map(PathBuf::from).unwrap_or(default.warn_file),
            verbose_logging: var("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            tutorial_keys: var("TUTORIAL_KEYS").map(|v| split_keys(&v)).unwrap_or(default.tutorial_keys),
        }
    }

    /// 从 TOML 文件加载配置，未出现的字段取默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_toml_str(&content, path)?)
    }

    fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 校验教程标识：格式合法且不重复
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pattern = Regex::new(KEY_PATTERN)?;
        let mut seen = HashSet::new();
        for key in &self.tutorial_keys {
            if !pattern.is_match(key) {
                return Err(ConfigError::InvalidTutorialKey { key: key.clone() });
            }
            if !seen.insert(key.as_str()) {
                return Err(ConfigError::DuplicateTutorialKey { key: key.clone() });
            }
        }
        Ok(())
    }
}

fn split_keys(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_keys_in_order() {
        let config = Config::default();
        assert_eq!(config.tutorial_keys.len(), 18);
        assert_eq!(config.tutorial_keys[0], "modus-ponens");
        assert_eq!(config.tutorial_keys[17], "negation-laws");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_vars_overrides_and_fallbacks() {
        let config = Config::from_vars(vars(&[
            ("DOCS_DIR", "corpus/md"),
            ("VERBOSE_LOGGING", "not-a-bool"),
            ("TUTORIAL_KEYS", " addition , ,resolution "),
        ]));

        assert_eq!(config.docs_dir, PathBuf::from("corpus/md"));
        assert!(!config.verbose_logging);
        assert_eq!(config.tutorial_keys, vec!["addition", "resolution"]);
        assert_eq!(config.classic_output_dir, PathBuf::from("data/classic"));
    }

    #[test]
    fn test_toml_partial_config() {
        let config = Config::from_toml_str(
            r#"
            docs_dir = "md"
            tutorial_keys = ["modus-ponens", "absorption"]
            "#,
            Path::new("extract.toml"),
        )
        .unwrap();

        assert_eq!(config.docs_dir, PathBuf::from("md"));
        assert_eq!(config.tutorial_keys, vec!["modus-ponens", "absorption"]);
        assert_eq!(config.warn_file, PathBuf::from("extract_warn.txt"));
    }

    #[test]
    fn test_toml_parse_error() {
        let err = Config::from_toml_str("docs_dir = [", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseFailed { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_keys() {
        let mut config = Config::default();
        config.tutorial_keys = vec!["../secrets".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTutorialKey { .. })
        ));

        config.tutorial_keys = vec!["addition".to_string(), "addition".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTutorialKey { .. })
        ));

        config.tutorial_keys = Vec::new();
        assert!(config.validate().is_ok());
    }
}
