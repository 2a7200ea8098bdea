use thiserror::Error;

/// 应用程序错误类型
///
/// 只有输出端失败（无法创建目录、无法写入文件）和配置错误是致命的；
/// 缺失的教程源文件不走这里，由编排层记录警告后跳过。
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 数据校验错误
    #[error("数据校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败（文件存在但无法读取）
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 创建输出目录失败
    #[error("创建目录失败 ({path}): {source}")]
    DirectoryCreateFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 教程标识不合法
    #[error("教程标识不合法: '{key}' (只允许小写字母、数字和单个连字符)")]
    InvalidTutorialKey { key: String },
    /// 教程标识重复
    #[error("教程标识重复: '{key}'")]
    DuplicateTutorialKey { key: String },
    /// 标识格式表达式无效
    #[error("标识格式表达式无效: {0}")]
    Pattern(#[from] regex::Error),
}

/// 数据校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 前提列表为空
    #[error("经典题目的前提列表不能为空")]
    EmptyPremises,
    /// 结论为空
    #[error("经典题目的结论不能为空")]
    EmptyConclusion,
    /// 预期步数必须为正
    #[error("经典题目的预期操作数必须大于 0")]
    ZeroExpectedOperations,
    /// 关卡编号必须为正
    #[error("关卡编号必须大于 0")]
    ZeroLevel,
    /// 关卡没有题目
    #[error("关卡 {level} 没有任何题目")]
    EmptyLevel { level: u32 },
    /// 关卡编号与位置不符
    #[error("关卡编号不连续: 第 {position} 个关卡的编号是 {level}")]
    LevelOutOfOrder { position: usize, level: u32 },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建目录创建错误
    pub fn dir_create_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::DirectoryCreateFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
