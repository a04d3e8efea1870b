//! 元数据标签配置模块
//!
//! 提供元数据标签的配置管理功能，支持从YAML文件加载配置。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::epub::error::{ParseError, Result};

/// 共享的默认标签配置实例
static DEFAULT_TAG_CONFIGS: Lazy<MetadataTagConfigs> =
    Lazy::new(MetadataTagConfigs::default_config);

/// 获取共享的默认标签配置
pub fn defaults() -> &'static MetadataTagConfigs {
    &DEFAULT_TAG_CONFIGS
}

/// 单个元数据类型的标签配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataTagConfig {
    /// 标签列表
    pub tags: Vec<String>,
    /// 可选的描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetadataTagConfig {
    /// 创建新的标签配置
    pub fn new(tags: Vec<String>) -> Self {
        Self {
            tags,
            description: None,
        }
    }

    /// 创建带描述的标签配置
    pub fn with_description(tags: Vec<String>, description: String) -> Self {
        Self {
            tags,
            description: Some(description),
        }
    }
}

/// 元数据标签配置，定义每种元数据类型对应的可能标签
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataTagConfigs {
    /// 标题标签配置
    pub title: MetadataTagConfig,
    /// 创建者标签配置
    pub creator: MetadataTagConfig,
    /// 贡献者标签配置
    pub contributor: MetadataTagConfig,
    /// 语言标签配置
    pub language: MetadataTagConfig,
    /// 标识符标签配置
    pub identifier: MetadataTagConfig,
    /// 出版社标签配置
    pub publisher: MetadataTagConfig,
    /// 出版日期标签配置
    pub date: MetadataTagConfig,
    /// 描述标签配置
    pub description: MetadataTagConfig,
    /// 主题标签配置
    pub subject: MetadataTagConfig,
    /// 版权标签配置
    pub rights: MetadataTagConfig,
    /// 覆盖范围标签配置
    pub coverage: MetadataTagConfig,
    /// 出版格式标签配置
    pub format: MetadataTagConfig,
    /// 相关资源标签配置
    pub relation: MetadataTagConfig,
    /// 来源标签配置
    pub source: MetadataTagConfig,
    /// 出版物类型标签配置
    #[serde(rename = "type")]
    pub book_type: MetadataTagConfig,
    /// 封面标签配置
    pub cover: MetadataTagConfig,
}

impl MetadataTagConfigs {
    /// 从YAML配置文件中加载元数据标签配置
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 返回值
    ///
    /// * `Result<Self>` - 加载成功返回配置实例，失败返回错误
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use bindery::epub::opf::MetadataTagConfigs;
    /// let config = MetadataTagConfigs::from_file("metadata.yaml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ParseError::Config(format!("无法读取配置文件: {}", e)))?;

        serde_yml::from_str(&content)
            .map_err(|e| ParseError::Config(format!("配置文件格式错误: {}", e)))
    }

    /// 生成默认配置文件到指定路径
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件的写入路径
    ///
    /// # 返回值
    ///
    /// * `Result<()>` - 生成成功返回Ok，失败返回错误
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use bindery::epub::opf::MetadataTagConfigs;
    /// MetadataTagConfigs::generate_default_config("metadata.yaml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let default_config = Self::default_config();
        let yaml_content = serde_yml::to_string(&default_config)
            .map_err(|e| ParseError::Config(format!("序列化配置失败: {}", e)))?;

        // 在YAML内容前添加注释说明
        let content_with_header = format!(
            "# 元数据标签配置文件\n# 定义 EPUB 元数据解析时使用的标签映射\n# 每个配置项可以包含多个可能的标签名称\n\n{}",
            yaml_content
        );

        fs::write(path, content_with_header)
            .map_err(|e| ParseError::Config(format!("写入配置文件失败: {}", e)))?;

        Ok(())
    }

    /// 获取默认配置
    ///
    /// 每种元数据类型默认只映射到对应的Dublin Core标签名。
    ///
    /// # 返回值
    ///
    /// * `Self` - 默认配置实例
    pub fn default_config() -> Self {
        Self {
            title: MetadataTagConfig::with_description(
                vec!["title".to_string()],
                "书籍标题".to_string(),
            ),
            creator: MetadataTagConfig::with_description(
                vec!["creator".to_string()],
                "作者/创建者信息".to_string(),
            ),
            contributor: MetadataTagConfig::with_description(
                vec!["contributor".to_string()],
                "贡献者信息（编辑、插图等）".to_string(),
            ),
            language: MetadataTagConfig::with_description(
                vec!["language".to_string()],
                "书籍语言".to_string(),
            ),
            identifier: MetadataTagConfig::with_description(
                vec!["identifier".to_string()],
                "书籍标识符（ISBN、UUID等）".to_string(),
            ),
            publisher: MetadataTagConfig::with_description(
                vec!["publisher".to_string()],
                "出版社信息".to_string(),
            ),
            date: MetadataTagConfig::with_description(
                vec!["date".to_string()],
                "出版日期".to_string(),
            ),
            description: MetadataTagConfig::with_description(
                vec!["description".to_string()],
                "书籍描述/简介".to_string(),
            ),
            subject: MetadataTagConfig::with_description(
                vec!["subject".to_string()],
                "书籍主题/分类".to_string(),
            ),
            rights: MetadataTagConfig::with_description(
                vec!["rights".to_string()],
                "版权信息".to_string(),
            ),
            coverage: MetadataTagConfig::with_description(
                vec!["coverage".to_string()],
                "覆盖范围".to_string(),
            ),
            format: MetadataTagConfig::with_description(
                vec!["format".to_string()],
                "出版格式".to_string(),
            ),
            relation: MetadataTagConfig::with_description(
                vec!["relation".to_string()],
                "相关资源".to_string(),
            ),
            source: MetadataTagConfig::with_description(
                vec!["source".to_string()],
                "来源信息".to_string(),
            ),
            book_type: MetadataTagConfig::with_description(
                vec!["type".to_string()],
                "出版物类型".to_string(),
            ),
            cover: MetadataTagConfig::with_description(
                vec!["cover".to_string()],
                "封面图片信息".to_string(),
            ),
        }
    }
}

impl Default for MetadataTagConfigs {
    fn default() -> Self {
        Self::default_config()
    }
}
