pub mod epub;

// === 核心API重新导出 ===

/// EPUB解析器（主要接口）
pub use epub::EpubParser;

/// 解析完成的文档模型
pub use epub::Document;

/// 解析生命周期观察者
pub use epub::ParseObserver;

/// 错误处理
pub use epub::{ParseError, Result};

// === 数据结构 ===

/// 元数据
pub use epub::{Creator, Metadata};

/// 文件清单
pub use epub::{Manifest, ManifestItem, MediaType};

/// 脊柱（阅读顺序）
pub use epub::{PageProgressionDirection, Spine, SpineItem};

/// 目录树
pub use epub::TableOfContents;

// === 底层组件（高级用法） ===

/// 压缩包组件
pub use epub::EpubArchive;

/// 容器组件
pub use epub::{Container, RootFile};

/// XML树组件
pub use epub::{XmlDocument, XmlElement};

/// 元数据标签配置
pub use epub::{MetadataTagConfig, MetadataTagConfigs};

// === 库信息 ===

/// Bindery库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bindery库的描述
pub const DESCRIPTION: &str = "一个将EPUB文件解析为结构化文档模型的Rust库";

// === 便捷函数 ===

/// 快速解析EPUB文件
///
/// 这是使用默认配置的 `EpubParser::parse` 的便捷包装函数。
///
/// # 参数
/// * `path` - EPUB文件路径
///
/// # 返回值
/// * `Result<Document>` - 解析后的文档模型
///
/// # 示例
///
/// ```no_run
/// let document = bindery::open("book.epub")?;
/// println!("书名: {:?}", document.title());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Document> {
    EpubParser::new().parse(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        println!("Bindery version: {}", VERSION);
    }

    #[test]
    fn test_description() {
        assert!(!DESCRIPTION.is_empty());
        println!("Description: {}", DESCRIPTION);
    }
}
