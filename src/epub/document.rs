//! 文档模型模块
//!
//! 提供解析完成后的EPUB文档聚合模型。

use std::path::PathBuf;

use crate::epub::ncx::TableOfContents;
use crate::epub::opf::{Manifest, Metadata, Spine};

/// 解析完成的EPUB文档
///
/// 由解析器在所有步骤成功后组装，任何一步失败都不会产生
/// 部分填充的文档。
#[derive(Debug, Clone)]
pub struct Document {
    /// EPUB解压后的目录
    pub directory: PathBuf,
    /// 包文档所在的内容目录，清单中的相对路径以此为基准
    pub content_directory: PathBuf,
    /// 元数据
    pub metadata: Metadata,
    /// 文件清单
    pub manifest: Manifest,
    /// 脊柱(阅读顺序)
    pub spine: Spine,
    /// 目录树
    pub table_of_contents: TableOfContents,
}

impl Document {
    /// 书籍标题
    pub fn title(&self) -> Option<&str> {
        self.metadata.title.as_deref()
    }

    /// 作者姓名
    pub fn author(&self) -> Option<&str> {
        self.metadata
            .creator
            .as_ref()
            .and_then(|creator| creator.name.as_deref())
    }

    /// 清单项对应文件的完整路径
    ///
    /// # 参数
    /// * `id` - 清单项ID
    pub fn resource_path(&self, id: &str) -> Option<PathBuf> {
        self.manifest
            .get(id)
            .map(|item| self.content_directory.join(&item.path))
    }

    /// 封面图片的完整路径
    ///
    /// 优先使用清单中带cover-image属性的条目，其次使用元数据中
    /// cover声明指向的清单项。
    pub fn cover_path(&self) -> Option<PathBuf> {
        if let Some(item) = self.manifest.find_by_property("cover-image") {
            return Some(self.content_directory.join(&item.path));
        }

        self.metadata
            .cover_id
            .as_deref()
            .and_then(|id| self.resource_path(id))
    }

    /// 按阅读顺序排列的线性章节文件路径
    ///
    /// 只包含线性条目，idref无法在清单中解析的条目被跳过。
    pub fn reading_order(&self) -> Vec<PathBuf> {
        self.spine
            .items
            .iter()
            .filter(|item| item.linear)
            .filter_map(|item| self.resource_path(&item.idref))
            .collect()
    }
}
