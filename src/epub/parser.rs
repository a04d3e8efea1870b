//! 解析编排模块
//!
//! 将解压、包文档定位、各部分提取和目录树构建串联为一次
//! 完整的解析流程，并在每个步骤完成后通知观察者。

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use crate::epub::archive;
use crate::epub::container::Container;
use crate::epub::document::Document;
use crate::epub::error::{ParseError, Result};
use crate::epub::ncx::TableOfContents;
use crate::epub::observer::ParseObserver;
use crate::epub::opf::{Manifest, Metadata, MetadataTagConfigs, Spine};
use crate::epub::xml::XmlDocument;

/// EPUB解析器
///
/// 解析流程按固定顺序执行：
/// 1. 验证并解压EPUB文件
/// 2. 通过META-INF/container.xml定位包文档
/// 3. 从包文档提取元数据、清单和脊柱
/// 4. 解析脊柱指向的NCX文档并构建目录树
///
/// 所有步骤成功后组装Document返回，任何一步失败都会中止解析，
/// 不会产生部分填充的文档。
///
/// # 示例
///
/// ```no_run
/// use bindery::EpubParser;
///
/// let document = EpubParser::new().parse("book.epub")?;
/// println!("书名: {:?}", document.title());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct EpubParser {
    tag_configs: MetadataTagConfigs,
    observer: Option<Weak<dyn ParseObserver>>,
}

impl EpubParser {
    /// 创建使用默认标签配置的解析器
    pub fn new() -> EpubParser {
        EpubParser {
            tag_configs: MetadataTagConfigs::default(),
            observer: None,
        }
    }

    /// 使用自定义的元数据标签配置
    pub fn with_tag_configs(mut self, tag_configs: MetadataTagConfigs) -> EpubParser {
        self.tag_configs = tag_configs;
        self
    }

    /// 附加解析观察者
    ///
    /// 解析器只持有观察者的弱引用，观察者被销毁后，
    /// 后续通知会被跳过。
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use bindery::{EpubParser, ParseObserver};
    ///
    /// struct Logger;
    ///
    /// impl ParseObserver for Logger {
    ///     fn begin(&self, path: &std::path::Path) {
    ///         println!("开始解析: {}", path.display());
    ///     }
    /// }
    ///
    /// let observer: Arc<dyn ParseObserver> = Arc::new(Logger);
    /// let document = EpubParser::new()
    ///     .with_observer(&observer)
    ///     .parse("book.epub")?;
    /// println!("共{}个清单项", document.manifest.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_observer(mut self, observer: &Arc<dyn ParseObserver>) -> EpubParser {
        self.observer = Some(Arc::downgrade(observer));
        self
    }

    /// 解析EPUB文件
    ///
    /// # 参数
    /// * `path` - EPUB文件的路径
    ///
    /// # 返回值
    /// * `Result<Document>` - 解析后的文档模型
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        self.notify(|observer| observer.begin(path));

        match self.run(path) {
            Ok(document) => {
                self.notify(|observer| observer.end(path));
                Ok(document)
            }
            Err(error) => {
                self.notify(|observer| observer.failed(path, &error));
                Err(error)
            }
        }
    }

    /// 执行除起止通知外的全部解析步骤
    fn run(&self, path: &Path) -> Result<Document> {
        let directory = archive::extract(path)?;
        self.notify(|observer| observer.archive_extracted(&directory));

        let package_path = Container::locate(&directory)?;
        let content_directory = package_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| directory.clone());

        let package = XmlDocument::parse(&fs::read_to_string(&package_path)?)?;
        let root = package.root();

        // 元数据缺失时按空元数据处理，不中止解析
        let metadata = match root.child("metadata") {
            Some(element) => Metadata::extract_with_configs(element, &self.tag_configs),
            None => Metadata::default(),
        };
        self.notify(|observer| observer.metadata_ready(&metadata));

        let manifest_element = root.child("manifest").ok_or(ParseError::NoManifest)?;
        let manifest = Manifest::extract(manifest_element)?;
        self.notify(|observer| observer.manifest_ready(&manifest));

        let spine = match root.child("spine") {
            Some(element) => Spine::extract(element)?,
            None => Spine::default(),
        };
        self.notify(|observer| observer.spine_ready(&spine));

        let toc_path = Self::resolve_toc_path(&spine, &manifest, &content_directory)?;
        let toc_document = XmlDocument::parse(&fs::read_to_string(&toc_path)?)?;
        let table_of_contents = TableOfContents::extract(toc_document.root())?;
        self.notify(|observer| observer.toc_ready(&table_of_contents));

        Ok(Document {
            directory,
            content_directory,
            metadata,
            manifest,
            spine,
            table_of_contents,
        })
    }

    /// 通过spine的toc属性在清单中解析目录文档的路径
    fn resolve_toc_path(
        spine: &Spine,
        manifest: &Manifest,
        content_directory: &Path,
    ) -> Result<PathBuf> {
        let toc_id = spine
            .toc
            .as_deref()
            .ok_or_else(|| ParseError::TocNotFound("spine缺少toc属性".to_string()))?;

        let item = manifest.get(toc_id).ok_or_else(|| {
            ParseError::TocNotFound(format!("清单中没有id为'{}'的条目", toc_id))
        })?;

        Ok(content_directory.join(&item.path))
    }

    /// 向观察者发送一次通知，观察者不存在或已被销毁时直接跳过
    fn notify<F>(&self, notification: F)
    where
        F: FnOnce(&dyn ParseObserver),
    {
        if let Some(observer) = self.observer.as_ref().and_then(|weak| weak.upgrade()) {
            notification(observer.as_ref());
        }
    }
}

impl Default for EpubParser {
    fn default() -> EpubParser {
        EpubParser::new()
    }
}
