//! 解析观察者模块
//!
//! 定义解析流程的生命周期回调接口。所有方法都有空的默认实现，
//! 实现方只需覆盖自己关心的通知。

use std::path::Path;

use crate::epub::error::ParseError;
use crate::epub::ncx::TableOfContents;
use crate::epub::opf::{Manifest, Metadata, Spine};

/// 解析流程的观察者
///
/// 各通知按解析步骤的完成顺序触发。解析器只持有观察者的
/// 弱引用，观察者被销毁后通知会被直接跳过。
pub trait ParseObserver {
    /// 解析开始
    fn begin(&self, _path: &Path) {}

    /// 压缩包解压完成
    fn archive_extracted(&self, _directory: &Path) {}

    /// 元数据提取完成
    fn metadata_ready(&self, _metadata: &Metadata) {}

    /// 清单提取完成
    fn manifest_ready(&self, _manifest: &Manifest) {}

    /// 脊柱提取完成
    fn spine_ready(&self, _spine: &Spine) {}

    /// 目录树构建完成
    fn toc_ready(&self, _table_of_contents: &TableOfContents) {}

    /// 解析成功结束
    fn end(&self, _path: &Path) {}

    /// 解析失败，通知后错误继续向调用方传播
    fn failed(&self, _path: &Path, _error: &ParseError) {}
}
