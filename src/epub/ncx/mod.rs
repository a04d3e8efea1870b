//! NCX（Navigation Control file for XML）文件解析模块
//!
//! 此模块提供EPUB目录文档的解析功能，把NCX导航地图中的
//! navPoint嵌套结构转换为带标签的目录树。

mod toc;

// 重新导出公共类型
pub use toc::{ROOT_ID, TableOfContents};
