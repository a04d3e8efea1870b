//! OPF（Open Packaging Format）包文档解析模块
//!
//! 此模块提供EPUB包文档中元数据、清单、脊柱等信息的提取功能。

mod config;
mod manifest;
mod media_type;
mod metadata;
mod spine;

// 重新导出公共类型
pub use config::{MetadataTagConfig, MetadataTagConfigs};
pub use manifest::{Manifest, ManifestItem};
pub use media_type::MediaType;
pub use metadata::{Creator, Metadata};
pub use spine::{PageProgressionDirection, Spine, SpineItem};
