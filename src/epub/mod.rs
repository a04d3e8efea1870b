pub mod archive;
pub mod container;
pub mod document;
pub mod error;
pub mod ncx;
pub mod observer;
pub mod opf;
pub mod parser;
pub mod xml;

// 重新导出错误处理
pub use error::{ParseError, Result};

// 重新导出解析器、文档模型和观察者
pub use document::Document;
pub use observer::ParseObserver;
pub use parser::EpubParser;

// 重新导出压缩包和容器相关
pub use archive::EpubArchive;
pub use container::{Container, RootFile};

// 重新导出XML树相关
pub use xml::{XmlDocument, XmlElement};

// 重新导出OPF相关
pub use opf::{
    Creator,
    Manifest,
    ManifestItem,
    MediaType,
    Metadata,
    MetadataTagConfig,
    MetadataTagConfigs,
    PageProgressionDirection,
    Spine,
    SpineItem,
};

// 重新导出NCX相关
pub use ncx::TableOfContents;
