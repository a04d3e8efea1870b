use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// EPUB解析相关的错误类型
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),

    #[error("Zip文件错误: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("缺少mimetype文件")]
    MissingMimetype,

    #[error("无效的mimetype: {expected}, 找到: {found}")]
    InvalidMimetype { expected: String, found: String },

    #[error("XML解析错误: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML文档结构错误: {0}")]
    InvalidXml(String),

    #[error("找不到container.xml: {0}")]
    ContainerMissing(String),

    #[error("container.xml解析错误: {0}")]
    ContainerParse(String),

    #[error("包文档缺少manifest或manifest为空")]
    NoManifest,

    #[error("manifest条目错误: {0}")]
    ManifestItem(String),

    #[error("spine条目错误: {0}")]
    SpineItem(String),

    #[error("找不到目录文档: {0}")]
    TocNotFound(String),

    #[error("目录文档缺少docTitle标题")]
    MissingTitle,

    #[error("navPoint节点错误: {0}")]
    NavPoint(String),

    #[error("配置文件错误: {0}")]
    Config(String),
}
