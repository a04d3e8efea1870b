use std::fmt;

/// 清单条目的媒体类型
///
/// 覆盖EPUB常见的核心媒体类型，无法识别的类型保留原始字符串，
/// 不会导致解析失败。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Gif,
    Jpeg,
    Png,
    Svg,
    Xhtml,
    Dtbook,
    Css,
    Xml,
    Javascript,
    Ncx,
    OpenType,
    Woff,
    Smil,
    Pls,
    Mpeg,
    Mp4,
    Unknown(String),
}

impl MediaType {
    /// 媒体类型对应的MIME字符串
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Gif => "image/gif",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Svg => "image/svg+xml",
            MediaType::Xhtml => "application/xhtml+xml",
            MediaType::Dtbook => "application/x-dtbook+xml",
            MediaType::Css => "text/css",
            MediaType::Xml => "application/xml",
            MediaType::Javascript => "text/javascript",
            MediaType::Ncx => "application/x-dtbncx+xml",
            MediaType::OpenType => "application/vnd.ms-opentype",
            MediaType::Woff => "application/font-woff",
            MediaType::Smil => "application/smil+xml",
            MediaType::Pls => "application/pls+xml",
            MediaType::Mpeg => "audio/mpeg",
            MediaType::Mp4 => "audio/mp4",
            MediaType::Unknown(raw) => raw,
        }
    }

    /// 是否为图片类型
    pub fn is_image(&self) -> bool {
        self.as_str().starts_with("image/")
    }

    /// 是否为NCX导航文档类型
    pub fn is_navigation(&self) -> bool {
        matches!(self, MediaType::Ncx)
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> MediaType {
        match value {
            "image/gif" => MediaType::Gif,
            "image/jpeg" => MediaType::Jpeg,
            "image/png" => MediaType::Png,
            "image/svg+xml" => MediaType::Svg,
            "application/xhtml+xml" => MediaType::Xhtml,
            "application/x-dtbook+xml" => MediaType::Dtbook,
            "text/css" => MediaType::Css,
            "application/xml" => MediaType::Xml,
            "text/javascript" => MediaType::Javascript,
            "application/x-dtbncx+xml" => MediaType::Ncx,
            "application/vnd.ms-opentype" => MediaType::OpenType,
            "application/font-woff" => MediaType::Woff,
            "application/smil+xml" => MediaType::Smil,
            "application/pls+xml" => MediaType::Pls,
            "audio/mpeg" => MediaType::Mpeg,
            "audio/mp4" => MediaType::Mp4,
            other => MediaType::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
