use std::fs;
use std::path::{Path, PathBuf};

use crate::epub::error::{ParseError, Result};
use crate::epub::xml::XmlDocument;

/// container.xml在解压目录中的相对路径
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

/// container.xml中的rootfile条目
#[derive(Debug, Clone)]
pub struct RootFile {
    pub full_path: String,
    pub media_type: Option<String>,
}

/// container.xml的解析结果
#[derive(Debug, Clone)]
pub struct Container {
    pub rootfiles: Vec<RootFile>,
}

impl Container {
    /// 解析container.xml内容
    ///
    /// # 参数
    /// * `content` - container.xml的文件内容
    ///
    /// # 返回值
    /// * `Result<Container>` - 解析后的Container信息
    pub fn parse(content: &str) -> Result<Container> {
        let document =
            XmlDocument::parse(content).map_err(|e| ParseError::ContainerParse(e.to_string()))?;

        let rootfiles_element = document
            .root()
            .child("rootfiles")
            .ok_or_else(|| ParseError::ContainerParse("缺少rootfiles元素".to_string()))?;

        let mut rootfiles = Vec::new();
        for (index, rootfile_element) in rootfiles_element.children("rootfile").iter().enumerate() {
            let full_path = rootfile_element.attr("full-path").ok_or_else(|| {
                ParseError::ContainerParse(format!("第{}个rootfile缺少full-path属性", index + 1))
            })?;

            rootfiles.push(RootFile {
                full_path: full_path.to_string(),
                media_type: rootfile_element.attr("media-type").map(str::to_string),
            });
        }

        if rootfiles.is_empty() {
            return Err(ParseError::ContainerParse(
                "没有找到任何rootfile条目".to_string(),
            ));
        }

        Ok(Container { rootfiles })
    }

    /// 获取包文档的路径，多个rootfile条目时取第一个
    pub fn package_document_path(&self) -> Option<&str> {
        self.rootfiles
            .first()
            .map(|rootfile| rootfile.full_path.as_str())
    }

    /// 在解压目录中定位包文档
    ///
    /// 读取META-INF/container.xml，返回第一个rootfile指向的完整路径。
    ///
    /// # 参数
    /// * `directory` - EPUB解压后的目录
    ///
    /// # 返回值
    /// * `Result<PathBuf>` - 包文档的完整路径
    pub fn locate<P: AsRef<Path>>(directory: P) -> Result<PathBuf> {
        let directory = directory.as_ref();
        let container_path = directory.join(CONTAINER_PATH);

        let content = fs::read_to_string(&container_path)
            .map_err(|_| ParseError::ContainerMissing(container_path.display().to_string()))?;

        let container = Container::parse(&content)?;

        let package_path = container.package_document_path().ok_or_else(|| {
            ParseError::ContainerParse("container.xml中没有找到有效的rootfile".to_string())
        })?;

        Ok(directory.join(package_path))
    }
}
