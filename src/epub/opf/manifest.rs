//! 清单模块
//!
//! 提供EPUB包中文件清单的结构定义和提取功能。

use std::collections::HashMap;

use crate::epub::error::{ParseError, Result};
use crate::epub::opf::media_type::MediaType;
use crate::epub::xml::XmlElement;

/// 清单项信息
#[derive(Debug, Clone)]
pub struct ManifestItem {
    /// 项目ID
    pub id: String,
    /// 文件路径(相对于包文档)
    pub path: String,
    /// 媒体类型
    pub media_type: MediaType,
    /// 属性(如nav、cover-image等)，多个属性以空格分隔
    pub property: Option<String>,
}

impl ManifestItem {
    /// 检查是否包含指定属性
    pub fn has_property(&self, property: &str) -> bool {
        if let Some(properties) = &self.property {
            properties.split_whitespace().any(|p| p == property)
        } else {
            false
        }
    }

    /// 检查是否为导航文档(nav属性或NCX媒体类型)
    pub fn is_navigation(&self) -> bool {
        self.has_property("nav") || self.media_type.is_navigation()
    }

    /// 检查是否为封面图片
    pub fn is_cover_image(&self) -> bool {
        self.has_property("cover-image")
    }

    /// 检查是否为图片文件
    pub fn is_image(&self) -> bool {
        self.media_type.is_image()
    }
}

/// 包文档中的文件清单
#[derive(Debug, Clone)]
pub struct Manifest {
    /// 清单元素的id属性
    pub id: Option<String>,
    /// 按项目ID索引的清单项，id重复时后出现的条目覆盖先出现的
    pub items: HashMap<String, ManifestItem>,
}

impl Manifest {
    /// 从manifest元素提取清单
    ///
    /// 每个item必须带id和href属性，media-type缺失时按空字符串
    /// 处理为未知类型。
    ///
    /// # 参数
    /// * `element` - 包文档中的manifest元素
    ///
    /// # 返回值
    /// * `Result<Manifest>` - 提取后的清单，没有任何item时返回错误
    pub fn extract(element: &XmlElement) -> Result<Manifest> {
        let item_elements = element.children("item");
        if item_elements.is_empty() {
            return Err(ParseError::NoManifest);
        }

        let mut items = HashMap::new();
        for (index, item_element) in item_elements.iter().enumerate() {
            let id = item_element.attr("id").ok_or_else(|| {
                ParseError::ManifestItem(format!("第{}个item缺少id属性", index + 1))
            })?;

            let path = item_element.attr("href").ok_or_else(|| {
                ParseError::ManifestItem(format!("item '{}'缺少href属性", id))
            })?;

            let media_type = MediaType::from(item_element.attr("media-type").unwrap_or(""));

            items.insert(
                id.to_string(),
                ManifestItem {
                    id: id.to_string(),
                    path: path.to_string(),
                    media_type,
                    property: item_element.attr("properties").map(str::to_string),
                },
            );
        }

        Ok(Manifest {
            id: element.attr("id").map(str::to_string),
            items,
        })
    }

    /// 按项目ID查找清单项
    pub fn get(&self, id: &str) -> Option<&ManifestItem> {
        self.items.get(id)
    }

    /// 查找带指定属性的清单项，多个匹配时不保证顺序
    pub fn find_by_property(&self, property: &str) -> Option<&ManifestItem> {
        self.items.values().find(|item| item.has_property(property))
    }

    /// 清单项数量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 清单是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
