//! 脊柱模块
//!
//! 提供EPUB包中阅读顺序（脊柱）的结构定义和提取功能。

use crate::epub::error::{ParseError, Result};
use crate::epub::xml::XmlElement;

/// 页面行进方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageProgressionDirection {
    /// 从左到右，属性缺失时的默认值
    #[default]
    Ltr,
    /// 从右到左
    Rtl,
    /// 属性值无法识别
    Unspecified,
}

impl From<&str> for PageProgressionDirection {
    fn from(value: &str) -> PageProgressionDirection {
        match value {
            "ltr" => PageProgressionDirection::Ltr,
            "rtl" => PageProgressionDirection::Rtl,
            _ => PageProgressionDirection::Unspecified,
        }
    }
}

/// 脊柱项信息(阅读顺序中的一项)
#[derive(Debug, Clone)]
pub struct SpineItem {
    /// 条目的id属性
    pub id: Option<String>,
    /// 引用的清单项ID
    pub idref: String,
    /// 是否线性阅读，linear属性缺失或为"yes"时为true
    pub linear: bool,
}

/// 包文档中的脊柱(阅读顺序)
#[derive(Debug, Clone, Default)]
pub struct Spine {
    /// 脊柱元素的id属性
    pub id: Option<String>,
    /// 目录文档在清单中的ID
    pub toc: Option<String>,
    /// 页面行进方向
    pub page_progression_direction: PageProgressionDirection,
    /// 按文档顺序排列的脊柱项
    pub items: Vec<SpineItem>,
}

impl Spine {
    /// 从spine元素提取脊柱信息
    ///
    /// 每个itemref必须带idref属性，itemref的顺序保持文档顺序。
    ///
    /// # 参数
    /// * `element` - 包文档中的spine元素
    ///
    /// # 返回值
    /// * `Result<Spine>` - 提取后的脊柱信息
    pub fn extract(element: &XmlElement) -> Result<Spine> {
        let mut items = Vec::new();
        for (index, itemref_element) in element.children("itemref").iter().enumerate() {
            let idref = itemref_element.attr("idref").ok_or_else(|| {
                ParseError::SpineItem(format!("第{}个itemref缺少idref属性", index + 1))
            })?;

            items.push(SpineItem {
                id: itemref_element.attr("id").map(str::to_string),
                idref: idref.to_string(),
                linear: itemref_element
                    .attr("linear")
                    .map_or(true, |value| value == "yes"),
            });
        }

        let page_progression_direction = element
            .attr("page-progression-direction")
            .map(PageProgressionDirection::from)
            .unwrap_or_default();

        Ok(Spine {
            id: element.attr("id").map(str::to_string),
            toc: element.attr("toc").map(str::to_string),
            page_progression_direction,
            items,
        })
    }
}
