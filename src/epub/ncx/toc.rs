//! 目录树模块
//!
//! 将NCX导航文档解析为带标签的目录树。根节点来自docTitle，
//! 子节点按navMap中navPoint的文档顺序和嵌套结构排列。

use crate::epub::error::{ParseError, Result};
use crate::epub::xml::XmlElement;

/// 目录树根节点的固定ID
pub const ROOT_ID: &str = "0";

/// 目录树节点
///
/// 根节点的`item`为head中dtb:uid声明的书籍标识符，
/// 其余节点的`item`为content元素的src目标。
#[derive(Debug, Clone)]
pub struct TableOfContents {
    /// 显示标签
    pub label: String,
    /// 节点ID，根节点固定为"0"
    pub id: String,
    /// 导航目标
    pub item: Option<String>,
    /// 子节点列表，保持文档顺序
    pub sub_table: Vec<TableOfContents>,
}

impl TableOfContents {
    /// 从NCX文档的根元素提取目录树
    ///
    /// # 参数
    /// * `root` - NCX文档的ncx根元素
    ///
    /// # 返回值
    /// * `Result<TableOfContents>` - 提取后的目录树
    pub fn extract(root: &XmlElement) -> Result<TableOfContents> {
        let label = root
            .child("docTitle")
            .and_then(|doc_title| doc_title.child("text"))
            .and_then(|text| text.text())
            .ok_or(ParseError::MissingTitle)?
            .to_string();

        let item = root
            .child("head")
            .and_then(|head| {
                head.children_with_attr("meta", "name", "dtb:uid")
                    .first()
                    .copied()
            })
            .and_then(|meta| meta.attr("content"))
            .map(str::to_string);

        // navMap缺失时目录为空，不算错误
        let sub_table = match root.child("navMap") {
            Some(nav_map) => Self::extract_nav_points(nav_map)?,
            None => Vec::new(),
        };

        Ok(TableOfContents {
            label,
            id: ROOT_ID.to_string(),
            item,
            sub_table,
        })
    }

    /// 递归提取父元素下的navPoint节点
    fn extract_nav_points(parent: &XmlElement) -> Result<Vec<TableOfContents>> {
        let mut nodes = Vec::new();

        for (index, nav_point) in parent.children("navPoint").iter().enumerate() {
            let id = nav_point.attr("id").ok_or_else(|| {
                ParseError::NavPoint(format!("第{}个navPoint缺少id属性", index + 1))
            })?;

            let label = nav_point
                .child("navLabel")
                .and_then(|nav_label| nav_label.child("text"))
                .and_then(|text| text.text())
                .ok_or_else(|| {
                    ParseError::NavPoint(format!("navPoint '{}'缺少navLabel文本", id))
                })?;

            let src = nav_point
                .child("content")
                .and_then(|content| content.attr("src"))
                .ok_or_else(|| {
                    ParseError::NavPoint(format!("navPoint '{}'缺少content的src属性", id))
                })?;

            nodes.push(TableOfContents {
                label: label.to_string(),
                id: id.to_string(),
                item: Some(src.to_string()),
                sub_table: Self::extract_nav_points(nav_point)?,
            });
        }

        Ok(nodes)
    }

    /// 目录树的最大深度，根节点计为1
    pub fn depth(&self) -> u32 {
        1 + self
            .sub_table
            .iter()
            .map(TableOfContents::depth)
            .max()
            .unwrap_or(0)
    }

    /// 目录树的节点总数，包含自身
    pub fn len(&self) -> usize {
        1 + self
            .sub_table
            .iter()
            .map(TableOfContents::len)
            .sum::<usize>()
    }

    /// 获取所有节点的扁平列表(先序遍历)
    pub fn flatten(&self) -> Vec<&TableOfContents> {
        let mut nodes = vec![self];
        for child in &self.sub_table {
            nodes.extend(child.flatten());
        }
        nodes
    }

    /// 根据节点ID查找节点
    pub fn find_by_id(&self, id: &str) -> Option<&TableOfContents> {
        if self.id == id {
            return Some(self);
        }

        for child in &self.sub_table {
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }

        None
    }
}
