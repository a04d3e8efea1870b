//! 轻量级XML树解析模块
//!
//! 将XML文本一次性解析为内存中的元素树，供container、包文档和
//! 目录文档的提取逻辑按标签名和属性名查询。
//! 元素名和属性名均去掉命名空间前缀，例如`dc:title`按`title`查询。

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::epub::error::{ParseError, Result};

/// 解析完成的XML文档，持有根元素
#[derive(Debug, Clone)]
pub struct XmlDocument {
    root: XmlElement,
}

/// XML元素节点
///
/// 记录元素的本地名称、属性表、拼接后的文本内容和子元素列表。
/// 子元素保持文档中的出现顺序。
#[derive(Debug, Clone)]
pub struct XmlElement {
    name: String,
    attributes: HashMap<String, String>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlDocument {
    /// 解析XML内容
    ///
    /// # 参数
    /// * `content` - XML文本内容
    ///
    /// # 返回值
    /// * `Result<XmlDocument>` - 解析后的文档树
    pub fn parse(content: &str) -> Result<XmlDocument> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);
        reader.config_mut().expand_empty_elements = true;

        let mut root: Option<XmlElement> = None;
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    let mut attributes = HashMap::new();

                    for attr_result in e.attributes() {
                        let attr = attr_result
                            .map_err(|e| ParseError::Xml(quick_xml::Error::InvalidAttr(e)))?;
                        let key =
                            String::from_utf8_lossy(attr.key.local_name().as_ref()).to_string();
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        attributes.insert(key, value);
                    }

                    stack.push(XmlElement {
                        name,
                        attributes,
                        text: String::new(),
                        children: Vec::new(),
                    });
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(element) = stack.last_mut() {
                        element.text.push_str(&e.unescape()?);
                    }
                }
                Ok(Event::End(ref e)) => {
                    let element = stack.pop().ok_or_else(|| {
                        ParseError::InvalidXml(format!(
                            "多余的结束标签: {}",
                            String::from_utf8_lossy(e.local_name().as_ref())
                        ))
                    })?;

                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => root = Some(element),
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(ParseError::Xml(e)),
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(ParseError::InvalidXml(
                "文档在元素未闭合时结束".to_string(),
            ));
        }

        match root {
            Some(root) => Ok(XmlDocument { root }),
            None => Err(ParseError::InvalidXml("没有找到根元素".to_string())),
        }
    }

    /// 获取根元素
    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

impl XmlElement {
    /// 元素的本地名称(不含命名空间前缀)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 按本地名称查询属性值
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// 元素的文本内容，内容为空时返回None
    pub fn text(&self) -> Option<&str> {
        let text = self.text.trim();
        if text.is_empty() { None } else { Some(text) }
    }

    /// 按标签名查询第一个直接子元素
    pub fn child(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == tag)
    }

    /// 按标签名查询所有直接子元素
    pub fn children(&self, tag: &str) -> Vec<&XmlElement> {
        self.children
            .iter()
            .filter(|child| child.name == tag)
            .collect()
    }

    /// 按标签名和属性值查询直接子元素
    ///
    /// # 参数
    /// * `tag` - 子元素的标签名
    /// * `attr` - 属性名
    /// * `value` - 要求的属性值
    pub fn children_with_attr(&self, tag: &str, attr: &str, value: &str) -> Vec<&XmlElement> {
        self.children
            .iter()
            .filter(|child| child.name == tag && child.attr(attr) == Some(value))
            .collect()
    }
}
