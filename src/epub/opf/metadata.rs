//! 元数据处理模块
//!
//! 提供EPUB元数据的结构定义和提取功能。

use crate::epub::opf::config::{self, MetadataTagConfigs};
use crate::epub::xml::XmlElement;

/// 创建者信息(作者、编辑者等)
#[derive(Debug, Clone, Default)]
pub struct Creator {
    /// 创建者姓名
    pub name: Option<String>,
    /// 角色(如aut、edt等)
    pub role: Option<String>,
    /// 排序用名称
    pub file_as: Option<String>,
}

/// OPF包文档中的元数据信息
///
/// 元数据提取尽力而为：缺失的元素保留None，不会导致解析失败。
/// 每个字段取第一个匹配元素的文本值。
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// 标题
    pub title: Option<String>,
    /// 创建者
    pub creator: Option<Creator>,
    /// 贡献者
    pub contributor: Option<Creator>,
    /// 语言
    pub language: Option<String>,
    /// 标识符(ISBN、UUID等)
    pub identifier: Option<String>,
    /// 出版社
    pub publisher: Option<String>,
    /// 出版日期
    pub date: Option<String>,
    /// 描述
    pub description: Option<String>,
    /// 主题
    pub subject: Option<String>,
    /// 版权信息
    pub rights: Option<String>,
    /// 覆盖范围
    pub coverage: Option<String>,
    /// 出版格式
    pub format: Option<String>,
    /// 相关资源
    pub relation: Option<String>,
    /// 来源
    pub source: Option<String>,
    /// 出版物类型
    pub book_type: Option<String>,
    /// 封面图片在manifest中的id，来自meta标签的cover声明
    pub cover_id: Option<String>,
}

impl Metadata {
    /// 使用默认标签配置从metadata元素提取元数据
    ///
    /// # 参数
    /// * `element` - 包文档中的metadata元素
    pub fn extract(element: &XmlElement) -> Metadata {
        Self::extract_with_configs(element, config::defaults())
    }

    /// 使用指定的标签配置从metadata元素提取元数据
    ///
    /// # 参数
    /// * `element` - 包文档中的metadata元素
    /// * `configs` - 元数据标签配置
    pub fn extract_with_configs(element: &XmlElement, configs: &MetadataTagConfigs) -> Metadata {
        Metadata {
            title: Self::first_text(element, &configs.title.tags),
            creator: Self::first_creator(element, &configs.creator.tags),
            contributor: Self::first_creator(element, &configs.contributor.tags),
            language: Self::first_text(element, &configs.language.tags),
            identifier: Self::first_text(element, &configs.identifier.tags),
            publisher: Self::first_text(element, &configs.publisher.tags),
            date: Self::first_text(element, &configs.date.tags),
            description: Self::first_text(element, &configs.description.tags),
            subject: Self::first_text(element, &configs.subject.tags),
            rights: Self::first_text(element, &configs.rights.tags),
            coverage: Self::first_text(element, &configs.coverage.tags),
            format: Self::first_text(element, &configs.format.tags),
            relation: Self::first_text(element, &configs.relation.tags),
            source: Self::first_text(element, &configs.source.tags),
            book_type: Self::first_text(element, &configs.book_type.tags),
            cover_id: Self::first_cover_id(element, &configs.cover.tags),
        }
    }

    /// 按标签列表顺序取第一个匹配子元素的文本值
    fn first_text(element: &XmlElement, tags: &[String]) -> Option<String> {
        tags.iter()
            .find_map(|tag| element.child(tag))
            .and_then(|child| child.text())
            .map(str::to_string)
    }

    /// 按标签列表顺序取第一个匹配子元素并提取创建者信息
    fn first_creator(element: &XmlElement, tags: &[String]) -> Option<Creator> {
        tags.iter()
            .find_map(|tag| element.child(tag))
            .map(|child| Creator {
                name: child.text().map(str::to_string),
                role: child.attr("role").map(str::to_string),
                file_as: child.attr("file-as").map(str::to_string),
            })
    }

    /// 从meta标签的cover声明中取封面id
    ///
    /// 取第一个匹配的meta元素，即使它缺少content属性。
    fn first_cover_id(element: &XmlElement, names: &[String]) -> Option<String> {
        names
            .iter()
            .find_map(|name| {
                element
                    .children_with_attr("meta", "name", name)
                    .first()
                    .copied()
            })
            .and_then(|meta| meta.attr("content"))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epub::opf::config::MetadataTagConfig;
    use crate::epub::xml::XmlDocument;

    const FULL_METADATA: &str = r#"<metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:title>测试书籍</dc:title>
    <dc:creator opf:role="aut" opf:file-as="Zuozhe, Ceshi">测试作者</dc:creator>
    <dc:contributor opf:role="edt">测试编辑</dc:contributor>
    <dc:language>zh-CN</dc:language>
    <dc:identifier>978-1234567890</dc:identifier>
    <dc:publisher>测试出版社</dc:publisher>
    <dc:date>2024-01-01</dc:date>
    <dc:description>一本用于测试的书</dc:description>
    <dc:subject>测试</dc:subject>
    <dc:rights>版权所有</dc:rights>
    <dc:coverage>全球</dc:coverage>
    <dc:format>EPUB</dc:format>
    <dc:relation>https://example.com</dc:relation>
    <dc:source>原始手稿</dc:source>
    <dc:type>小说</dc:type>
    <meta name="cover" content="cover-image"/>
</metadata>"#;

    fn extract_from(xml: &str) -> Metadata {
        let document = XmlDocument::parse(xml).unwrap();
        Metadata::extract(document.root())
    }

    #[test]
    fn test_extract_full_metadata() {
        let metadata = extract_from(FULL_METADATA);

        assert_eq!(metadata.title.as_deref(), Some("测试书籍"));
        assert_eq!(metadata.language.as_deref(), Some("zh-CN"));
        assert_eq!(metadata.identifier.as_deref(), Some("978-1234567890"));
        assert_eq!(metadata.publisher.as_deref(), Some("测试出版社"));
        assert_eq!(metadata.date.as_deref(), Some("2024-01-01"));
        assert_eq!(metadata.description.as_deref(), Some("一本用于测试的书"));
        assert_eq!(metadata.subject.as_deref(), Some("测试"));
        assert_eq!(metadata.rights.as_deref(), Some("版权所有"));
        assert_eq!(metadata.coverage.as_deref(), Some("全球"));
        assert_eq!(metadata.format.as_deref(), Some("EPUB"));
        assert_eq!(metadata.relation.as_deref(), Some("https://example.com"));
        assert_eq!(metadata.source.as_deref(), Some("原始手稿"));
        assert_eq!(metadata.book_type.as_deref(), Some("小说"));
        assert_eq!(metadata.cover_id.as_deref(), Some("cover-image"));
    }

    #[test]
    fn test_extract_creator_with_attributes() {
        let metadata = extract_from(FULL_METADATA);

        let creator = metadata.creator.unwrap();
        assert_eq!(creator.name.as_deref(), Some("测试作者"));
        assert_eq!(creator.role.as_deref(), Some("aut"));
        assert_eq!(creator.file_as.as_deref(), Some("Zuozhe, Ceshi"));

        let contributor = metadata.contributor.unwrap();
        assert_eq!(contributor.name.as_deref(), Some("测试编辑"));
        assert_eq!(contributor.role.as_deref(), Some("edt"));
        assert_eq!(contributor.file_as, None);
    }

    #[test]
    fn test_creator_without_attributes() {
        let metadata = extract_from(
            r#"<metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:creator>纯文本作者</dc:creator>
</metadata>"#,
        );

        let creator = metadata.creator.unwrap();
        assert_eq!(creator.name.as_deref(), Some("纯文本作者"));
        assert_eq!(creator.role, None);
        assert_eq!(creator.file_as, None);
    }

    #[test]
    fn test_empty_metadata_element() {
        let metadata = extract_from("<metadata></metadata>");

        assert_eq!(metadata.title, None);
        assert_eq!(metadata.language, None);
        assert!(metadata.creator.is_none());
        assert!(metadata.contributor.is_none());
        assert_eq!(metadata.cover_id, None);
    }

    #[test]
    fn test_cover_id_first_match_wins() {
        let metadata = extract_from(
            r#"<metadata>
    <meta name="cover" content="first-cover"/>
    <meta name="cover" content="second-cover"/>
</metadata>"#,
        );

        assert_eq!(metadata.cover_id.as_deref(), Some("first-cover"));
    }

    #[test]
    fn test_cover_meta_without_content() {
        // 第一个匹配的meta即使没有content也不再向后查找
        let metadata = extract_from(
            r#"<metadata>
    <meta name="cover"/>
    <meta name="cover" content="late-cover"/>
</metadata>"#,
        );

        assert_eq!(metadata.cover_id, None);
    }

    #[test]
    fn test_unrelated_meta_ignored() {
        let metadata = extract_from(
            r#"<metadata>
    <meta name="generator" content="some-tool"/>
</metadata>"#,
        );

        assert_eq!(metadata.cover_id, None);
    }

    #[test]
    fn test_custom_tag_configs() {
        let mut configs = MetadataTagConfigs::default();
        configs.title = MetadataTagConfig::new(vec!["booktitle".to_string()]);

        let document = XmlDocument::parse(
            r#"<metadata>
    <booktitle>自定义标题</booktitle>
    <title>标准标题</title>
</metadata>"#,
        )
        .unwrap();
        let metadata = Metadata::extract_with_configs(document.root(), &configs);

        assert_eq!(metadata.title.as_deref(), Some("自定义标题"));
    }

    #[test]
    fn test_tag_list_order_decides() {
        let mut configs = MetadataTagConfigs::default();
        configs.title =
            MetadataTagConfig::new(vec!["booktitle".to_string(), "title".to_string()]);

        let document = XmlDocument::parse(
            r#"<metadata>
    <title>标准标题</title>
</metadata>"#,
        )
        .unwrap();
        let metadata = Metadata::extract_with_configs(document.root(), &configs);

        // booktitle不存在时按顺序回退到title
        assert_eq!(metadata.title.as_deref(), Some("标准标题"));
    }
}
