use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::epub::error::{ParseError, Result};

/// EPUB文件要求的mimetype内容
pub const EPUB_MIMETYPE: &str = "application/epub+zip";

/// 表示一个打开的EPUB压缩包
pub struct EpubArchive {
    archive: ZipArchive<File>,
}

impl EpubArchive {
    /// 打开EPUB文件并验证其合法性
    ///
    /// 文件按zip格式读取，不要求特定的扩展名。
    ///
    /// # 参数
    /// * `path` - EPUB文件的路径
    ///
    /// # 返回值
    /// * `Result<EpubArchive>` - 成功返回压缩包实例，失败返回错误
    pub fn open<P: AsRef<Path>>(path: P) -> Result<EpubArchive> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;

        let mut epub_archive = EpubArchive { archive };
        epub_archive.validate()?;

        Ok(epub_archive)
    }

    /// 验证EPUB文件的合法性
    ///
    /// 检查步骤：
    /// 1. 检查是否存在mimetype文件
    /// 2. 验证mimetype文件的内容是否为"application/epub+zip"
    fn validate(&mut self) -> Result<()> {
        let mimetype_file = self.archive.by_name("mimetype");

        match mimetype_file {
            Ok(mut file) => {
                let mut content = String::new();
                file.read_to_string(&mut content)?;

                // 去除可能的换行符和空白字符
                let content = content.trim();

                if content != EPUB_MIMETYPE {
                    return Err(ParseError::InvalidMimetype {
                        expected: EPUB_MIMETYPE.to_string(),
                        found: content.to_string(),
                    });
                }

                Ok(())
            }
            Err(_) => Err(ParseError::MissingMimetype),
        }
    }

    /// 将压缩包的全部条目解压到指定目录
    ///
    /// 目录不存在时会自动创建。
    ///
    /// # 参数
    /// * `directory` - 解压目标目录
    pub fn unpack<P: AsRef<Path>>(&mut self, directory: P) -> Result<()> {
        self.archive.extract(directory)?;
        Ok(())
    }
}

/// 验证EPUB文件并解压到同名目录
///
/// 目标目录为去掉扩展名的文件路径，例如`books/novel.epub`
/// 解压到`books/novel/`。同一路径的并发解压不做协调，
/// 需要调用方自行串行化。
///
/// # 参数
/// * `path` - EPUB文件的路径
///
/// # 返回值
/// * `Result<PathBuf>` - 解压后的目录路径
pub fn extract<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut archive = EpubArchive::open(path)?;

    let directory = path.with_extension("");
    archive.unpack(&directory)?;

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    /// 创建一个测试用的EPUB文件
    fn create_test_epub(path: &Path, mimetype_content: Option<&str>) -> Result<()> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(file);

        if let Some(content) = mimetype_content {
            zip.start_file("mimetype", FileOptions::<()>::default())?;
            zip.write_all(content.as_bytes())?;
        }

        zip.start_file("META-INF/container.xml", FileOptions::<()>::default())?;
        zip.write_all(b"<container/>")?;

        zip.start_file("OEBPS/content.opf", FileOptions::<()>::default())?;
        zip.write_all(b"<package/>")?;

        zip.finish()?;
        Ok(())
    }

    #[test]
    fn test_open_valid_epub() {
        let dir = TempDir::new().unwrap();
        let epub_path = dir.path().join("valid.epub");
        create_test_epub(&epub_path, Some("application/epub+zip")).unwrap();

        assert!(EpubArchive::open(&epub_path).is_ok());
    }

    #[test]
    fn test_mimetype_with_trailing_whitespace() {
        let dir = TempDir::new().unwrap();
        let epub_path = dir.path().join("padded.epub");
        create_test_epub(&epub_path, Some("application/epub+zip\n")).unwrap();

        assert!(EpubArchive::open(&epub_path).is_ok());
    }

    #[test]
    fn test_invalid_mimetype() {
        let dir = TempDir::new().unwrap();
        let epub_path = dir.path().join("invalid.epub");
        create_test_epub(&epub_path, Some("invalid/mimetype")).unwrap();

        let result = EpubArchive::open(&epub_path);

        if let Err(ParseError::InvalidMimetype { expected, found }) = result {
            assert_eq!(expected, "application/epub+zip");
            assert_eq!(found, "invalid/mimetype");
        } else {
            panic!("期望InvalidMimetype错误");
        }
    }

    #[test]
    fn test_missing_mimetype() {
        let dir = TempDir::new().unwrap();
        let epub_path = dir.path().join("missing.epub");
        create_test_epub(&epub_path, None).unwrap();

        let result = EpubArchive::open(&epub_path);
        assert!(matches!(result, Err(ParseError::MissingMimetype)));
    }

    #[test]
    fn test_open_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        let result = EpubArchive::open(dir.path().join("nothing.epub"));

        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_open_non_zip_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("plain.epub");
        fs::write(&file_path, "这不是zip文件").unwrap();

        let result = EpubArchive::open(&file_path);
        assert!(matches!(result, Err(ParseError::Zip(_))));
    }

    #[test]
    fn test_extract_creates_sibling_directory() {
        let dir = TempDir::new().unwrap();
        let epub_path = dir.path().join("novel.epub");
        create_test_epub(&epub_path, Some("application/epub+zip")).unwrap();

        let directory = extract(&epub_path).unwrap();

        assert_eq!(directory, dir.path().join("novel"));
        assert!(directory.join("mimetype").exists());
        assert!(directory.join("META-INF/container.xml").exists());

        let content = fs::read_to_string(directory.join("OEBPS/content.opf")).unwrap();
        assert_eq!(content, "<package/>");
    }

    #[test]
    fn test_extract_rejects_invalid_epub() {
        let dir = TempDir::new().unwrap();
        let epub_path = dir.path().join("bad.epub");
        create_test_epub(&epub_path, Some("text/plain")).unwrap();

        let result = extract(&epub_path);

        assert!(matches!(result, Err(ParseError::InvalidMimetype { .. })));
        // 验证失败时不产生解压目录
        assert!(!dir.path().join("bad").exists());
    }
}
