use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 判定文件类型时读取的前缀大小
const SAMPLE_SIZE: u64 = 4096;

/// 判断文件是否是文本文件
///
/// 读取文件开头最多 4KB，出现空字节即视为二进制文件。
/// 读取失败的文件同样视为非文本，不参与统计。
pub fn is_text_file(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let mut sample = Vec::with_capacity(SAMPLE_SIZE as usize);
    if file.take(SAMPLE_SIZE).read_to_end(&mut sample).is_err() {
        return false;
    }

    !sample.contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_plain_text_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("a.txt");
        fs::write(&path, "hello\nworld\n").unwrap();

        assert!(is_text_file(&path));
    }

    #[test]
    fn test_empty_file_is_text() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(is_text_file(&path));
    }

    #[test]
    fn test_null_byte_marks_binary() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("image.png");
        fs::write(&path, b"\x89PNG\x00\x1a\n").unwrap();

        assert!(!is_text_file(&path));
    }

    #[test]
    fn test_null_byte_beyond_sample_is_not_seen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("big.dat");

        // 前 4KB 是纯文本，空字节在检测范围之外
        let mut content = vec![b'a'; SAMPLE_SIZE as usize];
        content.push(0);
        fs::write(&path, &content).unwrap();

        assert!(is_text_file(&path));
    }

    #[test]
    fn test_missing_file_is_not_text() {
        let temp_dir = tempdir().unwrap();

        assert!(!is_text_file(&temp_dir.path().join("missing.txt")));
    }
}
