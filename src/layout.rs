// layout.rs - 按文件数量判断测序数据类型

use std::path::PathBuf;

/// Markers of a forward/reverse mate file.
const MATE_MARKERS: [&str; 2] = ["_1.fastq.gz", "_2.fastq.gz"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    SingleEnd,
    PairedEnd,
    PairedEndWithUnmatched,
}

impl Layout {
    /// 1 → 单端, 2 → 双端, 3 → 双端 + unmatched；其他数量没有分类
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Layout::SingleEnd),
            2 => Some(Layout::PairedEnd),
            3 => Some(Layout::PairedEndWithUnmatched),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    SingleEnd,
    PairedEnd,
    Unmatched,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::SingleEnd, Bucket::PairedEnd, Bucket::Unmatched];

    /// Directory relative to the output root.
    pub fn dir(self) -> &'static str {
        match self {
            Bucket::SingleEnd => "singleEnd",
            Bucket::PairedEnd => "pairedEnd",
            Bucket::Unmatched => "pairedEnd/unmatched_reads",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOp {
    /// Link target, kept exactly as supplied.
    pub source: String,
    pub bucket: Bucket,
    /// Link location relative to the output root.
    pub destination: PathBuf,
}

impl LinkOp {
    fn new(source: &str, bucket: Bucket) -> Self {
        LinkOp {
            source: source.to_string(),
            bucket,
            destination: PathBuf::from(bucket.dir()).join(basename(source)),
        }
    }
}

/// 取最后一个 "/" 之后的部分，不做扩展名解析
pub fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

pub fn is_mate_file(name: &str) -> bool {
    MATE_MARKERS.iter().any(|marker| name.contains(marker))
}

/// 生成链接计划，不触碰文件系统
pub fn classify<S: AsRef<str>>(inputs: &[S]) -> Vec<LinkOp> {
    match Layout::from_count(inputs.len()) {
        Some(Layout::SingleEnd) => vec![LinkOp::new(inputs[0].as_ref(), Bucket::SingleEnd)],
        Some(Layout::PairedEnd) => inputs
            .iter()
            .map(|path| LinkOp::new(path.as_ref(), Bucket::PairedEnd))
            .collect(),
        Some(Layout::PairedEndWithUnmatched) => inputs
            .iter()
            .map(|path| {
                let path = path.as_ref();
                // Each file is tested on its own; the number of matches is not enforced.
                let bucket = if is_mate_file(basename(path)) {
                    Bucket::PairedEnd
                } else {
                    Bucket::Unmatched
                };
                LinkOp::new(path, bucket)
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_variants() {
        assert_eq!(basename("a/b/reads_1.fastq.gz"), "reads_1.fastq.gz");
        assert_eq!(basename("reads.fq"), "reads.fq");
        assert_eq!(basename("/abs/path/x.tar.gz"), "x.tar.gz");
        assert_eq!(basename("dir/"), "");
        assert_eq!(basename(""), "");
        assert_eq!(basename("a//b.fq"), "b.fq");
    }

    #[test]
    fn test_mate_marker_is_substring_match() {
        assert!(is_mate_file("s_1.fastq.gz"));
        assert!(is_mate_file("s_2.fastq.gz.bak"));
        assert!(!is_mate_file("s_3.fastq.gz"));
        assert!(!is_mate_file("s_1.fq.gz"));
    }

    #[test]
    fn test_layout_from_count() {
        assert_eq!(Layout::from_count(0), None);
        assert_eq!(Layout::from_count(1), Some(Layout::SingleEnd));
        assert_eq!(Layout::from_count(2), Some(Layout::PairedEnd));
        assert_eq!(Layout::from_count(3), Some(Layout::PairedEndWithUnmatched));
        assert_eq!(Layout::from_count(4), None);
    }
}
