// lib.rs - 库函数

pub mod error;
pub mod input;
pub mod layout;
pub mod links;

pub use error::SortError;
pub use input::parse_input_paths;
pub use layout::{basename, classify, is_mate_file, Bucket, Layout, LinkOp};
pub use links::{create_links, execute, prepare_target_dirs};

use std::path::Path;

/// 按文件数量分类，并在 `root` 下创建目录和符号链接
///
/// 返回识别出的类型；文件数量不是 1、2、3 时返回 `None`，只创建目录。
pub fn sort_reads<S: AsRef<str>>(inputs: &[S], root: &Path) -> Result<Option<Layout>, SortError> {
    let layout = Layout::from_count(inputs.len());
    match layout {
        Some(layout) => log::info!("Detected layout {:?} for {} file(s)", layout, inputs.len()),
        None => log::info!("Unsupported number of input files ({}), nothing linked", inputs.len()),
    }

    let ops = classify(inputs);
    execute(root, &ops)?;
    Ok(layout)
}
