/// 解析旧格式的路径列表字符串 "[a, b, c]"
///
/// 删除所有 `[` 和 `]`，再按 `", "` 分割。路径本身含有 `", "` 时会被错误拆分。
/// 空字符串得到 `[""]`，不会得到空列表。
pub fn parse_input_paths(raw: &str) -> Vec<String> {
    raw.replace(['[', ']'], "")
        .split(", ")
        .map(str::to_string)
        .collect()
}
