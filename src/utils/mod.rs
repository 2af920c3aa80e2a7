pub mod url_validator;

/// 短码字符表（大小写敏感的字母 + 数字）
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}
