/// Форматирует число с разделителями тысяч (пробелами)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1 234 567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let digits: Vec<char> = n.to_string().chars().rev().collect();
    let mut result = String::new();
    for chunk in digits.chunks(3) {
        if !result.is_empty() {
            result.push(' ');
        }
        result.extend(chunk.iter());
    }
    result.chars().rev().collect()
}
