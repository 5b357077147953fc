//! Display formatting shared by every page.

/// Avatar background palette
pub const AVATAR_COLORS: [&str; 5] = ["#ee9e43", "#c9375e", "#4cc9f0", "#560bad", "#993d8b"];

/// `$1,234` for whole amounts, `$1,234.50` otherwise
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);

    match cents % 100 {
        0 => format!("{}${}", sign, whole),
        frac => format!("{}${}.{:02}", sign, whole, frac),
    }
}

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "N/A".to_string(),
    }
}

/// Upper-case the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First letters of the first two words, upper-cased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Stable per-vendor colour, so a re-render never changes an avatar
pub fn avatar_color(id: i64) -> &'static str {
    AVATAR_COLORS[id.rem_euclid(AVATAR_COLORS.len() as i64) as usize]
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(950.0), "$950");
        assert_eq!(format_money(1234.0), "$1,234");
        assert_eq!(format_money(1234567.5), "$1,234,567.50");
        assert_eq!(format_money(-42.25), "-$42.25");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Acme Office Supplies"), "AO");
        assert_eq!(initials("boda"), "B");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_capitalize_and_rating() {
        assert_eq!(capitalize("expiring"), "Expiring");
        assert_eq!(capitalize(""), "");
        assert_eq!(format_rating(Some(4.256)), "4.3");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color(3), avatar_color(3));
        assert_eq!(avatar_color(0), "#ee9e43");
        assert_eq!(avatar_color(-1), "#993d8b");
    }
}
