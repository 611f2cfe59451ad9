//! Display helpers shared by screens and the CLI.

/// Groups digits the Indian way: the last three together, then pairs
/// (`12,34,567`).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount rounded to whole rupees, e.g. `₹1,02,500`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(rounded.abs() as u64))
}

pub fn format_safe_coins(amount: u64) -> String {
    group_indian(amount)
}

/// Hides the middle of a mobile number: `123****890`.
pub fn mask_mobile(mobile: &str) -> String {
    let chars: Vec<char> = mobile.chars().collect();
    if chars.len() < 10 {
        return "*".repeat(10);
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{head}****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(52500.0), "₹52,500");
        assert_eq!(format_inr(1_800_000.0), "₹18,00,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_inr(-1500.0), "-₹1,500");
    }

    #[test]
    fn rounds_to_whole_rupees() {
        assert_eq!(format_inr(9699.5), "₹9,700");
        assert_eq!(format_inr(300.49), "₹300");
    }

    #[test]
    fn masks_mobile_numbers() {
        assert_eq!(mask_mobile("1234567890"), "123****890");
        assert_eq!(mask_mobile("12345"), "**********");
        assert_eq!(format_safe_coins(25500), "25,500");
    }
}
