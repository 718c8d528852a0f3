/// Date component named by one letter of an order specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Day,
    Month,
    Year,
}

/// Field order for `/T` output, written as `d-m-y` or `-d-m-y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSpec(pub [OrderField; 3]);

impl OrderField {
    fn from_letter(c: char) -> Option<Self> {
        match c {
            'd' => Some(OrderField::Day),
            'm' => Some(OrderField::Month),
            'y' => Some(OrderField::Year),
            _ => None,
        }
    }
}

impl OrderSpec {
    /// Month, day, year
    pub const DEFAULT: OrderSpec =
        OrderSpec([OrderField::Month, OrderField::Day, OrderField::Year]);

    /// Parse `x-y-z` or `-x-y-z` where each letter is `d`, `m` or `y`
    pub fn parse(arg: &str) -> Option<Self> {
        let body = arg.strip_prefix('-').unwrap_or(arg);
        let chars: Vec<char> = body.chars().collect();
        if chars.len() != 5 || chars[1] != '-' || chars[3] != '-' {
            return None;
        }

        Some(OrderSpec([
            OrderField::from_letter(chars[0])?,
            OrderField::from_letter(chars[2])?,
            OrderField::from_letter(chars[4])?,
        ]))
    }
}

impl Default for OrderSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderField::*;

    #[test]
    fn test_parse_both_forms() {
        assert_eq!(OrderSpec::parse("d-m-y"), Some(OrderSpec([Day, Month, Year])));
        assert_eq!(OrderSpec::parse("-y-m-d"), Some(OrderSpec([Year, Month, Day])));
    }

    #[test]
    fn test_parse_allows_repeated_fields() {
        assert_eq!(OrderSpec::parse("d-d-d"), Some(OrderSpec([Day, Day, Day])));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(OrderSpec::parse("d-m"), None);
        assert_eq!(OrderSpec::parse("dd-m-y"), None);
        assert_eq!(OrderSpec::parse("d/m/y"), None);
        assert_eq!(OrderSpec::parse("a-b-c"), None);
        assert_eq!(OrderSpec::parse("D-M-Y"), None);
        assert_eq!(OrderSpec::parse("--full"), None);
    }
}
