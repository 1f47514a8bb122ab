//! Cosmetic string helpers used when presenting recipes and ingredients.

use std::sync::LazyLock;

use regex::Regex;

static INGREDIENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*(\w+)\s*(\w+)$").expect("ingredient pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Trims surrounding whitespace and converts each word to title case.
pub fn clean_recipe_name(recipe_name: &str) -> String {
    recipe_name
        .split_whitespace()
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Rewrites a `"<quantity> <unit> <item>"` line as
/// `"<quantity> <unit> of <item>"`. Best-effort: anything that does not
/// match the three-token pattern is returned unchanged.
pub fn format_ingredient(ingredient: &str) -> String {
    match INGREDIENT_PATTERN.captures(ingredient) {
        Some(captures) => format!("{} {} of {}", &captures[1], &captures[2], &captures[3]),
        None => {
            tracing::debug!(ingredient, "could not format ingredient");
            ingredient.to_string()
        }
    }
}

/// Formats a monetary value with the currency's symbol, a thousands-separated
/// two-decimal amount, and the sign ahead of the symbol.
pub fn format_currency(value: f64, currency: &str) -> String {
    let symbol = match currency {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => "$",
    };

    let amount = format!("{:.2}", value.abs());
    let (integer_part, fraction_part) = match amount.split_once('.') {
        Some(parts) => parts,
        None => (amount.as_str(), "00"),
    };

    let mut grouped = String::new();
    let digits = integer_part.len();
    for (index, digit) in integer_part.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{fraction_part}")
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_palindrome(value: &str) -> bool {
    let normalized: Vec<char> = value.trim().to_lowercase().chars().collect();
    normalized.iter().eq(normalized.iter().rev())
}

pub fn trim_whitespace(value: &str) -> String {
    value.trim().to_string()
}

/// Strips everything that is not alphanumeric.
pub fn sanitize_string(value: &str) -> String {
    value.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Length-bounded string check: `min_length` inclusive, `max_length`
/// exclusive.
#[derive(Debug, Clone)]
pub struct StringValidator {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 64,
        }
    }
}

impl StringValidator {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        value.len() >= self.min_length && value.len() < self.max_length
    }
}
