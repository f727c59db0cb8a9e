use crate::utils::error::{FootprintError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> FootprintError {
    FootprintError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Accepts `#RRGGBB` only.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| invalid(field_name, value, "Color must start with '#'"))?;

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(
            field_name,
            value,
            "Color must have exactly six hex digits",
        ));
    }
    Ok(())
}

/// Accepts a positive number followed by `px` or `%`, e.g. `1200px`.
pub fn validate_css_size(field_name: &str, value: &str) -> Result<()> {
    let number = value
        .strip_suffix("px")
        .or_else(|| value.strip_suffix('%'))
        .ok_or_else(|| invalid(field_name, value, "Size must end with 'px' or '%'"))?;

    match number.parse::<f64>() {
        Ok(n) if n > 0.0 => Ok(()),
        _ => Err(invalid(field_name, value, "Size must be a positive number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("provinces_dir", "provinces").is_ok());
        assert!(validate_path("provinces_dir", "").is_err());
        assert!(validate_path("provinces_dir", "a\0b").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("visited_color", "#4EA397").is_ok());
        assert!(validate_hex_color("visited_color", "#ffffff").is_ok());
        assert!(validate_hex_color("visited_color", "4EA397").is_err());
        assert!(validate_hex_color("visited_color", "#4EA39").is_err());
        assert!(validate_hex_color("visited_color", "#GGGGGG").is_err());
    }

    #[test]
    fn test_validate_css_size() {
        assert!(validate_css_size("width", "1200px").is_ok());
        assert!(validate_css_size("width", "100%").is_ok());
        assert!(validate_css_size("width", "1200").is_err());
        assert!(validate_css_size("width", "0px").is_err());
        assert!(validate_css_size("width", "wide px").is_err());
    }
}
