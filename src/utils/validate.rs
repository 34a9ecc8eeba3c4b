use once_cell::sync::Lazy;
use regex::Regex;

// 学号中可能出现点号，因此允许 '.'
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("Invalid username regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、点、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters long");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("jdoe").is_ok());
        assert!(validate_username("0801CS211001").is_ok());
        assert!(validate_username("t.sharma_2").is_ok());
    }

    #[test]
    fn test_username_length() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_username_charset() {
        assert_eq!(
            validate_username("john doe"),
            Err("Username must contain only letters, numbers, dots, underscores or hyphens")
        );
        assert!(validate_username("x@y.com").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("pw").is_ok());
        assert_eq!(validate_password(""), Err("Password is required"));
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
