use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// `UserProfile` -> `user_profile`. Acronyms are kept together, so `HTTPLog`
/// becomes `http_log`.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn camel_case(src: &str) -> String {
    src.to_lower_camel_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

pub fn upper_snake_case(src: &str) -> String {
    src.to_shouty_snake_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_names_to_table_names() {
        assert_eq!(snake_case("User"), "user");
        assert_eq!(snake_case("UserProfile"), "user_profile");
        assert_eq!(snake_case("DataNull"), "data_null");
    }

    #[test]
    fn field_names_round_trip_through_camel_case() {
        assert_eq!(upper_camel_case("user_name"), "UserName");
        assert_eq!(camel_case("user_name"), "userName");
        assert_eq!(snake_case("UserName"), "user_name");
        assert_eq!(upper_snake_case("user_name"), "USER_NAME");
    }
}
