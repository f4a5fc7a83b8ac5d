//! Generated member names derived from field names.

/// Derives the generated property name for a field.
///
/// `_isEnabled` and `isEnabled` both become `IsEnabled`. Names in any other
/// shape are returned unchanged, which the rule engine reports as a
/// collision with the field itself.
///
/// # Examples
///
/// ```
/// use observable_gen::derive_property_name;
///
/// assert_eq!(derive_property_name("_isEnabled"), "IsEnabled");
/// assert_eq!(derive_property_name("count"), "Count");
/// assert_eq!(derive_property_name("Title"), "Title");
/// ```
#[must_use]
pub fn derive_property_name(field_name: &str) -> String {
    if let Some(rest) = field_name.strip_prefix('_')
        && starts_lowercase(rest)
    {
        return upper_first(rest);
    }
    if starts_lowercase(field_name) {
        return upper_first(field_name);
    }
    field_name.to_owned()
}

fn starts_lowercase(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_lowercase)
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("_isEnabled", "IsEnabled")]
    #[case("_count", "Count")]
    #[case("_x", "X")]
    #[case("name", "Name")]
    #[case("firstName", "FirstName")]
    #[case("_élan", "Élan")]
    fn strips_prefix_and_uppercases(#[case] field: &str, #[case] expected: &str) {
        assert_eq!(derive_property_name(field), expected);
    }

    #[rstest]
    #[case("Title")]
    #[case("_Title")]
    #[case("__value")]
    #[case("_")]
    #[case("_1st")]
    #[case("")]
    fn leaves_other_shapes_untouched(#[case] field: &str) {
        assert_eq!(derive_property_name(field), field);
    }
}
