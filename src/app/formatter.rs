use anyhow::{Context, Result};
use serde::Serialize;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders one JSON object, compact unless `pretty` is set.
    pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.context("Failed to serialize JSON output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::descriptor::WINDOWS_MESA;
    use serde_json::Value;

    const FIELDS: [&str; 9] = [
        "include_paths",
        "header_paths",
        "library_search_paths",
        "library_names",
        "defines",
        "blacklist_item_regexes",
        "whitelist_function_regexes",
        "whitelist_type_regexes",
        "whitelist_variable_regexes",
    ];

    #[test]
    fn descriptor_has_every_field_as_string_array() {
        let json = OutputGenerator::render(&WINDOWS_MESA, false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), FIELDS.len());
        for field in FIELDS {
            let items = object[field].as_array().unwrap();
            assert!(items.iter().all(Value::is_string), "{}", field);
        }
        assert_eq!(object["blacklist_item_regexes"], Value::Array(Vec::new()));
    }

    #[test]
    fn windows_paths_keep_backslashes() {
        let json = OutputGenerator::render(&WINDOWS_MESA, false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["include_paths"][0], r"C:\Devel\mesa\include");
        assert_eq!(value["library_names"][0], "opengl32");
    }

    #[test]
    fn compact_output_is_single_line() {
        let json = OutputGenerator::render(&WINDOWS_MESA, false).unwrap();
        assert!(!json.contains('\n'));

        let pretty = OutputGenerator::render(&WINDOWS_MESA, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&json).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let first = OutputGenerator::render(&WINDOWS_MESA, false).unwrap();
        let second = OutputGenerator::render(&WINDOWS_MESA, false).unwrap();
        assert_eq!(first, second);
    }
}
