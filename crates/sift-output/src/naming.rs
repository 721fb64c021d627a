//! Output key derivation.

use sift_model::{ObjectRef, OutputNaming, SiftOptions};

/// Remainder of `key` below `prefix`, compared segment-wise.
///
/// `"raw/2025/a.csv"` is under `"raw"` (remainder `"2025/a.csv"`);
/// `"rawdata/a.csv"` is not. An empty prefix contains every key.
pub fn strip_prefix_segments<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(key);
    }
    key.strip_prefix(prefix)?.strip_prefix('/')
}

/// Whether `key` lies under the watched input prefix.
pub fn is_under_prefix(key: &str, prefix: &str) -> bool {
    strip_prefix_segments(key, prefix).is_some_and(|rest| !rest.is_empty())
}

/// Key the filtered copy of `input` is written to.
///
/// Tagged naming writes `<output_prefix>/<tag><file name>`. Mirrored naming
/// replaces the leading input-prefix segments with the output prefix and
/// keeps the rest of the path; a key outside the input prefix is mirrored
/// whole under the output prefix.
pub fn output_key(input: &ObjectRef, options: &SiftOptions) -> String {
    match options.naming() {
        OutputNaming::Tagged { tag } => join_key(
            &options.output_prefix,
            &format!("{tag}{}", input.file_name()),
        ),
        OutputNaming::Mirrored => {
            let rest =
                strip_prefix_segments(&input.key, &options.input_prefix).unwrap_or(&input.key);
            join_key(&options.output_prefix, rest)
        }
    }
}

/// Output object in the same bucket as the input.
pub fn output_object(input: &ObjectRef, options: &SiftOptions) -> ObjectRef {
    input.with_key(output_key(input, options))
}

fn join_key(prefix: &str, rest: &str) -> String {
    if prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{prefix}/{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_for(key: &str, options: &SiftOptions) -> String {
        output_key(&ObjectRef::new("orders", key).unwrap(), options)
    }

    #[test]
    fn prefix_match_is_segment_wise() {
        assert_eq!(strip_prefix_segments("raw/a.csv", "raw"), Some("a.csv"));
        assert_eq!(strip_prefix_segments("raw/x/a.csv", "raw/x"), Some("a.csv"));
        assert_eq!(strip_prefix_segments("rawdata/a.csv", "raw"), None);
        assert_eq!(strip_prefix_segments("a.csv", ""), Some("a.csv"));
        assert!(is_under_prefix("raw/a.csv", "raw"));
        assert!(!is_under_prefix("raw/", "raw"));
        assert!(!is_under_prefix("processed/raw/a.csv", "raw"));
    }

    #[test]
    fn mirrored_replaces_only_the_leading_segment() {
        let options = SiftOptions::default();
        assert_eq!(
            key_for("raw/2025/raw/orders.csv", &options),
            "processed/2025/raw/orders.csv"
        );
        assert_eq!(key_for("raw/orders.csv", &options), "processed/orders.csv");
    }

    #[test]
    fn mirrored_with_nested_prefixes() {
        let options = SiftOptions::new()
            .with_input_prefix("landing/raw")
            .with_output_prefix("landing/clean/");
        assert_eq!(
            key_for("landing/raw/eu/orders.csv", &options),
            "landing/clean/eu/orders.csv"
        );
    }

    #[test]
    fn tagged_uses_file_name_only() {
        let options = SiftOptions::new().with_output_tag(Some("filtered_".into()));
        assert_eq!(
            key_for("raw/2025/01/orders.csv", &options),
            "processed/filtered_orders.csv"
        );
        assert_eq!(key_for("orders.csv", &options), "processed/filtered_orders.csv");
    }

    #[test]
    fn empty_output_prefix_writes_at_bucket_root() {
        let options = SiftOptions::new()
            .with_output_prefix("/")
            .with_output_tag(Some("f_".into()));
        assert_eq!(key_for("raw/a.csv", &options), "f_a.csv");
    }

    #[test]
    fn output_object_keeps_bucket() {
        let input = ObjectRef::new("orders", "raw/a.csv").unwrap();
        let output = output_object(&input, &SiftOptions::default());
        assert_eq!(output.bucket, "orders");
        assert_eq!(output.key, "processed/a.csv");
    }
}
