//! Property test generators for path values
//!
//! Strategies here build path strings in the shapes the parser has to
//! handle: plain relative paths, rooted paths, Windows drives and UNC
//! shares, mixed separators and redundant `.` or empty segments.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Generate a segment with no separators
    pub fn segment() -> impl Strategy<Value = String> {
        prop_oneof![
            6 => "[a-zA-Z0-9_][a-zA-Z0-9_ -]{0,12}",
            1 => Just("..".to_string()),
            1 => Just(".hidden".to_string()),
            1 => Just("файл".to_string()),
        ]
    }

    /// Generate file extensions, including none
    pub fn file_extension() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("rs".to_string()),
            Just("txt".to_string()),
            Just("tar.gz".to_string()),
            Just("json".to_string()),
            Just("".to_string()),
        ]
    }

    /// Generate a filename usable with `with_name`
    pub fn filename() -> impl Strategy<Value = String> {
        ("[a-zA-Z0-9_][a-zA-Z0-9_-]{0,15}", Self::file_extension()).prop_map(|(name, ext)| {
            if ext.is_empty() {
                name
            } else {
                format!("{}.{}", name, ext)
            }
        })
    }

    /// Generate POSIX paths with redundant separators and `.` segments
    pub fn posix_path() -> impl Strategy<Value = String> {
        (
            any::<bool>(),
            prop::collection::vec(
                prop_oneof![4 => Self::segment(), 1 => Just(".".to_string()), 1 => Just("".to_string())],
                0..=6,
            ),
        )
            .prop_map(|(rooted, segments)| {
                let body = segments.join("/");
                if rooted {
                    format!("/{}", body)
                } else {
                    body
                }
            })
    }

    /// Generate Windows paths with optional drive or UNC share
    pub fn windows_path() -> impl Strategy<Value = String> {
        let anchor = prop_oneof![
            Just(String::new()),
            Just("\\".to_string()),
            "[A-Za-z]:".prop_map(|d| d.to_string()),
            "[A-Za-z]:\\\\".prop_map(|d| d.to_string()),
            Just("\\\\server\\share\\".to_string()),
        ];
        (
            anchor,
            prop::collection::vec(Self::segment(), 0..=5),
            any::<bool>(),
        )
            .prop_map(|(anchor, segments, forward)| {
                let sep = if forward { "/" } else { "\\" };
                format!("{}{}", anchor, segments.join(sep))
            })
    }

    /// Generate paths with mixed separators
    pub fn path_with_mixed_separators() -> impl Strategy<Value = String> {
        prop::collection::vec(Self::segment(), 1..=5).prop_map(|segments| {
            let mut result = String::new();
            for (i, segment) in segments.iter().enumerate() {
                if i > 0 {
                    if i % 2 == 0 {
                        result.push('/');
                    } else {
                        result.push('\\');
                    }
                }
                result.push_str(segment);
            }
            result
        })
    }

    /// Generate all types of paths for comprehensive testing
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => Self::posix_path(),
            3 => Self::windows_path(),
            2 => Self::path_with_mixed_separators(),
            1 => Just("".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segments_have_no_separators(segment in PathGenerators::segment()) {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.contains('/'));
            prop_assert!(!segment.contains('\\'));
        }

        #[test]
        fn filenames_are_single_segments(name in PathGenerators::filename()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name != "." && name != "..");
            prop_assert!(!name.contains('/'));
        }

        #[test]
        fn generators_dont_panic(_any_path in PathGenerators::any_path()) {}
    }
}
