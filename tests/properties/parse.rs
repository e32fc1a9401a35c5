//! Property tests for document parsing and rendering.

use proptest::prelude::*;

use helm_image_updater::{parse_document, Field, Target};

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][A-Za-z0-9]{0,12}").unwrap()
}

fn scalar() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/:@ -]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_document` never panics on arbitrary small input.
    #[test]
    fn property_parse_never_panics(source in "(?s).{0,256}") {
        let _ = parse_document(&source);
    }

    /// PROPERTY: Rendering a parsed document and parsing it again yields the same document.
    #[test]
    fn property_render_round_trip(
        entries in proptest::collection::btree_map(key(), scalar(), 0..8),
        repository in scalar(),
        tag in scalar(),
    ) {
        let mut root = serde_yaml_ng::Mapping::new();
        for (k, v) in &entries {
            root.insert(k.clone().into(), v.clone().into());
        }
        let mut image = serde_yaml_ng::Mapping::new();
        image.insert("repository".into(), repository.clone().into());
        image.insert("tag".into(), tag.clone().into());
        root.insert("image".into(), image.into());

        let rendered = serde_yaml_ng::to_string(&root).unwrap();
        let document = parse_document(&rendered).unwrap();

        prop_assert_eq!(document.root(), &root);
        prop_assert_eq!(
            document.image_field(&Target::Root, Field::Repository).unwrap(),
            Some(repository)
        );
        prop_assert_eq!(document.image_field(&Target::Root, Field::Tag).unwrap(), Some(tag));
    }
}
