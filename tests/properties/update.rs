//! Property tests for the update rules.

use proptest::prelude::*;

use helm_image_updater::domain::{apply_image_update, ImageUpdate};
use helm_image_updater::{parse_document, Document, Target};

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._/:@-]{1,24}").unwrap()
}

fn values_file(chart: &Option<String>, repository: &str, tag: &str) -> Document {
    let mut image = serde_yaml_ng::Mapping::new();
    image.insert("repository".into(), repository.into());
    image.insert("tag".into(), tag.into());

    let mut root = serde_yaml_ng::Mapping::new();
    root.insert("replicaCount".into(), serde_yaml_ng::Value::from(1i64));
    match chart {
        Some(name) => {
            let mut section = serde_yaml_ng::Mapping::new();
            section.insert("image".into(), image.into());
            root.insert(name.as_str().into(), section.into());
        }
        None => {
            root.insert("image".into(), image.into());
        }
    }
    Document::new(root)
}

fn request() -> impl Strategy<Value = (Option<String>, Option<String>)> {
    (proptest::option::of(value()), proptest::option::of(value()))
        .prop_filter("at least one field", |(v, r)| v.is_some() || r.is_some())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Applying the same update twice reports no change the second time.
    #[test]
    fn property_update_is_idempotent(
        chart in proptest::option::of("[a-z]{1,8}"),
        repository in value(),
        tag in value(),
        (version, new_repository) in request(),
    ) {
        let mut document = values_file(&chart, &repository, &tag);
        let update = ImageUpdate {
            target: Target::from_chart(chart),
            version,
            repository: new_repository,
        };

        apply_image_update(&mut document, &update).unwrap();
        let after_first = document.clone();
        let second = apply_image_update(&mut document, &update).unwrap();

        prop_assert!(second.iter().all(|change| !change.changed()));
        prop_assert_eq!(document, after_first);
    }

    /// PROPERTY: Requesting the current values leaves the document exactly as parsed.
    #[test]
    fn property_same_values_change_nothing(
        chart in proptest::option::of("[a-z]{1,8}"),
        repository in value(),
        tag in value(),
    ) {
        let original = values_file(&chart, &repository, &tag);
        let mut document = original.clone();
        let update = ImageUpdate::new(Target::from_chart(chart))
            .with_version(tag)
            .with_repository(repository);

        let changes = apply_image_update(&mut document, &update).unwrap();

        prop_assert_eq!(changes.len(), 2);
        prop_assert!(changes.iter().all(|change| !change.changed()));
        prop_assert_eq!(document, original);
    }

    /// PROPERTY: Only the requested fields differ after an update.
    #[test]
    fn property_update_touches_only_requested_fields(
        repository in value(),
        tag in value(),
        new_tag in value(),
    ) {
        let mut document = values_file(&None, &repository, &tag);
        let update = ImageUpdate::new(Target::Root).with_version(new_tag.clone());

        apply_image_update(&mut document, &update).unwrap();

        let expected = values_file(&None, &repository, &new_tag);
        prop_assert_eq!(&document, &expected);
        let reparsed = parse_document(&serde_yaml_ng::to_string(expected.root()).unwrap()).unwrap();
        prop_assert_eq!(reparsed.root().get("replicaCount"), Some(&serde_yaml_ng::Value::from(1i64)));
    }
}
