#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use xmlb::{
    block_tag, cdata_tag, comment, end_xml, new, option_content_tag, option_tag, tag,
    BuilderError, Opt, Outcome,
};

// Strategy for generating non-empty labels
fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_\\-\\.]{0,20}"
}

// Strategy for generating non-empty text
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \\.,:/@]{1,50}"
}

fn opt_strategy() -> impl Strategy<Value = Opt> {
    (label_strategy(), "[a-zA-Z0-9 ]{0,20}").prop_map(|(k, v)| Opt::new(k, v))
}

fn error_strategy() -> impl Strategy<Value = BuilderError> {
    prop_oneof![
        Just(BuilderError::LabelEmpty),
        Just(BuilderError::ContentsEmpty),
        Just(BuilderError::OptionsEmpty),
        Just(BuilderError::InnerEmpty),
        Just(BuilderError::VersionEmpty),
        Just(BuilderError::EncodingEmpty),
        Just(BuilderError::EmptyDocument),
    ]
}

proptest! {
    #[test]
    fn test_tag_shape(label in label_strategy(), contents in text_strategy()) {
        let xml = end_xml(tag(new(), &label, &contents)).unwrap();
        prop_assert_eq!(xml, format!("<{label}>{contents}</{label}>\n"));
    }

    #[test]
    fn test_option_tag_lists_every_option(
        label in label_strategy(),
        options in vec(opt_strategy(), 1..6)
    ) {
        let xml = end_xml(option_tag(new(), &label, &options)).unwrap();
        let rendered: String = options
            .iter()
            .map(|o| format!(" {}=\"{}\"", o.label, o.value))
            .collect();
        prop_assert_eq!(xml, format!("<{label}{rendered}/>\n"));
    }

    #[test]
    fn test_siblings_reverse_order(
        entries in vec((label_strategy(), text_strategy()), 1..8)
    ) {
        let document = entries
            .iter()
            .fold(new(), |doc, (label, contents)| tag(doc, label, contents));
        let expected: String = entries
            .iter()
            .rev()
            .map(|(label, contents)| format!("<{label}>{contents}</{label}>\n"))
            .collect();
        prop_assert_eq!(end_xml(document).unwrap(), expected);
    }

    #[test]
    fn test_empty_label_wins_over_any_prior_state(
        contents in text_strategy(),
        prior in prop_oneof![
            Just(None),
            error_strategy().prop_map(Some),
        ]
    ) {
        let document: Outcome = match prior {
            Some(kind) => Err(kind),
            None => new(),
        };
        prop_assert_eq!(tag(document, "", &contents), Err(BuilderError::LabelEmpty));
    }

    #[test]
    fn test_errors_are_sticky(
        kind in error_strategy(),
        label in label_strategy(),
        contents in text_strategy(),
        options in vec(opt_strategy(), 1..3)
    ) {
        let document: Outcome = Err(kind);
        let document = tag(document, &label, &contents);
        let document = cdata_tag(document, &label, &contents);
        let document = option_content_tag(document, &label, &contents, &options);
        let document = block_tag(document, &label, tag(new(), &label, &contents));
        let document = comment(document, &contents);
        prop_assert_eq!(end_xml(document), Err(kind));
    }

    #[test]
    fn test_block_tag_embeds_inner_verbatim(
        label in label_strategy(),
        inner_label in label_strategy(),
        contents in text_strategy()
    ) {
        let inner = tag(new(), &inner_label, &contents);
        let inner_text = end_xml(inner.clone()).unwrap();
        let xml = end_xml(block_tag(new(), &label, inner)).unwrap();
        prop_assert_eq!(xml, format!("<{label}>\n{inner_text}</{label}>\n"));
    }
}
