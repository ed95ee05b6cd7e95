//! End-to-end translation tests.

use utility_style::prelude::*;
use utility_style::{serialize, translate};

#[test]
fn test_unrecognized_token_is_ignored() {
    assert_eq!(translate("foo-bar"), "{  }");
    assert_eq!(translate(""), "{  }");
}

#[test]
fn test_spacing_scales_by_four() {
    assert_eq!(translate("mb-3"), "{ marginBottom: 12 }");
    assert_eq!(translate("mt-0"), "{ marginTop: 0 }");
    assert_eq!(translate("mr-2 ml-5"), "{ marginRight: 8, marginLeft: 20 }");
    assert_eq!(
        translate("p-1 px-3 py-6"),
        "{ padding: 4, paddingHorizontal: 12, paddingVertical: 24 }"
    );
}

#[test]
fn test_half_unit_constants() {
    assert_eq!(translate("mb-0.5"), "{ marginBottom: 2 }");
    assert_eq!(translate("mt-0.5"), "{ marginTop: 2 }");
    assert_eq!(translate("p-0.5"), "{ padding: 6 }");
    assert_eq!(translate("py-0.5"), "{ paddingVertical: 6 }");
    // Horizontal margins have no half-unit form.
    assert_eq!(translate("mr-0.5 ml-0.5"), "{  }");
}

#[test]
fn test_later_token_overwrites() {
    assert_eq!(translate("mb-2 mb-4"), "{ marginBottom: 16 }");
    assert_eq!(
        translate("mb-2 bg-white mb-4"),
        "{ marginBottom: 16, backgroundColor: 'white' }"
    );
    assert_eq!(translate("text-sm text-[22px]"), "{ fontSize: 22 }");
}

#[test]
fn test_shadow_merges_after_existing_properties() {
    let mapping = Translator::new().to_mapping("bg-white shadow").unwrap();
    let keys: Vec<_> = mapping.keys().map(StyleProperty::name).collect();

    assert_eq!(
        keys,
        ["backgroundColor", "shadowColor", "shadowOffset", "shadowOpacity", "shadowRadius"]
    );
    assert_eq!(
        mapping.get(StyleProperty::BackgroundColor).and_then(StyleValue::as_str),
        Some("white")
    );
}

#[test]
fn test_shadow_twice_keeps_one_group() {
    assert_eq!(translate("shadow shadow-sm"), translate("shadow"));
}

#[test]
fn test_end_to_end_sample() {
    assert_eq!(
        translate("flex-row items-center justify-between mb-4 bg-white p-4 rounded-xl shadow"),
        "{ flexDirection: 'row', alignItems: 'center', justifyContent: 'space-between', \
         marginBottom: 16, backgroundColor: 'white', padding: 16, borderRadius: 12, \
         shadowColor: '#000', shadowOffset: { width: 0, height: 1 }, shadowOpacity: 0.1, \
         shadowRadius: 2 }"
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let mapping = Translator::new()
        .to_mapping("shadow text-white font-medium flex-1 rounded-full")
        .unwrap();
    let first = serialize(&mapping);
    assert_eq!(first, serialize(&mapping));
    assert_eq!(
        first,
        "{ shadowColor: '#000', shadowOffset: { width: 0, height: 1 }, shadowOpacity: 0.1, \
         shadowRadius: 2, color: 'white', fontWeight: '500', flex: 1, borderRadius: 9999 }"
    );
}

#[test]
fn test_bracket_literal() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    assert_eq!(translate("text-[22px]"), "{ fontSize: 22 }");
    assert_eq!(translate("text-[abcpx]"), "{  }");
}

#[test]
fn test_unknown_suffix_in_claimed_family() {
    assert_eq!(translate("text-gray-999"), "{  }");
    assert_eq!(translate("rounded-3xl"), "{  }");
}

#[test]
fn test_rounded_2xl_assigns_sixteen() {
    // Follows the radius scale between `rounded-xl` and `rounded-full`.
    assert_eq!(translate("rounded-2xl"), "{ borderRadius: 16 }");
}

#[test]
fn test_alignment_keywords() {
    assert_eq!(
        translate("items-start justify-end"),
        "{ alignItems: 'flex-start', justifyContent: 'flex-end' }"
    );
    assert_eq!(
        translate("items-end justify-center"),
        "{ alignItems: 'flex-end', justifyContent: 'center' }"
    );
}

#[test]
fn test_colors_and_sizes() {
    assert_eq!(
        translate("bg-gray-50 text-gray-500 text-xs"),
        "{ backgroundColor: '#f9fafb', color: '#6b7280', fontSize: 12 }"
    );
    assert_eq!(
        translate("bg-terracotta text-terracotta text-base"),
        "{ backgroundColor: '#e07a5f', color: '#e07a5f', fontSize: 16 }"
    );
}

#[test]
fn test_variants_are_not_supported() {
    assert_eq!(translate("hover:bg-white md:p-4 bg-white/30"), "{  }");
}

#[test]
fn test_jsx_format() {
    let translator = Translator::with_options(TranslateOptions::new().format(OutputFormat::Jsx));
    assert_eq!(translator.translate("flex-1"), "{{ flex: 1 }}");
}

#[test]
fn test_translator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Translator>();

    let translator = std::sync::Arc::new(Translator::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let translator = translator.clone();
            std::thread::spawn(move || translator.translate(&format!("mb-{i}")))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[3], "{ marginBottom: 12 }");
}
