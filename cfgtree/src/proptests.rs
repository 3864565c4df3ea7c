//! Property-based tests for the entry tree and color codec.

use crate::color::Rgb;
use crate::document::{Document, Element};
use crate::entry::Entry;
use proptest::prelude::*;

// Names that are always storable as element names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z_:][a-z0-9_.:-]{0,8}"
}

// Values that are never whitespace-only
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9<>&'\"][a-zA-Z0-9 <>&.]{0,10}"
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    let leaf = prop::option::of(value_strategy()).prop_map(|value| {
        let mut entry = Entry::default();
        if let Some(value) = value {
            entry.set_value(value);
        }
        entry
    });

    leaf.prop_recursive(4, 64, 6, |inner| {
        (
            prop::option::of(value_strategy()),
            prop::collection::vec((name_strategy(), inner), 0..6),
        )
            .prop_map(|(value, children)| {
                let mut entry = Entry::default();
                if let Some(value) = value {
                    entry.set_value(value);
                }
                for (name, child) in children {
                    *entry.entry(&name) = child;
                }
                entry
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Saving then loading into a fresh tree reproduces the tree
    #[test]
    fn save_load_round_trip(original in entry_strategy()) {
        let mut element = Element::new("root");
        original.save(&mut element);
        let text = Document::with_root(element).to_pretty_string().unwrap();
        let document = Document::parse(&text).unwrap();

        let mut loaded = Entry::default();
        loaded.load(document.root().unwrap());
        prop_assert_eq!(loaded, original);
    }

    // Generated names always pass save-time validation
    #[test]
    fn generated_names_are_valid(original in entry_strategy()) {
        prop_assert_eq!(original.first_invalid_name(), None);
    }

    // Indexed access creates exactly the requested child and is stable
    #[test]
    fn entry_is_get_or_create(name in name_strategy(), value in value_strategy()) {
        let mut root = Entry::default();
        prop_assert!(!root.has_entry(&name));
        root.entry(&name).set_value(value.clone());
        prop_assert!(root.has_entry(&name));
        prop_assert_eq!(root.entry(&name).value(), Some(value.as_str()));
        prop_assert_eq!(root.len(), 1);
    }

    // Encoding is always six lowercase hex digits
    #[test]
    fn color_encodes_six_digits(r in any::<u16>(), g in any::<u16>(), b in any::<u16>()) {
        let text = Rgb::new(r, g, b).to_string();
        prop_assert_eq!(text.len(), 6);
        prop_assert!(text.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    // Decoding follows the widening formula exactly, and re-encoding is stable
    #[test]
    fn color_round_trip_matches_formula(r in any::<u16>(), g in any::<u16>(), b in any::<u16>()) {
        let expand = |c: u16| -> u16 {
            let byte = u32::from(c) * 255 / 65535;
            u16::try_from(byte * 65535 / 255).unwrap()
        };

        let decoded: Rgb = Rgb::new(r, g, b).to_string().parse().unwrap();
        prop_assert_eq!(decoded, Rgb::new(expand(r), expand(g), expand(b)));
        prop_assert_eq!(decoded.to_string(), Rgb::new(r, g, b).to_string());
    }
}
