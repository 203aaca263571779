//! Autocomplete word lists flattened from the API catalogs.

use mpyedit_board::Capability;

use crate::{
    catalog::ApiCatalog,
    node::ApiNode,
    surface::{base_catalog, full_catalog},
};

/// Flattens a catalog into the dotted-path word list the autocomplete
/// widget consumes.
///
/// Every module contributes its own name. Members are emitted as
/// `module.member`; under a composite module each submodule contributes
/// `module.submodule`, and its members both `module.submodule.member` and
/// the `submodule.member` shorthand scripts use after a
/// `from module import submodule`. Exactly two levels are unrolled;
/// anything nested deeper than the catalogs' module/class/member shape is
/// not flattened further.
pub(crate) fn flatten_api(catalog: &ApiCatalog) -> Vec<String> {
    let mut words = Vec::new();
    for (module, node) in catalog.modules() {
        words.push(module.to_owned());
        match node {
            ApiNode::Members(members) => {
                for member in *members {
                    words.push(format!("{module}.{member}"));
                }
            }
            ApiNode::Submodules(submodules) => {
                for (submodule, subnode) in submodules {
                    words.push(format!("{module}.{submodule}"));
                    if let ApiNode::Members(members) = subnode {
                        for member in *members {
                            words.push(format!("{module}.{submodule}.{member}"));
                            words.push(format!("{submodule}.{member}"));
                        }
                    }
                }
            }
            ApiNode::Bare => {}
        }
    }
    words
}

/// Returns the autocomplete word list for the full MicroPython API,
/// including the extra modules of full-capability boards.
#[must_use]
pub fn full_api() -> Vec<String> {
    flatten_api(full_catalog())
}

/// Returns the autocomplete word list for the base MicroPython API that
/// every supported board ships.
#[must_use]
pub fn base_api() -> Vec<String> {
    flatten_api(base_catalog())
}

/// Returns the autocomplete word list matching a board identifier.
///
/// The lookup is lenient and never fails: identifiers that are not
/// recognized fall back to the base word list, since a too-small
/// autocomplete list is harmless where a wrong compatibility verdict is
/// not.
#[must_use]
pub fn compatible_api(board_id: &str) -> Vec<String> {
    match Capability::for_board_id(board_id) {
        Capability::Full => full_api(),
        Capability::Base => base_api(),
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    mod flatten_tests {
        use super::*;

        #[test]
        fn every_top_level_module_is_a_word() {
            for catalog in [base_catalog(), full_catalog()] {
                let words = flatten_api(catalog);
                for (name, _) in catalog.modules() {
                    assert!(words.iter().any(|word| word == name), "{name} is missing");
                }
            }
        }

        #[test]
        fn member_words_follow_their_module() {
            let words = flatten_api(base_catalog());
            assert!(words.contains(&"audio".to_owned()));
            assert!(words.contains(&"audio.play".to_owned()));
            assert!(words.contains(&"audio.AudioFrame".to_owned()));
        }

        #[test]
        fn submodule_members_are_emitted_with_and_without_the_module_prefix() {
            let words = flatten_api(base_catalog());
            assert!(words.contains(&"microbit.Image".to_owned()));
            assert!(words.contains(&"microbit.Image.HAPPY".to_owned()));
            assert!(words.contains(&"Image.HAPPY".to_owned()));
            assert!(words.contains(&"NeoPixel.clear".to_owned()));
        }

        #[test]
        fn traversal_order_is_catalog_order() {
            let words = flatten_api(base_catalog());
            assert_eq!(
                &words[..6],
                [
                    "microbit",
                    "microbit.Image",
                    "microbit.Image.ALL_CLOCKS",
                    "Image.ALL_CLOCKS",
                    "microbit.Image.ANGRY",
                    "Image.ANGRY",
                ]
            );
        }

        #[test]
        fn bare_names_contribute_no_members() {
            let words = flatten_api(base_catalog());
            assert!(words.contains(&"microbit.panic".to_owned()));
            assert!(!words.iter().any(|word| word.starts_with("microbit.panic.")));
        }

        #[test]
        fn nesting_below_two_levels_is_not_unrolled() {
            let catalog = ApiCatalog::new([(
                "outer",
                ApiNode::Submodules(IndexMap::from([(
                    "inner",
                    ApiNode::Submodules(IndexMap::from([("deep", ApiNode::Bare)])),
                )])),
            )]);
            let words = flatten_api(&catalog);
            assert_eq!(words, ["outer", "outer.inner"]);
        }

        #[test]
        fn flattening_is_deterministic() {
            assert_eq!(flatten_api(base_catalog()), flatten_api(base_catalog()));
            assert_eq!(flatten_api(full_catalog()), flatten_api(full_catalog()));
        }
    }

    mod word_list_tests {
        use super::*;

        #[test]
        fn full_api_is_a_superset_of_base_api() {
            let full = full_api();
            for word in base_api() {
                assert!(full.contains(&word), "{word} is missing from the full API");
            }
        }

        #[test]
        fn only_the_full_api_lists_the_extra_modules() {
            let full = full_api();
            assert!(full.contains(&"microbit.microphone".to_owned()));
            assert!(full.contains(&"microbit.microphone.sound_level".to_owned()));
            assert!(full.contains(&"microphone.sound_level".to_owned()));
            assert!(!base_api().iter().any(|word| word.contains("microphone")));
        }

        #[test]
        fn full_capability_boards_get_the_full_word_list() {
            assert_eq!(compatible_api("9903"), full_api());
            assert_eq!(compatible_api("9904"), full_api());
        }

        #[test]
        fn base_capability_boards_get_the_base_word_list() {
            assert_eq!(compatible_api("9900"), base_api());
            assert_eq!(compatible_api("9901"), base_api());
        }

        #[test]
        fn unrecognized_boards_fall_back_to_the_base_word_list() {
            // This lookup picks a word list and never validates; only the
            // compatibility check rejects unknown identifiers.
            assert_eq!(compatible_api("0000"), base_api());
            assert_eq!(compatible_api(""), base_api());
        }
    }
}
