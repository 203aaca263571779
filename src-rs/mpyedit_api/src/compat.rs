//! The board compatibility check for user scripts.

use std::sync::LazyLock;

use mpyedit_board::{Capability, UnrecognizedBoard};
use mpyedit_imports::{ImportRecord, detect_imports};

use crate::{
    node::ApiNode,
    surface::{base_catalog, extra_catalog},
};

/// Dotted paths that exist in the extra catalog but not in the base one.
///
/// Importing any of these needs full-capability firmware, so they are what
/// the compatibility check looks for in a script's import record.
static EXTRA_ONLY_PATHS: LazyLock<Vec<Vec<&'static str>>> = LazyLock::new(extra_only_paths);

/// Decides whether a script's imports stay within what a board's firmware
/// ships.
///
/// Full-capability boards run everything, so their check passes without
/// scanning the script. For base-capability boards the script is
/// compatible unless its imports reach a name that only exists in the
/// extra catalog, such as `microbit.microphone`. Import detection is
/// best-effort (see [`mpyedit_imports::detect_imports`]): a missed import
/// weakens the warning but never produces a false rejection.
///
/// # Errors
///
/// Returns [`UnrecognizedBoard`] if `board_id` is not a recognized board
/// identifier. An unknown board must not be silently assumed to have
/// either capability level.
pub fn is_api_used_compatible(board_id: &str, source: &str) -> Result<bool, UnrecognizedBoard> {
    match Capability::try_for_board_id(board_id)? {
        Capability::Full => Ok(true),
        Capability::Base => {
            let record = detect_imports(source);
            Ok(!uses_extra_names(&record))
        }
    }
}

/// Returns whether the record reaches a name only full-capability
/// firmware ships.
///
/// Reaching counts regardless of marking: `from microbit.microphone
/// import was_sound` leaves the `microphone` node unmarked but still uses
/// the module.
fn uses_extra_names(record: &ImportRecord) -> bool {
    EXTRA_ONLY_PATHS
        .iter()
        .any(|path| record_reaches(record, path))
}

fn record_reaches(record: &ImportRecord, path: &[&'static str]) -> bool {
    let Some((first, rest)) = path.split_first() else {
        return false;
    };
    let Some(mut node) = record.module(first) else {
        return false;
    };
    for segment in rest {
        match node.child(segment) {
            Some(child) => node = child,
            None => return false,
        }
    }
    true
}

fn extra_only_paths() -> Vec<Vec<&'static str>> {
    let mut paths = Vec::new();
    for (name, extra_node) in extra_catalog().modules() {
        match base_catalog().module(name) {
            Some(base_node) => {
                let mut path = vec![name];
                collect_extra_only(base_node, extra_node, &mut path, &mut paths);
            }
            None => paths.push(vec![name]),
        }
    }
    paths
}

/// Collects the paths under a shared name where the extra catalog goes
/// beyond the base one.
fn collect_extra_only(
    base: &ApiNode,
    extra: &ApiNode,
    path: &mut Vec<&'static str>,
    paths: &mut Vec<Vec<&'static str>>,
) {
    match extra {
        ApiNode::Submodules(submodules) => {
            for (&name, extra_submodule) in submodules {
                if let Some(base_submodule) = base.submodule(name) {
                    path.push(name);
                    collect_extra_only(base_submodule, extra_submodule, path, paths);
                    path.pop();
                } else if !base.contains(name) {
                    let mut extra_path = path.clone();
                    extra_path.push(name);
                    paths.push(extra_path);
                }
            }
        }
        ApiNode::Members(members) => {
            for &member in *members {
                if !base.contains(member) {
                    let mut extra_path = path.clone();
                    extra_path.push(member);
                    paths.push(extra_path);
                }
            }
        }
        ApiNode::Bare => {}
    }
}
