//! Output-directory layout for experiment runs.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::association::AssociationMode;

/// Returns the output folder for one run.
///
/// A combination covering all `nb_stations` stations of the scenario maps to
/// the fixed `AllSTAs` folder; smaller combinations encode their size and
/// members, e.g. `2STAs_1_3`.
pub fn combination_folder(
    output_path: &Path,
    mode: AssociationMode,
    sta_combination: &[usize],
    nb_stations: usize,
) -> PathBuf {
    let name = if sta_combination.len() == nb_stations {
        "AllSTAs".to_string()
    } else {
        format!("{}STAs_{}", sta_combination.len(), sta_combination.iter().join("_"))
    };
    output_path.join(mode.label()).join(name)
}

/// Creates the folder and all of its parents.
///
/// Does nothing if the folder already exists, so runs can be repeated over
/// the same output tree.
pub fn ensure_folder(path: &Path) {
    fs::create_dir_all(path).unwrap_or_else(|e| panic!("Can't create directory {}: {}", path.display(), e));
}
