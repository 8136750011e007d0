//! Hand-maintained build descriptor for platforms without a package-query tool.
//!
//! Windows has no standard place for the Mesa development pack, so the paths
//! below must be edited whenever the local install moves.

use crate::app::models::BuildConfigDescriptor;
use anyhow::{bail, Context, Result};
use regex::Regex;

pub const WINDOWS_MESA_NAME: &str = "windows (mesa3d 20.0.2 development pack)";

pub const WINDOWS_MESA: BuildConfigDescriptor = BuildConfigDescriptor {
    include_paths: &[r"C:\Devel\mesa\include"],
    header_paths: &[r"C:\Devel\mesa\include\GL\glcorearb.h"],
    library_search_paths: &[
        r"C:\Devel\mesa3d-20.0.2-development-pack-msvc\lib\x64\src\gallium\targets\libgl-gdi",
    ],
    library_names: &["opengl32"],
    // Core profile is capped at 3.3
    defines: &[
        "GL_GLEXT_PROTOTYPES=1",
        "GL_VERSION_4_0=0",
        "GL_VERSION_4_1=0",
        "GL_VERSION_4_2=0",
        "GL_VERSION_4_3=0",
        "GL_VERSION_4_4=0",
        "GL_VERSION_4_5=0",
        "GL_VERSION_4_6=0",
    ],
    blacklist_item_regexes: &[],
    whitelist_function_regexes: &[r"gl\w+"],
    whitelist_type_regexes: &[r"GL\w+"],
    whitelist_variable_regexes: &[r"GL\w+"],
};

const DEFINE_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*=.*$";

impl BuildConfigDescriptor {
    /// Checks that every define is `NAME=VALUE` and every filter compiles as a regex.
    pub fn validate(&self) -> Result<()> {
        let define_re = Regex::new(DEFINE_PATTERN)?;
        for define in self.defines {
            if !define_re.is_match(define) {
                bail!("Malformed define {:?}, expected NAME=VALUE", define);
            }
        }

        let filters = [
            ("blacklist_item_regexes", self.blacklist_item_regexes),
            ("whitelist_function_regexes", self.whitelist_function_regexes),
            ("whitelist_type_regexes", self.whitelist_type_regexes),
            ("whitelist_variable_regexes", self.whitelist_variable_regexes),
        ];
        for (field, patterns) in filters {
            for pat in patterns {
                Regex::new(pat).with_context(|| format!("Invalid regex in {}: {}", field, pat))?;
            }
        }

        Ok(())
    }
}
