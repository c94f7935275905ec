// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Image file chooser seam
//!
//! The catalog never opens files itself. Whatever front end is in use
//! supplies an [`ImagePicker`] that returns the chosen path, or `None` when
//! the user cancels.

use log::debug;
use std::path::PathBuf;

/// Capability that asks the user for an image file
pub trait ImagePicker {
    /// Returns the chosen file, or `None` if the dialog was cancelled
    fn pick_image(&self) -> Option<PathBuf>;
}

impl<F> ImagePicker for F
where
    F: Fn() -> Option<PathBuf>,
{
    fn pick_image(&self) -> Option<PathBuf> {
        self()
    }
}

/// Picker backed by a path the user already typed
///
/// Blank input counts as a cancelled dialog. A leading `~` is expanded.
#[derive(Clone, Debug)]
pub struct TypedPathPicker {
    input: String,
}

impl TypedPathPicker {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.trim().to_string(),
        }
    }
}

impl ImagePicker for TypedPathPicker {
    fn pick_image(&self) -> Option<PathBuf> {
        if self.input.is_empty() {
            debug!("Image selection cancelled");
            return None;
        }

        Some(PathBuf::from(shellexpand::tilde(&self.input).as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_cancel() {
        assert!(TypedPathPicker::new("").pick_image().is_none());
        assert!(TypedPathPicker::new("   ").pick_image().is_none());
    }

    #[test]
    fn test_plain_path() {
        assert_eq!(
            TypedPathPicker::new(" /img/soup.jpg ").pick_image(),
            Some(PathBuf::from("/img/soup.jpg"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let picked = TypedPathPicker::new("~/img/soup.jpg").pick_image().unwrap();
        let expected = shellexpand::tilde("~/img/soup.jpg").into_owned();
        assert_eq!(picked, PathBuf::from(expected));
        assert!(picked.ends_with("img/soup.jpg"));
    }

    #[test]
    fn test_closure_picker() {
        let picker = || Some(PathBuf::from("/img/cake.png"));
        assert_eq!(picker.pick_image(), Some(PathBuf::from("/img/cake.png")));
    }
}
