//! Active-tab state for rendered tabs containers.

use super::CodeBlockSpec;

/// Error returned when a tab selection cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    /// No rendered tabs container has this id.
    #[error("no tabs container with id {0}")]
    UnknownContainer(usize),

    /// The tab index is not within the container's files.
    #[error("tab {index} out of range for container {container} with {len} tabs")]
    OutOfRange {
        /// Container id.
        container: usize,
        /// Requested tab index.
        index: usize,
        /// Number of tabs in the container.
        len: usize,
    },
}

/// Active tab index of one container.
///
/// Starts at the first tab. Any index in `0..len` can be selected from any
/// other in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelection {
    active: usize,
    len: usize,
}

impl TabSelection {
    /// Create a selection over `len` tabs with the first tab active.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Index of the active tab.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of selectable tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Make `index` the active tab.
    ///
    /// Returns the out-of-range index unchanged as `Err` if it is not a tab.
    pub fn select(&mut self, index: usize) -> Result<(), usize> {
        if index >= self.len {
            return Err(index);
        }
        self.active = index;
        Ok(())
    }
}

/// A rendered tabs container: its parsed files plus the active tab.
///
/// Owned by the [`RenderedArticle`](crate::RenderedArticle) that produced
/// it. Re-rendering the article creates fresh containers with the first tab
/// active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabsContainer {
    id: usize,
    files: Vec<CodeBlockSpec>,
    selection: TabSelection,
}

impl TabsContainer {
    /// Create a container. Returns `None` for an empty file list, since an
    /// empty container is not rendered at all.
    #[must_use]
    pub fn new(id: usize, files: Vec<CodeBlockSpec>) -> Option<Self> {
        if files.is_empty() {
            return None;
        }
        let selection = TabSelection::new(files.len());
        Some(Self {
            id,
            files,
            selection,
        })
    }

    /// Container id, counted in document order over rendered containers.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Parsed files in source order.
    #[must_use]
    pub fn files(&self) -> &[CodeBlockSpec] {
        &self.files
    }

    /// Index of the active tab.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.selection.active()
    }

    /// File shown in the code pane.
    #[must_use]
    pub fn active_file(&self) -> &CodeBlockSpec {
        &self.files[self.selection.active()]
    }

    /// Switch to tab `index`.
    pub fn select(&mut self, index: usize) -> Result<(), TabError> {
        self.selection
            .select(index)
            .map_err(|index| TabError::OutOfRange {
                container: self.id,
                index,
                len: self.selection.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> CodeBlockSpec {
        CodeBlockSpec {
            filename: name.to_owned(),
            language: "rs".to_owned(),
            code: format!("// {name}"),
        }
    }

    #[test]
    fn test_selection_starts_at_zero() {
        let selection = TabSelection::new(3);
        assert_eq!(selection.active(), 0);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_selection_any_index_reachable() {
        let mut selection = TabSelection::new(4);
        assert_eq!(selection.select(3), Ok(()));
        assert_eq!(selection.active(), 3);
        assert_eq!(selection.select(0), Ok(()));
        assert_eq!(selection.active(), 0);
        assert_eq!(selection.select(2), Ok(()));
        assert_eq!(selection.active(), 2);
    }

    #[test]
    fn test_selection_out_of_range_keeps_state() {
        let mut selection = TabSelection::new(2);
        selection.select(1).unwrap();
        assert_eq!(selection.select(2), Err(2));
        assert_eq!(selection.active(), 1);
    }

    #[test]
    fn test_container_empty_files_is_none() {
        assert!(TabsContainer::new(0, Vec::new()).is_none());
    }

    #[test]
    fn test_container_active_file_follows_selection() {
        let mut container = TabsContainer::new(7, vec![file("a.rs"), file("b.rs")]).unwrap();
        assert_eq!(container.active_file().filename, "a.rs");

        container.select(1).unwrap();
        assert_eq!(container.active_index(), 1);
        assert_eq!(container.active_file().filename, "b.rs");
    }

    #[test]
    fn test_container_out_of_range_error() {
        let mut container = TabsContainer::new(7, vec![file("a.rs")]).unwrap();
        let err = container.select(5).unwrap_err();
        assert_eq!(
            err,
            TabError::OutOfRange {
                container: 7,
                index: 5,
                len: 1
            }
        );
        assert_eq!(container.active_index(), 0);
    }
}
