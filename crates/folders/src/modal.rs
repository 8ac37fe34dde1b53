//! Text of the modals opened by folder actions

use crate::error::Result;
use crate::lang::Lang;
use crate::models::FolderId;
use crate::store::{FolderState, PendingModal};

/// What the confirm button of a modal does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalConfirm {
    DeleteFolder(FolderId),
}

/// Localized content of a pending modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
    pub close_label: String,
    /// Label and effect of the confirm button, if the modal has one
    pub confirm: Option<(String, ModalConfirm)>,
}

/// Build the content for `modal` from the current state
///
/// Folders deleted since the modal was requested are shown with an empty
/// name rather than failing.
pub fn modal_content(
    modal: PendingModal,
    state: &dyn FolderState,
    lang: &Lang,
) -> Result<ModalContent> {
    let folder_title = |id: FolderId| -> Result<String> {
        Ok(state
            .folders_by_id()?
            .get(&id)
            .map(|folder| folder.title.text.clone())
            .unwrap_or_default())
    };

    let (title, body, confirm) = match modal {
        PendingModal::ShareFolder(id) => (
            lang.get("ShareFolderTitle"),
            lang.format("ShareFolderBody", &[("title", folder_title(id)?)]),
            None,
        ),
        PendingModal::EditFolder(id) => (
            lang.get("EditFolderTitle"),
            lang.format("EditFolderBody", &[("title", folder_title(id)?)]),
            None,
        ),
        PendingModal::DeleteFolder(id) => (
            lang.get("DeleteFolderTitle"),
            lang.format("DeleteFolderBody", &[("title", folder_title(id)?)]),
            Some((lang.get("FilterDelete"), ModalConfirm::DeleteFolder(id))),
        ),
        PendingModal::LimitReached(kind) => (
            lang.get("LimitReachedTitle"),
            lang.format(
                kind.message_key(),
                &[("limit", state.current_limit(kind)?.to_string())],
            ),
            None,
        ),
    };

    Ok(ModalContent {
        title,
        body,
        close_label: lang.get("Close"),
        confirm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FolderRecord, LimitKind, PlanLimits};
    use crate::store::InMemoryFolderStore;

    fn store() -> InMemoryFolderStore {
        let store = InMemoryFolderStore::new();
        store
            .upsert_folder(FolderRecord::new(7, "Work").with_included([1]))
            .unwrap();
        store
    }

    #[test]
    fn test_limit_message_uses_current_quota() {
        let store = store();
        store.set_limits(PlanLimits::premium()).unwrap();
        let lang = Lang::load("en").unwrap();

        let content =
            modal_content(PendingModal::LimitReached(LimitKind::DialogFilters), &store, &lang)
                .unwrap();
        assert_eq!(content.title, "Limit Reached");
        assert!(content.body.contains("30"));
        assert!(content.confirm.is_none());
    }

    #[test]
    fn test_delete_has_confirm() {
        let lang = Lang::load("en").unwrap();
        let content =
            modal_content(PendingModal::DeleteFolder(FolderId(7)), &store(), &lang).unwrap();
        assert!(content.body.contains("Work"));
        assert_eq!(
            content.confirm,
            Some((
                "Delete Folder".to_string(),
                ModalConfirm::DeleteFolder(FolderId(7))
            ))
        );
        assert_eq!(content.close_label, "Close");
    }

    #[test]
    fn test_missing_folder_has_empty_name() {
        let lang = Lang::load("en").unwrap();
        let content =
            modal_content(PendingModal::ShareFolder(FolderId(99)), &store(), &lang).unwrap();
        assert_eq!(content.body, "Create an invite link so others can join .");
    }

    #[test]
    fn test_arabic_falls_back_for_limit_messages() {
        let lang = Lang::load("ar").unwrap();
        let content =
            modal_content(PendingModal::LimitReached(LimitKind::ChatlistJoined), &store(), &lang)
                .unwrap();
        assert!(content.body.starts_with("You can only have 2"));
    }
}
