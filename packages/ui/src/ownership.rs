//! Which row actions the viewer sees. Display only; the backend enforces
//! ownership on its side.

use api::{Feedback, Recognition, Worklog};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
    pub share: bool,
}

impl RowActions {
    fn owner(is_owner: bool) -> Self {
        Self {
            edit: is_owner,
            delete: is_owner,
            share: false,
        }
    }
}

fn same(viewer_id: &str, owner_id: Option<&str>) -> bool {
    !viewer_id.is_empty() && owner_id == Some(viewer_id)
}

pub fn feedback_actions(viewer_id: &str, feedback: &Feedback) -> RowActions {
    RowActions::owner(same(viewer_id, feedback.author_id()))
}

pub fn worklog_actions(viewer_id: &str, worklog: &Worklog) -> RowActions {
    RowActions::owner(same(viewer_id, worklog.owner_id()))
}

/// The sender may edit and delete; the recipient may share.
pub fn recognition_actions(viewer_id: &str, recognition: &Recognition) -> RowActions {
    RowActions {
        share: same(viewer_id, Some(recognition.recipient_id())),
        ..RowActions::owner(same(viewer_id, Some(recognition.sender_id())))
    }
}
