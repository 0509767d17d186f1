use crate::{
    data::model::Listen,
    ui::{
        traits::View,
        views::{PinTrack, RecommendPersonally, WriteReview},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    PinTrack,
    Recommend,
    WriteReview,
}

/// The listen modal currently on screen. Each visible variant owns its view,
/// and the view owns the listen it was opened for.
#[derive(Default)]
pub enum ModalState {
    #[default]
    Hidden,
    PinTrack(PinTrack),
    Recommend(RecommendPersonally),
    WriteReview(WriteReview),
}

impl ModalState {
    pub fn kind(&self) -> Option<ModalKind> {
        match self {
            ModalState::Hidden => None,
            ModalState::PinTrack(_) => Some(ModalKind::PinTrack),
            ModalState::Recommend(_) => Some(ModalKind::Recommend),
            ModalState::WriteReview(_) => Some(ModalKind::WriteReview),
        }
    }

    pub fn listen(&self) -> Option<&Listen> {
        match self {
            ModalState::Hidden => None,
            ModalState::PinTrack(modal) => Some(&modal.listen),
            ModalState::Recommend(modal) => Some(&modal.listen),
            ModalState::WriteReview(modal) => Some(&modal.listen),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalState::Hidden)
    }

    pub fn view_mut(&mut self) -> Option<&mut dyn View> {
        match self {
            ModalState::Hidden => None,
            ModalState::PinTrack(modal) => Some(modal as &mut dyn View),
            ModalState::Recommend(modal) => Some(modal as &mut dyn View),
            ModalState::WriteReview(modal) => Some(modal as &mut dyn View),
        }
    }
}
