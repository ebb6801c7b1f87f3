use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub modal_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingAction {
    OpenCodes,
    CloseCodes,
}

impl Reducible for ViewState {
    type Action = LandingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let modal_open = match action {
            LandingAction::OpenCodes => true,
            LandingAction::CloseCodes => false,
        };
        if modal_open == self.modal_open {
            return self;
        }
        debug!("Codes modal {}", if modal_open { "opened" } else { "closed" });
        Rc::new(ViewState { modal_open })
    }
}

/// The part of the codes modal that received a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalHit {
    Backdrop,
    Panel,
    CloseButton,
}

impl ModalHit {
    pub fn dismisses(self) -> bool {
        matches!(self, ModalHit::Backdrop | ModalHit::CloseButton)
    }
}
