use crate::constants::{FADED_CLASS, HIDDEN_CLASS, MODAL_FULL_CLASS, MODAL_SMALL_CLASS};
use crate::core::projects::{ModalCommand, ModalController};
use crate::core::{FrameTime, Tickable};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The project dialog's elements.
#[derive(Clone)]
pub struct ModalDom {
    pub modal: web::HtmlElement,
    pub body: web::HtmlElement,
    pub content: Option<web::HtmlElement>,
}

impl ModalDom {
    pub fn apply(&self, commands: impl IntoIterator<Item = ModalCommand>) {
        for cmd in commands {
            match cmd {
                ModalCommand::Mount { html } => self.body.set_inner_html(&html),
                ModalCommand::Unhide => {
                    _ = self.modal.class_list().remove_1(HIDDEN_CLASS);
                }
                ModalCommand::FadeIn => {
                    _ = self.modal.class_list().remove_1(FADED_CLASS);
                    self.swap_scale(MODAL_SMALL_CLASS, MODAL_FULL_CLASS);
                }
                ModalCommand::FadeOut => {
                    _ = self.modal.class_list().add_1(FADED_CLASS);
                    self.swap_scale(MODAL_FULL_CLASS, MODAL_SMALL_CLASS);
                }
                ModalCommand::Hide => {
                    _ = self.modal.class_list().add_1(HIDDEN_CLASS);
                }
            }
        }
    }

    fn swap_scale(&self, from: &str, to: &str) {
        if let Some(content) = &self.content {
            let cl = content.class_list();
            _ = cl.remove_1(from);
            _ = cl.add_1(to);
        }
    }
}

/// Runs the modal's open/close delays.
pub struct ModalView {
    pub controller: Rc<RefCell<ModalController>>,
    pub dom: ModalDom,
}

impl Tickable for ModalView {
    fn on_frame(&mut self, frame: &FrameTime) {
        let commands = self.controller.borrow_mut().tick(frame.dt_sec);
        if !commands.is_empty() {
            self.dom.apply(commands);
        }
    }
}
