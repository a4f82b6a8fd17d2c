//! 确认弹窗的状态更新

use crate::message::ModalMessage;
use crate::model::{App, ConfirmChoice};

pub fn update(app: &mut App, msg: ModalMessage) {
    let answered = match msg {
        ModalMessage::ToggleChoice => {
            app.confirm_choice = app.confirm_choice.toggle();
            return;
        }
        ModalMessage::Submit => match app.confirm_choice {
            ConfirmChoice::Ok => app.dialog.accept(),
            ConfirmChoice::Cancel => app.dialog.cancel(),
        },
        ModalMessage::Accept => app.dialog.accept(),
        ModalMessage::Cancel => app.dialog.cancel(),
    };
    if answered {
        app.confirm_choice = ConfirmChoice::default();
    }
}
