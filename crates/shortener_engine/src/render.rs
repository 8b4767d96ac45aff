use shortener_core::{strings, CopyLabel, DisplayHint, Phase};

use crate::{FormView, Slot, ViewCommand};

/// Translate a display hint into commands for the presentation layer.
///
/// The URL input text is never written here; it belongs to the user until
/// an explicit clear.
#[allow(clippy::vec_init_then_push)]
pub fn render(hint: &DisplayHint) -> Vec<ViewCommand> {
    let mut cmds = Vec::new();

    cmds.push(ViewCommand::SetHint {
        slot: Slot::UrlInput,
        hint: hint.input_hint,
    });

    cmds.push(ViewCommand::SetEnabled {
        slot: Slot::SubmitButton,
        enabled: hint.submit_enabled,
    });
    cmds.push(ViewCommand::SetText {
        slot: Slot::SubmitLabel,
        text: if hint.submit_busy {
            strings::SUBMIT_BUSY_LABEL
        } else {
            strings::SUBMIT_LABEL
        }
        .to_string(),
    });
    cmds.push(ViewCommand::SetVisible {
        slot: Slot::BusyIndicator,
        visible: hint.submit_busy,
    });
    cmds.push(ViewCommand::SetVisible {
        slot: Slot::SubmitIcon,
        visible: !hint.submit_busy,
    });

    banner(
        &mut cmds,
        Slot::ErrorBanner,
        Slot::ErrorText,
        hint.error_text.as_deref(),
    );
    banner(
        &mut cmds,
        Slot::SuccessBanner,
        Slot::SuccessText,
        hint.success_text.as_deref(),
    );

    if hint.phase == Phase::Loading {
        cmds.push(ViewCommand::SetText {
            slot: Slot::ResultPlaceholder,
            text: strings::RESULT_PLACEHOLDER.to_string(),
        });
    }

    match &hint.result {
        Some(result) => {
            cmds.push(ViewCommand::SetText {
                slot: Slot::ShortUrlLink,
                text: result.short_url.clone(),
            });
            cmds.push(ViewCommand::SetText {
                slot: Slot::OriginalUrl,
                text: result.original_label.clone(),
            });
            cmds.push(ViewCommand::SetVisible {
                slot: Slot::ResultPlaceholder,
                visible: false,
            });
            cmds.push(ViewCommand::SetVisible {
                slot: Slot::ResultDetails,
                visible: true,
            });
            cmds.push(ViewCommand::SetVisible {
                slot: Slot::ResultPanel,
                visible: true,
            });
        }
        None => {
            cmds.push(ViewCommand::SetText {
                slot: Slot::ShortUrlLink,
                text: String::new(),
            });
            cmds.push(ViewCommand::SetText {
                slot: Slot::OriginalUrl,
                text: String::new(),
            });
            cmds.push(ViewCommand::SetVisible {
                slot: Slot::ResultDetails,
                visible: false,
            });
            cmds.push(ViewCommand::SetVisible {
                slot: Slot::ResultPlaceholder,
                visible: true,
            });
        }
    }

    let has_result = hint.result.is_some();
    for slot in [Slot::CopyButton, Slot::VisitButton] {
        cmds.push(ViewCommand::SetEnabled {
            slot,
            enabled: has_result,
        });
    }
    cmds.push(ViewCommand::SetText {
        slot: Slot::CopyButton,
        text: match hint.copy_label {
            CopyLabel::Copy => strings::COPY_LABEL,
            CopyLabel::Copied => strings::COPIED_LABEL,
        }
        .to_string(),
    });

    cmds
}

fn banner(cmds: &mut Vec<ViewCommand>, banner: Slot, text_slot: Slot, text: Option<&str>) {
    if let Some(text) = text {
        cmds.push(ViewCommand::SetText {
            slot: text_slot,
            text: text.to_string(),
        });
    }
    cmds.push(ViewCommand::SetVisible {
        slot: banner,
        visible: text.is_some(),
    });
}

/// Push commands into a presentation implementation, in order.
pub fn apply(view: &dyn FormView, commands: impl IntoIterator<Item = ViewCommand>) {
    for command in commands {
        match command {
            ViewCommand::SetText { slot, text } => view.set_text(slot, &text),
            ViewCommand::SetEnabled { slot, enabled } => view.set_enabled(slot, enabled),
            ViewCommand::SetVisible { slot, visible } => view.set_visible(slot, visible),
            ViewCommand::SetHint { slot, hint } => view.set_hint(slot, hint),
        }
    }
}
