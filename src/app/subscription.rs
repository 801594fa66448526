// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only honored when no widget captured the event,
//! so typing `+` or `r` into the search field does not zoom or rotate.

use super::Message;
use crate::application::viewer::Command;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if status == event::Status::Captured || modifiers.command() || modifiers.alt() {
                return None;
            }
            shortcut_command(&key).map(Message::Shortcut)
        }
        _ => None,
    })
}

/// Maps a pressed key to the viewer command bound to it.
pub fn shortcut_command(key: &Key) -> Option<Command> {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(Command::Previous),
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        Key::Character("+" | "=") => Some(Command::ZoomIn),
        Key::Character("-") => Some(Command::ZoomOut),
        Key::Character("r" | "R") => Some(Command::Rotate),
        Key::Character("f" | "F") => Some(Command::FitToWindow),
        _ => None,
    }
}
