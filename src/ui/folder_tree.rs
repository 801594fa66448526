// SPDX-License-Identifier: MPL-2.0
//! Folder tree pane.
//!
//! Shows directories and supported image files below a root, expanding
//! folders lazily on click. Every click is also reported to the parent as
//! a selection so the viewer can activate the folder or file.

use crate::domain::media::is_supported_image;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, Column, Container, Scrollable, Text};
use iced::{Element, Length, Padding};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// What a tree row points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    Image,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// Lists the direct children of `dir` shown in the tree: folders first,
/// then supported images, each group ordered by name.
///
/// Unreadable directories and entries are skipped with a warning.
pub fn list_children(dir: &Path) -> Vec<TreeEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            tracing::warn!(folder = %dir.display(), error = %err, "cannot list folder");
            return Vec::new();
        }
    };

    let mut entries: Vec<TreeEntry> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                tracing::warn!(folder = %dir.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter_map(|path| {
            let kind = if path.is_dir() {
                EntryKind::Folder
            } else if path.is_file() && is_supported_image(&path) {
                EntryKind::Image
            } else {
                return None;
            };
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some(TreeEntry { path, name, kind })
        })
        .collect();

    entries.sort_by(|a, b| {
        (a.kind == EntryKind::Image)
            .cmp(&(b.kind == EntryKind::Image))
            .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
    });
    entries
}

/// A row of the flattened, currently visible tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub entry: &'a TreeEntry,
    pub depth: usize,
    pub expanded: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Clicked(PathBuf),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user picked a folder or file.
    Select(PathBuf),
}

/// Contextual data needed to render the tree.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Default)]
pub struct State {
    root: Option<PathBuf>,
    children: HashMap<PathBuf, Vec<TreeEntry>>,
    expanded: HashSet<PathBuf>,
    selected: Option<PathBuf>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-roots the tree, dropping all cached listings.
    pub fn set_root(&mut self, root: PathBuf) {
        self.children.clear();
        self.expanded.clear();
        self.selected = None;
        self.load_children(&root);
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn is_expanded(&self, path: &Path) -> bool {
        self.expanded.contains(path)
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Clicked(path) => {
                if path.is_dir() {
                    self.toggle(&path);
                }
                self.selected = Some(path.clone());
                Effect::Select(path)
            }
        }
    }

    fn toggle(&mut self, path: &Path) {
        if !self.expanded.remove(path) {
            // Re-list on every expansion so new files show up.
            self.load_children(path);
            self.expanded.insert(path.to_path_buf());
        }
    }

    fn load_children(&mut self, dir: &Path) {
        self.children.insert(dir.to_path_buf(), list_children(dir));
    }

    /// Flattens the expanded part of the tree in display order.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        let mut rows = Vec::new();
        if let Some(root) = &self.root {
            self.collect_rows(root, 0, &mut rows);
        }
        rows
    }

    fn collect_rows<'a>(&'a self, dir: &Path, depth: usize, rows: &mut Vec<VisibleRow<'a>>) {
        let Some(children) = self.children.get(dir) else {
            return;
        };
        for entry in children {
            let expanded = entry.kind == EntryKind::Folder && self.expanded.contains(&entry.path);
            rows.push(VisibleRow {
                entry,
                depth,
                expanded,
            });
            if expanded {
                self.collect_rows(&entry.path, depth + 1, rows);
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Text::new(
            self.root
                .as_ref()
                .map(|root| root.display().to_string())
                .unwrap_or_else(|| ctx.i18n.tr("tree-empty")),
        )
        .size(typography::CAPTION);

        let mut list = Column::new();
        for row in self.visible_rows() {
            list = list.push(self.view_row(row));
        }

        let content = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("tree-title")).size(typography::BODY))
            .push(header)
            .push(Scrollable::new(list).width(Length::Fill).height(Length::Fill));

        Container::new(content)
            .padding(spacing::XS)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_row<'a>(&self, row: VisibleRow<'a>) -> Element<'a, Message> {
        let marker = match (row.entry.kind, row.expanded) {
            (EntryKind::Folder, true) => "▾ ",
            (EntryKind::Folder, false) => "▸ ",
            (EntryKind::Image, _) => "  ",
        };
        let label = Text::new(format!("{marker}{}", row.entry.name)).size(typography::BODY_SM);
        let is_selected = self.selected.as_deref() == Some(row.entry.path.as_path());

        button(label)
            .on_press(Message::Clicked(row.entry.path.clone()))
            .padding(Padding {
                left: spacing::XXS + sizing::TREE_INDENT * row.depth as f32,
                ..Padding::new(2.0)
            })
            .width(Length::Fill)
            .style(if is_selected {
                button::primary
            } else {
                button::text
            })
            .into()
    }
}
