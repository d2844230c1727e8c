//! Pane dimensions, derived solely from the terminal size.
//!
//! Recomputed from scratch on every resize, never adjusted incrementally.

use ratatui::layout::Rect;

use crate::app_data::{ContainerItem, ImageItem};

/// Rows taken by the top & bottom border of a pane
const BORDER: u16 = 2;
/// Rows taken by the key hint bar
const KEY_BAR: u16 = 1;
/// Rows not available to the two stacked list panes
pub const V_PAD: u16 = BORDER * 2 + KEY_BAR;
/// Columns not available to the list & detail panes
pub const H_PAD: u16 = BORDER * 2;

pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

#[allow(clippy::cast_possible_truncation)]
const CONTAINER_COLUMNS: u16 = ContainerItem::HEADERS.len() as u16;
#[allow(clippy::cast_possible_truncation)]
const IMAGE_COLUMNS: u16 = ImageItem::HEADERS.len() as u16;

/// Usable (inside the borders) sizes of each pane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutDimensions {
    pub width: u16,
    pub height: u16,
    pub list_width: u16,
    pub containers_height: u16,
    pub images_height: u16,
    pub detail_width: u16,
    pub detail_height: u16,
    pub container_column: u16,
    pub image_column: u16,
}

/// Where each pane is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneAreas {
    pub containers: Rect,
    pub images: Rect,
    pub details: Rect,
    pub key_bar: Rect,
}

impl LayoutDimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        let list_width = width.saturating_sub(H_PAD) / 2;
        let detail_width = width.saturating_sub(H_PAD) - list_width;
        let list_rows = height.saturating_sub(V_PAD);
        let containers_height = list_rows / 2;
        Self {
            width,
            height,
            list_width,
            containers_height,
            images_height: list_rows - containers_height,
            detail_width,
            detail_height: height.saturating_sub(BORDER + KEY_BAR),
            container_column: list_width / CONTAINER_COLUMNS,
            image_column: list_width / IMAGE_COLUMNS,
        }
    }

    pub const fn container_widths(&self) -> [u16; CONTAINER_COLUMNS as usize] {
        [self.container_column; CONTAINER_COLUMNS as usize]
    }

    pub const fn image_widths(&self) -> [u16; IMAGE_COLUMNS as usize] {
        [self.image_column; IMAGE_COLUMNS as usize]
    }

    /// Rows of records visible in a table, which loses one row to the header
    pub const fn container_rows(&self) -> u16 {
        self.containers_height.saturating_sub(1)
    }

    pub const fn image_rows(&self) -> u16 {
        self.images_height.saturating_sub(1)
    }

    /// Outer rects, borders included, of every pane
    pub fn areas(&self) -> PaneAreas {
        let frame = Rect::new(0, 0, self.width, self.height);
        let left = self.list_width + BORDER;
        let containers = Rect::new(0, 0, left, self.containers_height + BORDER);
        let images = Rect::new(
            0,
            containers.bottom(),
            left,
            self.images_height + BORDER,
        );
        let details = Rect::new(left, 0, self.detail_width + BORDER, self.detail_height + BORDER);
        let key_bar = Rect::new(0, self.height.saturating_sub(KEY_BAR), self.width, KEY_BAR);
        PaneAreas {
            containers: containers.intersection(frame),
            images: images.intersection(frame),
            details: details.intersection(frame),
            key_bar: key_bar.intersection(frame),
        }
    }
}
