use std::fmt;

use ratatui::widgets::TableState;
use serde::Deserialize;

use super::statefull_list::StatefulList;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn get(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single line of `docker images --format json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageItem {
    #[serde(rename = "ID")]
    pub id: ImageId,
    #[serde(rename = "Repository", default)]
    pub repository: String,
    #[serde(rename = "Tag", default)]
    pub tag: String,
    #[serde(rename = "Size", default)]
    pub size: String,
}

impl ImageItem {
    pub const HEADERS: [&'static str; 4] = ["ID", "Repository", "Tag", "Size"];

    pub fn row(&self) -> [&str; 4] {
        [self.id.get(), &self.repository, &self.tag, &self.size]
    }

    /// repository:tag, or just the id for dangling images
    pub fn reference(&self) -> String {
        match (self.repository.as_str(), self.tag.as_str()) {
            ("" | "<none>", _) => self.id.to_string(),
            (repo, "" | "<none>") => repo.to_owned(),
            (repo, tag) => format!("{repo}:{tag}"),
        }
    }
}

/// Image pane model
#[derive(Debug, Clone)]
pub struct ImageData {
    images: StatefulList<ImageItem>,
}

impl ImageData {
    pub fn new() -> Self {
        Self {
            images: StatefulList::new(vec![]),
        }
    }

    pub fn set_images(&mut self, images: Vec<ImageItem>) {
        self.images.set_items(images);
    }

    pub fn get_image_items(&self) -> &[ImageItem] {
        self.images.items()
    }

    pub fn get_image_len(&self) -> usize {
        self.images.len()
    }

    pub fn get_image_state(&mut self) -> &mut TableState {
        self.images.state_mut()
    }

    #[cfg(test)]
    pub fn selected_index(&self) -> Option<usize> {
        self.images.selected_index()
    }

    pub fn selected_image(&self) -> Option<&ImageItem> {
        self.images.selected_item()
    }

    pub fn image_title(&self) -> String {
        self.images.get_state_title()
    }

    pub fn images_forward(&mut self, n: usize) {
        self.images.forward(n);
    }

    pub fn images_back(&mut self, n: usize) {
        self.images.back(n);
    }

    pub fn images_start(&mut self) {
        self.images.start();
    }

    pub fn images_end(&mut self) {
        self.images.end();
    }
}
