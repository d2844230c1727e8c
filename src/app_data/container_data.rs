use std::fmt;

use ratatui::widgets::TableState;
use serde::Deserialize;

use super::statefull_list::StatefulList;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn get(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ContainerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single line of `docker ps --format json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContainerItem {
    #[serde(rename = "ID")]
    pub id: ContainerId,
    #[serde(rename = "Names", default)]
    pub name: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Status", alias = "status", default)]
    pub status: String,
    #[serde(rename = "State", default)]
    pub state: String,
}

impl ContainerItem {
    pub const HEADERS: [&'static str; 5] = ["ID", "Name", "Status", "Image", "State"];

    /// Cell text, in the same order as `HEADERS`
    pub fn row(&self) -> [&str; 5] {
        [
            self.id.get(),
            &self.name,
            &self.status,
            &self.image,
            &self.state,
        ]
    }
}

/// Container pane model
#[derive(Debug, Clone)]
pub struct ContainerData {
    containers: StatefulList<ContainerItem>,
}

impl ContainerData {
    pub fn new() -> Self {
        Self {
            containers: StatefulList::new(vec![]),
        }
    }

    /// Replace all containers with a freshly fetched set
    pub fn set_containers(&mut self, containers: Vec<ContainerItem>) {
        self.containers.set_items(containers);
    }

    pub fn get_container_items(&self) -> &[ContainerItem] {
        self.containers.items()
    }

    pub fn get_container_len(&self) -> usize {
        self.containers.len()
    }

    pub fn get_container_state(&mut self) -> &mut TableState {
        self.containers.state_mut()
    }

    #[cfg(test)]
    pub fn selected_index(&self) -> Option<usize> {
        self.containers.selected_index()
    }

    pub fn selected_container(&self) -> Option<&ContainerItem> {
        self.containers.selected_item()
    }

    /// Title for the containers panel, e.g. "2/5"
    pub fn container_title(&self) -> String {
        self.containers.get_state_title()
    }

    pub fn containers_forward(&mut self, n: usize) {
        self.containers.forward(n);
    }

    pub fn containers_back(&mut self, n: usize) {
        self.containers.back(n);
    }

    pub fn containers_start(&mut self) {
        self.containers.start();
    }

    pub fn containers_end(&mut self) {
        self.containers.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_docker_ps_line() {
        let line = r#"{"Command":"\"nginx -g…\"","CreatedAt":"2024-01-01 10:00:00 +0000 UTC","ID":"4f2a1c9e0b7d","Image":"nginx:latest","Labels":"","LocalVolumes":"0","Mounts":"","Names":"web","Networks":"bridge","Ports":"80/tcp","RunningFor":"2 hours ago","Size":"0B","State":"running","Status":"Up 2 hours"}"#;
        let item = serde_json::from_str::<ContainerItem>(line).unwrap();
        assert_eq!(item.id.get(), "4f2a1c9e0b7d");
        assert_eq!(
            item.row(),
            ["4f2a1c9e0b7d", "web", "Up 2 hours", "nginx:latest", "running"]
        );
    }

    #[test]
    fn missing_display_fields_default_to_empty() {
        let item = serde_json::from_str::<ContainerItem>(r#"{"ID":"abc"}"#).unwrap();
        assert_eq!(item.row(), ["abc", "", "", "", ""]);
    }

    #[test]
    fn lowercase_status_accepted() {
        let item =
            serde_json::from_str::<ContainerItem>(r#"{"ID":"abc","status":"Exited (0)"}"#).unwrap();
        assert_eq!(item.status, "Exited (0)");
    }

    #[test]
    fn id_is_required() {
        assert!(serde_json::from_str::<ContainerItem>(r#"{"Names":"web"}"#).is_err());
    }

    #[test]
    fn selected_container_follows_cursor() {
        let mut data = ContainerData::new();
        assert!(data.selected_container().is_none());
        data.set_containers(vec![
            serde_json::from_str(r#"{"ID":"a","Names":"one"}"#).unwrap(),
            serde_json::from_str(r#"{"ID":"b","Names":"two"}"#).unwrap(),
        ]);
        data.containers_forward(1);
        assert_eq!(data.selected_container().map(|i| i.name.as_str()), Some("two"));
        assert_eq!(data.container_title(), "2/2");
    }
}
