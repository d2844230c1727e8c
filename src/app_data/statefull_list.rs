use ratatui::widgets::TableState;

/// A record set paired with the table cursor used to render it
#[derive(Debug, Clone, Default)]
pub struct StatefulList<T> {
    items: Vec<T>,
    state: TableState,
}

impl<T> StatefulList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut output = Self {
            items: vec![],
            state: TableState::default(),
        };
        output.set_items(items);
        output
    }

    /// Replace the whole record set, keeping the cursor within bounds
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let selected = match (self.items.len(), self.state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.state.select(selected);
        if selected.is_none() {
            *self.state.offset_mut() = 0;
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index().and_then(|i| self.items.get(i))
    }

    /// Move the cursor down by `n` rows, stopping at the last row
    pub fn forward(&mut self, n: usize) {
        if let Some(i) = self.state.selected() {
            let last = self.items.len().saturating_sub(1);
            self.state.select(Some(i.saturating_add(n).min(last)));
        }
    }

    /// Move the cursor up by `n` rows, stopping at the first row
    pub fn back(&mut self, n: usize) {
        if let Some(i) = self.state.selected() {
            self.state.select(Some(i.saturating_sub(n)));
        }
    }

    pub fn start(&mut self) {
        if !self.items.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn end(&mut self) {
        if !self.items.is_empty() {
            self.state.select(Some(self.items.len() - 1));
        }
    }

    /// "current/total" position, used in the panel titles
    pub fn get_state_title(&self) -> String {
        if self.items.is_empty() {
            String::new()
        } else {
            let len = self.items.len();
            let c = self.state.selected().map_or(0, |value| value + 1);
            format!("{c}/{len}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_selection() {
        let mut list = StatefulList::<u8>::new(vec![]);
        assert_eq!(list.selected_index(), None);
        list.forward(1);
        list.end();
        list.start();
        assert_eq!(list.selected_index(), None);
        assert!(list.selected_item().is_none());
        assert_eq!(list.get_state_title(), "");
    }

    #[test]
    fn first_row_selected_when_populated() {
        let list = StatefulList::new(vec!['a', 'b']);
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.selected_item(), Some(&'a'));
        assert_eq!(list.get_state_title(), "1/2");
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut list = StatefulList::new(vec![1, 2, 3]);
        list.back(1);
        assert_eq!(list.selected_index(), Some(0));
        list.forward(10);
        assert_eq!(list.selected_index(), Some(2));
        list.forward(1);
        assert_eq!(list.selected_index(), Some(2));
        list.back(1);
        assert_eq!(list.selected_item(), Some(&2));
        list.start();
        assert_eq!(list.selected_index(), Some(0));
        list.end();
        assert_eq!(list.selected_index(), Some(2));
    }

    #[test]
    fn replacing_items_clamps_selection() {
        let mut list = StatefulList::new(vec![1, 2, 3, 4]);
        list.end();
        list.set_items(vec![7, 8]);
        assert_eq!(list.selected_index(), Some(1));
        assert_eq!(list.selected_item(), Some(&8));

        list.set_items(vec![]);
        assert_eq!(list.selected_index(), None);

        list.set_items(vec![5]);
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn replacing_items_keeps_cursor_in_range() {
        let mut list = StatefulList::new(vec![1, 2, 3]);
        list.forward(1);
        list.set_items(vec![4, 5, 6, 7]);
        assert_eq!(list.selected_index(), Some(1));
    }
}
