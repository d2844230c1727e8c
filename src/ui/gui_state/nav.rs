use std::borrow::Cow;

/// The pane that currently receives input, cycled with tab
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub enum NavPanel {
    #[default]
    Containers,
    Images,
    Details,
}

/// A key hint, drawn in the key bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    key: &'static str,
    label: &'static str,
}

impl Action {
    const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl NavPanel {
    pub fn title(self) -> Cow<'static, str> {
        match self {
            Self::Containers => "Containers".into(),
            Self::Images => "Images".into(),
            Self::Details => "Details".into(),
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Containers => Self::Images,
            Self::Images => Self::Details,
            Self::Details => Self::Containers,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Containers => Self::Details,
            Self::Images => Self::Containers,
            Self::Details => Self::Images,
        }
    }

    /// Key hints relevant to this panel
    pub fn actions(self) -> Vec<Action> {
        let mut out = vec![Action::new("tab", "next panel")];
        match self {
            Self::Containers => {
                out.push(Action::new("↑↓", "select"));
                out.push(Action::new("enter", "logs"));
            }
            Self::Images => {
                out.push(Action::new("↑↓", "select"));
                out.push(Action::new("enter", "inspect"));
            }
            Self::Details => {
                out.push(Action::new("↑↓ PgUp PgDn", "scroll"));
            }
        }
        out.push(Action::new("r", "refresh"));
        out.push(Action::new("h", "help"));
        out.push(Action::new("q", "quit"));
        out
    }
}
