use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Which subcommand a header introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Run { dry_run: bool },
    Plan,
    Check,
}

impl HeaderKind {
    fn icon(self) -> Icon {
        match self {
            HeaderKind::Run { .. } => Icon::Deploy,
            HeaderKind::Plan => Icon::Plan,
            HeaderKind::Check => Icon::Check,
        }
    }

    fn title(self) -> &'static str {
        match self {
            HeaderKind::Run { dry_run: false } => "flowdeploy run",
            HeaderKind::Run { dry_run: true } => "flowdeploy run (dry run)",
            HeaderKind::Plan => "flowdeploy plan",
            HeaderKind::Check => "flowdeploy check",
        }
    }
}

/// Title line plus `Label: value` rows printed before a command's output
#[derive(Debug, Clone)]
pub struct CommandHeader {
    kind: HeaderKind,
    fields: Vec<(&'static str, String)>,
}

impl CommandHeader {
    pub fn new(kind: HeaderKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    /// Adds the row only when a value is present
    pub fn field_opt(self, label: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.kind.title())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.kind.icon().colored(supports_color, supports_unicode),
            title
        );
        for (label, value) in &self.fields {
            let label = ColoredText::dim(format!("{}:", label)).render(supports_color);
            out.push_str(&format!("{} {}\n", label, value));
        }
        out
    }
}
