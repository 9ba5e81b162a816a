use std::fmt;

/// One XML attribute, rendered as ` label="value"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opt {
    pub label: String,
    pub value: String,
}

impl Opt {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}=\"{}\"", self.label, self.value)
    }
}

/// Renders `options` in list order with nothing between them.
pub fn render_options(options: &[Opt]) -> String {
    options.iter().map(Opt::to_string).collect()
}
