/// Which panel receives navigation and edit keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Form,
    Table,
}

impl FocusedPanel {
    /// Form and table swap on both Tab and Shift+Tab
    pub fn next(self) -> Self {
        match self {
            Self::Form => Self::Table,
            Self::Table => Self::Form,
        }
    }
}

/// Editable fields of the amount form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartAmount,
    TargetAmount,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::StartAmount, FormField::TargetAmount];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::StartAmount => "Start amount",
            FormField::TargetAmount => "Target amount",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::StartAmount => Self::TargetAmount,
            Self::TargetAmount => Self::StartAmount,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}
