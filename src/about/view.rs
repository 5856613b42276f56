/// Whether a long description is shown cut or in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionView {
    #[default]
    Collapsed,
    Expanded,
}

impl DescriptionView {
    pub fn toggled(self) -> Self {
        match self {
            DescriptionView::Collapsed => DescriptionView::Expanded,
            DescriptionView::Expanded => DescriptionView::Collapsed,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == DescriptionView::Collapsed
    }

    /// Label of the button that performs the next toggle.
    pub fn button_label(self) -> &'static str {
        match self {
            DescriptionView::Collapsed => "Show more",
            DescriptionView::Expanded => "Hide",
        }
    }
}
